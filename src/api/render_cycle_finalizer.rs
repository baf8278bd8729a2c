use crate::extensions::PluginEvent;
use crate::render::{CanvasElement, Renderer};

use super::PartitionController;

/// Runs after the renderer returned successfully.
pub(super) fn finalize_render_cycle<E, R>(controller: &mut PartitionController<E, R>)
where
    E: CanvasElement,
    R: Renderer<E::Context>,
{
    controller.render_count += 1;
    if let Some(notifier) = controller.render_notifier.as_mut() {
        notifier();
    }
    controller.emit_plugin_event(PluginEvent::Rendered);
}
