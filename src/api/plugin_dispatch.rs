use tracing::debug;

use crate::error::{PartitionError, PartitionResult};
use crate::extensions::{PartitionPlugin, PluginContext, PluginEvent};
use crate::render::{CanvasElement, Renderer};

use super::PartitionController;

impl<E, R> PartitionController<E, R>
where
    E: CanvasElement,
    R: Renderer<E::Context>,
{
    /// Registers an observer. Plugin ids must be unique.
    pub fn register_plugin(&mut self, plugin: Box<dyn PartitionPlugin>) -> PartitionResult<()> {
        if self.has_plugin(plugin.id()) {
            return Err(PartitionError::DuplicatePlugin(plugin.id().to_owned()));
        }
        debug!(id = plugin.id(), "registering partition plugin");
        self.plugins.push(plugin);
        Ok(())
    }

    pub fn unregister_plugin(&mut self, id: &str) -> bool {
        let before = self.plugins.len();
        self.plugins.retain(|plugin| plugin.id() != id);
        before != self.plugins.len()
    }

    #[must_use]
    pub fn has_plugin(&self, id: &str) -> bool {
        self.plugins.iter().any(|plugin| plugin.id() == id)
    }

    #[must_use]
    pub fn plugin_count(&self) -> usize {
        self.plugins.len()
    }

    pub(super) fn plugin_context(&self) -> PluginContext {
        PluginContext {
            lifecycle: self.lifecycle,
            dimensions: self.props.dimensions,
            pixel_ratio: self.surface.pixel_ratio(),
            backing: self.surface.backing_size(),
            quads_len: self.props.geometry.quads.len(),
        }
    }

    pub(super) fn emit_plugin_event(&mut self, event: PluginEvent) {
        if self.plugins.is_empty() {
            return;
        }
        let context = self.plugin_context();
        for plugin in &mut self.plugins {
            plugin.on_event(event, context);
        }
    }
}
