use indexmap::IndexSet;
use tracing::trace;

use crate::core::{PickedQuads, Point, QuadViewModel};
use crate::extensions::PluginEvent;
use crate::interaction::PickOutcome;
use crate::render::{CanvasElement, CanvasSurface, Renderer};

use super::{PartitionController, PartitionProps};

pub(super) struct PickController;

impl PickController {
    /// Hit-tests a viewport point against the current geometry snapshot.
    ///
    /// `None` is reserved for an unpickable chart; a point outside every
    /// shape yields an empty outcome.
    pub(super) fn pick<E: CanvasElement>(
        surface: &CanvasSurface<E>,
        props: &PartitionProps,
        viewport_x: f64,
        viewport_y: f64,
    ) -> Option<PickOutcome> {
        if !surface.is_mounted() || !surface.has_context() || !props.is_renderable() {
            return None;
        }
        let rect = surface.bounding_rect()?;
        let canvas_point = rect.to_local(viewport_x, viewport_y);
        let origin = props.geometry.disk_center;
        let local = Point::new(canvas_point.x - origin.x, canvas_point.y - origin.y);

        let shapes = props.geometry.pick_quads(local.x, local.y);
        let data_indices = aggregate_data_indices(&shapes);
        trace!(
            x = local.x,
            y = local.y,
            shapes = shapes.len(),
            indices = data_indices.len(),
            "partition pick"
        );
        Some(PickOutcome {
            local,
            shapes,
            data_indices,
        })
    }

    pub(super) fn pointer_move<E, R>(
        controller: &mut PartitionController<E, R>,
        viewport_x: f64,
        viewport_y: f64,
    ) -> Option<PickedQuads>
    where
        E: CanvasElement,
        R: Renderer<E::Context>,
    {
        controller.pick_state.on_pointer_move(viewport_x, viewport_y);
        let Some(outcome) = Self::pick(
            &controller.surface,
            &controller.props,
            viewport_x,
            viewport_y,
        ) else {
            controller.pick_state.clear_pick();
            return None;
        };

        let shapes = outcome.shapes.clone();
        controller.emit_plugin_event(PluginEvent::Picked {
            shape_count: outcome.shapes.len(),
            index_count: outcome.data_indices.len(),
        });
        controller.pick_state.on_pick(outcome);
        Some(shapes)
    }

    pub(super) fn pointer_leave<E, R>(controller: &mut PartitionController<E, R>)
    where
        E: CanvasElement,
        R: Renderer<E::Context>,
    {
        controller.pick_state.on_pointer_leave();
        controller.emit_plugin_event(PluginEvent::PointerLeft);
    }
}

/// Unions the source data rows behind each picked shape.
///
/// A shape whose `data_name` has no subtree under its parent contributes
/// nothing. Indices keep first-seen order.
#[must_use]
pub fn aggregate_data_indices(shapes: &[QuadViewModel]) -> IndexSet<usize> {
    let mut indices = IndexSet::new();
    for shape in shapes {
        let Some(node) = shape.parent.find_child(&shape.data_name) else {
            continue;
        };
        indices.extend(node.input_indices.iter().copied());
    }
    indices
}
