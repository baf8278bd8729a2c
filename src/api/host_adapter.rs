//! Boundary between a host application store and the controller.
//!
//! The controller takes plain props and emits plain callbacks; these helpers
//! project host state into props and bind the render-completed callback to a
//! host action dispatcher.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::core::{Dimensions, ShapeViewModel};

use super::PartitionProps;

/// Read access to the host state slices the controller depends on.
pub trait PartitionHostState {
    fn is_initialized(&self) -> bool;
    fn shape_view_model(&self) -> Arc<ShapeViewModel>;
    fn container_dimensions(&self) -> Dimensions;
}

/// Projects host state into controller props.
///
/// An uninitialized host yields the default props (null geometry, zero
/// dimensions) without reading its other slices.
#[must_use]
pub fn project_props<S>(state: &S) -> PartitionProps
where
    S: PartitionHostState + ?Sized,
{
    if !state.is_initialized() {
        return PartitionProps::default();
    }
    PartitionProps::new(
        true,
        state.shape_view_model(),
        state.container_dimensions(),
    )
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HostAction {
    ChartRendered,
}

pub trait ActionDispatcher {
    fn dispatch(&mut self, action: HostAction);
}

impl<D: ActionDispatcher + ?Sized> ActionDispatcher for Rc<RefCell<D>> {
    fn dispatch(&mut self, action: HostAction) {
        self.borrow_mut().dispatch(action);
    }
}

/// Builds the render-completed notification for `PartitionController::on_render_complete`.
pub fn bind_render_completed<D>(mut dispatcher: D) -> impl FnMut() + 'static
where
    D: ActionDispatcher + 'static,
{
    move || dispatcher.dispatch(HostAction::ChartRendered)
}
