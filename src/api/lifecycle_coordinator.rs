use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::PartitionResult;
use crate::extensions::PluginEvent;
use crate::render::{CanvasElement, Renderer};

use super::render_cycle_finalizer::finalize_render_cycle;
use super::render_dispatcher::dispatch_render;
use super::{PartitionController, PartitionProps};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LifecycleState {
    Unmounted,
    MountedNoContext,
    MountedReady,
    /// Uninitialized or zero-sized: nothing is drawn or picked.
    Suppressed,
}

/// What one mount/update cycle did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RenderOutcome {
    Rendered,
    Suppressed,
    NoContext,
    Unmounted,
}

pub(super) struct LifecycleCoordinator;

impl LifecycleCoordinator {
    pub(super) fn mount<E, R>(
        controller: &mut PartitionController<E, R>,
        element: E,
        props: PartitionProps,
    ) -> PartitionResult<RenderOutcome>
    where
        E: CanvasElement,
        R: Renderer<E::Context>,
    {
        // Attached before validation so `unmount` can hand the element back
        // when the props are rejected.
        controller.surface.attach(element);
        if let Err(err) = props.dimensions.validate() {
            Self::transition(controller, LifecycleState::MountedNoContext);
            return Err(err);
        }
        // Context acquisition happens in the cycle, after the first resize.
        Self::run_cycle(controller, props)
    }

    pub(super) fn update<E, R>(
        controller: &mut PartitionController<E, R>,
        props: PartitionProps,
    ) -> PartitionResult<RenderOutcome>
    where
        E: CanvasElement,
        R: Renderer<E::Context>,
    {
        props.dimensions.validate()?;
        Self::run_cycle(controller, props)
    }

    pub(super) fn unmount<E, R>(controller: &mut PartitionController<E, R>) -> Option<E>
    where
        E: CanvasElement,
        R: Renderer<E::Context>,
    {
        controller.pick_state.on_pointer_leave();
        Self::transition(controller, LifecycleState::Unmounted);
        controller.surface.detach()
    }

    fn run_cycle<E, R>(
        controller: &mut PartitionController<E, R>,
        props: PartitionProps,
    ) -> PartitionResult<RenderOutcome>
    where
        E: CanvasElement,
        R: Renderer<E::Context>,
    {
        controller.props = props;
        let dimensions = controller.props.dimensions;
        controller
            .surface
            .resize(dimensions.width, dimensions.height);

        // Retried on every cycle: the element may have gained a context
        // since the last pass.
        let has_context = controller.surface.acquire().is_some();

        if !controller.props.is_renderable() {
            controller.pick_state.clear_pick();
            Self::transition(controller, LifecycleState::Suppressed);
            return Ok(RenderOutcome::Suppressed);
        }
        if !controller.surface.is_mounted() {
            Self::transition(controller, LifecycleState::Unmounted);
            return Ok(RenderOutcome::Unmounted);
        }
        if !has_context {
            warn!(
                width = dimensions.width,
                height = dimensions.height,
                "partition chart is renderable but no drawing context is available"
            );
            Self::transition(controller, LifecycleState::MountedNoContext);
            return Ok(RenderOutcome::NoContext);
        }

        Self::transition(controller, LifecycleState::MountedReady);
        let pixel_ratio = controller.surface.pixel_ratio();
        let drawn = dispatch_render(
            &mut controller.renderer,
            controller.surface.context_mut(),
            pixel_ratio,
            &controller.props.geometry,
            dimensions,
        )?;
        if !drawn {
            return Ok(RenderOutcome::NoContext);
        }
        finalize_render_cycle(controller);
        Ok(RenderOutcome::Rendered)
    }

    fn transition<E, R>(controller: &mut PartitionController<E, R>, to: LifecycleState)
    where
        E: CanvasElement,
        R: Renderer<E::Context>,
    {
        let from = controller.lifecycle;
        if from == to {
            return;
        }
        debug!(?from, ?to, "partition lifecycle transition");
        controller.lifecycle = to;
        controller.emit_plugin_event(PluginEvent::LifecycleChanged { from, to });
    }
}
