use indexmap::IndexSet;
use serde::{Deserialize, Serialize};

use crate::core::{BackingSize, PickedQuads};
use crate::error::PartitionResult;
use crate::extensions::PartitionPlugin;
use crate::interaction::{PickOutcome, PickState};
use crate::render::{CanvasElement, CanvasSurface, Renderer};

use super::lifecycle_coordinator::LifecycleCoordinator;
use super::pick_controller::PickController;
use super::{ControllerConfig, LifecycleState, PartitionProps, RenderOutcome};

/// Logical and device-pixel size of the surface the host should present.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceDescriptor {
    pub width: f64,
    pub height: f64,
    pub backing: BackingSize,
}

/// Render/pick controller for one partition chart surface.
///
/// The host drives it through `mount`, `update`, `unmount` and pointer
/// handlers; the controller decides when the external renderer runs and
/// answers hit-test queries against the latest geometry snapshot.
pub struct PartitionController<E, R>
where
    E: CanvasElement,
    R: Renderer<E::Context>,
{
    pub(super) renderer: R,
    pub(super) surface: CanvasSurface<E>,
    pub(super) props: PartitionProps,
    pub(super) lifecycle: LifecycleState,
    pub(super) pick_state: PickState,
    pub(super) plugins: Vec<Box<dyn PartitionPlugin>>,
    pub(super) render_notifier: Option<Box<dyn FnMut()>>,
    pub(super) render_count: u64,
}

impl<E, R> PartitionController<E, R>
where
    E: CanvasElement,
    R: Renderer<E::Context>,
{
    pub fn new(renderer: R, config: ControllerConfig) -> PartitionResult<Self> {
        config.validate()?;
        let surface = CanvasSurface::new(config.device_pixel_ratio, config.pixel_ratio_policy)?;
        Ok(Self {
            renderer,
            surface,
            props: PartitionProps::default(),
            lifecycle: LifecycleState::Unmounted,
            pick_state: PickState::default(),
            plugins: Vec::new(),
            render_notifier: None,
            render_count: 0,
        })
    }

    /// Registers the one-way notification fired after every successful draw.
    pub fn on_render_complete<F>(&mut self, notifier: F)
    where
        F: FnMut() + 'static,
    {
        self.render_notifier = Some(Box::new(notifier));
    }

    pub fn mount(&mut self, element: E, props: PartitionProps) -> PartitionResult<RenderOutcome> {
        LifecycleCoordinator::mount(self, element, props)
    }

    pub fn update(&mut self, props: PartitionProps) -> PartitionResult<RenderOutcome> {
        LifecycleCoordinator::update(self, props)
    }

    pub fn unmount(&mut self) -> Option<E> {
        LifecycleCoordinator::unmount(self)
    }

    /// Hit-tests a viewport-space pointer position and retains the result.
    ///
    /// Returns `None` when the chart is not pickable (unmounted, no context,
    /// uninitialized or zero-sized) and the shapes under the pointer
    /// otherwise, possibly empty.
    pub fn handle_pointer_move(&mut self, viewport_x: f64, viewport_y: f64) -> Option<PickedQuads> {
        PickController::pointer_move(self, viewport_x, viewport_y)
    }

    pub fn handle_pointer_leave(&mut self) {
        PickController::pointer_leave(self);
    }

    /// Side-effect free variant of `handle_pointer_move`.
    #[must_use]
    pub fn pick(&self, viewport_x: f64, viewport_y: f64) -> Option<PickOutcome> {
        PickController::pick(&self.surface, &self.props, viewport_x, viewport_y)
    }

    #[must_use]
    pub fn lifecycle_state(&self) -> LifecycleState {
        self.lifecycle
    }

    #[must_use]
    pub fn props(&self) -> &PartitionProps {
        &self.props
    }

    #[must_use]
    pub fn surface(&self) -> &CanvasSurface<E> {
        &self.surface
    }

    #[must_use]
    pub fn pixel_ratio(&self) -> f64 {
        self.surface.pixel_ratio()
    }

    #[must_use]
    pub fn render_count(&self) -> u64 {
        self.render_count
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn last_pick(&self) -> Option<&PickOutcome> {
        self.pick_state.last()
    }

    /// Data rows behind the shapes picked by the last pointer move.
    #[must_use]
    pub fn picked_data_indices(&self) -> Option<&IndexSet<usize>> {
        self.pick_state.picked_data_indices()
    }

    /// Surface the host should present, or `None` while suppressed.
    #[must_use]
    pub fn surface_descriptor(&self) -> Option<SurfaceDescriptor> {
        if !self.props.is_renderable() {
            return None;
        }
        let dimensions = self.props.dimensions;
        Some(SurfaceDescriptor {
            width: dimensions.width,
            height: dimensions.height,
            backing: BackingSize::from_logical(
                dimensions.width,
                dimensions.height,
                self.surface.pixel_ratio(),
            ),
        })
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
