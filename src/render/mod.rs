mod canvas_surface;
mod null_renderer;
mod primitives;

pub use canvas_surface::{CanvasSurface, PixelRatioPolicy};
pub(crate) use canvas_surface::validate_pixel_ratio;
pub use null_renderer::NullRenderer;
pub use primitives::Color;

use crate::core::{BackingSize, ShapeViewModel, ViewportRect};
use crate::error::PartitionResult;

/// Drawing routine that paints a geometry snapshot onto a context.
///
/// Implementations own all pixel-level work (arcs, boxes, labels, DPR
/// scaling of the context transform). The controller only decides when to
/// call it and with which snapshot.
pub trait Renderer<C> {
    fn render(
        &mut self,
        context: &mut C,
        pixel_ratio: f64,
        geometry: &ShapeViewModel,
    ) -> PartitionResult<()>;
}

/// Host-side drawable element backing a `CanvasSurface`.
pub trait CanvasElement {
    type Context;

    /// Returns a 2D drawing context, or `None` if the element cannot provide one.
    fn acquire_context(&mut self) -> Option<Self::Context>;

    /// Current bounding box in viewport coordinates.
    fn bounding_client_rect(&self) -> ViewportRect;

    fn set_backing_size(&mut self, size: BackingSize);

    fn set_display_size(&mut self, width: f64, height: f64);

    /// Pixel ratio currently reported by the element's display, if known.
    fn device_pixel_ratio(&self) -> Option<f64> {
        None
    }
}

#[cfg(feature = "cairo-backend")]
mod cairo_backend;
#[cfg(feature = "cairo-backend")]
pub use cairo_backend::CairoCanvas;
