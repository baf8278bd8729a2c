use cairo::{Context, Format, ImageSurface};
use tracing::warn;

use crate::core::{BackingSize, ViewportRect};
use crate::render::CanvasElement;

/// Offscreen canvas element backed by a Cairo ARGB32 image surface.
///
/// The image surface is recreated whenever the backing size changes. A
/// context acquired before a resize still targets the old surface.
#[derive(Debug)]
pub struct CairoCanvas {
    surface: Option<ImageSurface>,
    position: (f64, f64),
    display: (f64, f64),
    device_pixel_ratio: Option<f64>,
}

impl CairoCanvas {
    /// Creates an unsized canvas placed at `(left, top)` in viewport space.
    #[must_use]
    pub fn new(left: f64, top: f64) -> Self {
        Self {
            surface: None,
            position: (left, top),
            display: (0.0, 0.0),
            device_pixel_ratio: None,
        }
    }

    #[must_use]
    pub fn with_device_pixel_ratio(mut self, ratio: f64) -> Self {
        self.device_pixel_ratio = Some(ratio);
        self
    }

    pub fn set_position(&mut self, left: f64, top: f64) {
        self.position = (left, top);
    }

    #[must_use]
    pub fn surface(&self) -> Option<&ImageSurface> {
        self.surface.as_ref()
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo-image-surface"
    }
}

impl CanvasElement for CairoCanvas {
    type Context = Context;

    fn acquire_context(&mut self) -> Option<Context> {
        let surface = self.surface.as_ref()?;
        match Context::new(surface) {
            Ok(context) => Some(context),
            Err(err) => {
                warn!(error = %err, "failed to create cairo context");
                None
            }
        }
    }

    fn bounding_client_rect(&self) -> ViewportRect {
        ViewportRect::new(self.position.0, self.position.1, self.display.0, self.display.1)
    }

    fn set_backing_size(&mut self, size: BackingSize) {
        let (Ok(width), Ok(height)) = (i32::try_from(size.width), i32::try_from(size.height))
        else {
            warn!(
                width = size.width,
                height = size.height,
                "backing size exceeds cairo surface limits"
            );
            self.surface = None;
            return;
        };
        self.surface = match ImageSurface::create(Format::ARgb32, width, height) {
            Ok(surface) => Some(surface),
            Err(err) => {
                warn!(error = %err, width, height, "failed to create cairo surface");
                None
            }
        };
    }

    fn set_display_size(&mut self, width: f64, height: f64) {
        self.display = (width, height);
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        self.device_pixel_ratio
    }
}
