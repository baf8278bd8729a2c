use crate::core::ShapeViewModel;
use crate::error::PartitionResult;
use crate::render::Renderer;

/// No-op renderer used by tests and headless controller usage.
///
/// Records what each draw call received so callers can assert on the
/// snapshot the controller handed over.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub render_count: usize,
    pub last_pixel_ratio: Option<f64>,
    pub last_declared_size: Option<(f64, f64)>,
    pub last_quad_count: usize,
}

impl<C> Renderer<C> for NullRenderer {
    fn render(
        &mut self,
        _context: &mut C,
        pixel_ratio: f64,
        geometry: &ShapeViewModel,
    ) -> PartitionResult<()> {
        for quad in geometry.quads.iter() {
            quad.fill_color.validate()?;
        }
        self.render_count += 1;
        self.last_pixel_ratio = Some(pixel_ratio);
        self.last_declared_size = Some((geometry.config.width, geometry.config.height));
        self.last_quad_count = geometry.quads.len();
        Ok(())
    }
}
