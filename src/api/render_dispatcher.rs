use tracing::debug;

use crate::core::{Dimensions, ShapeViewModel};
use crate::error::PartitionResult;
use crate::render::Renderer;

/// Draws `geometry` with its declared size patched to the container size.
///
/// The layout may have been computed against an older container size; the
/// patch keeps drawing in sync without a re-layout. Returns `false` without
/// touching the renderer when there is no context.
pub(super) fn dispatch_render<C, R>(
    renderer: &mut R,
    context: Option<&mut C>,
    pixel_ratio: f64,
    geometry: &ShapeViewModel,
    container: Dimensions,
) -> PartitionResult<bool>
where
    R: Renderer<C>,
{
    let Some(context) = context else {
        return Ok(false);
    };

    let snapshot = geometry.with_declared_size(container.width, container.height);
    debug!(
        width = container.width,
        height = container.height,
        pixel_ratio,
        quads = snapshot.quads.len(),
        "dispatching partition render"
    );
    renderer.render(context, pixel_ratio, &snapshot)?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::dispatch_render;
    use crate::core::{
        Dimensions, PartitionConfig, PartitionLayout, Point, QuadViewModel, ShapeViewModel,
    };
    use crate::error::{PartitionError, PartitionResult};
    use crate::render::{NullRenderer, Renderer};

    fn stale_geometry() -> ShapeViewModel {
        ShapeViewModel::new(
            PartitionConfig::new(320.0, 240.0, PartitionLayout::Sunburst),
            Vec::<QuadViewModel>::new(),
            Point::new(160.0, 120.0),
        )
    }

    #[test]
    fn missing_context_is_a_no_op() {
        let mut renderer = NullRenderer::default();
        let drawn = dispatch_render::<(), _>(
            &mut renderer,
            None,
            2.0,
            &stale_geometry(),
            Dimensions::sized(640.0, 480.0),
        )
        .expect("dispatch");

        assert!(!drawn);
        assert_eq!(renderer.render_count, 0);
    }

    #[test]
    fn declared_size_is_patched_to_container() {
        let mut renderer = NullRenderer::default();
        let geometry = stale_geometry();
        let drawn = dispatch_render(
            &mut renderer,
            Some(&mut ()),
            1.5,
            &geometry,
            Dimensions::new(640.0, 480.0, 10.0, 20.0),
        )
        .expect("dispatch");

        assert!(drawn);
        assert_eq!(renderer.last_declared_size, Some((640.0, 480.0)));
        assert_eq!(renderer.last_pixel_ratio, Some(1.5));
        assert_eq!(geometry.config.width, 320.0);
    }

    struct FailingRenderer;

    impl Renderer<()> for FailingRenderer {
        fn render(
            &mut self,
            _context: &mut (),
            _pixel_ratio: f64,
            _geometry: &ShapeViewModel,
        ) -> PartitionResult<()> {
            Err(PartitionError::Backend("canvas lost".to_owned()))
        }
    }

    #[test]
    fn renderer_errors_propagate() {
        let result = dispatch_render(
            &mut FailingRenderer,
            Some(&mut ()),
            1.0,
            &stale_geometry(),
            Dimensions::sized(10.0, 10.0),
        );
        assert!(matches!(result, Err(PartitionError::Backend(_))));
    }
}
