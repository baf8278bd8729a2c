use std::f64::consts::{FRAC_PI_2, TAU};
use std::fmt;
use std::sync::Arc;

use smallvec::SmallVec;

use crate::core::geometry::QuadViewModel;

/// Quads under one pointer position. Hit stacks are shallow, so four inline
/// slots cover the common sunburst/treemap depth without allocating.
pub type PickedQuads = SmallVec<[QuadViewModel; 4]>;

/// External spatial index over a layout's quads.
pub trait QuadPicker: fmt::Debug + Send + Sync {
    fn pick_quads(&self, quads: &[QuadViewModel], x: f64, y: f64) -> PickedQuads;
}

/// Hit-test strategy carried by a geometry snapshot.
#[derive(Debug, Clone, Default)]
pub enum PickStrategy {
    /// Annular sectors around the origin (sunburst, donut, pie).
    #[default]
    Radial,
    /// Axis-aligned boxes relative to the origin (treemap, icicle).
    Rectangular,
    Custom(Arc<dyn QuadPicker>),
}

impl PickStrategy {
    #[must_use]
    pub fn pick_quads(&self, quads: &[QuadViewModel], x: f64, y: f64) -> PickedQuads {
        match self {
            Self::Radial => {
                let radius = x.hypot(y);
                let angle = clockwise_angle_from_top(x, y);
                quads
                    .iter()
                    .filter(|quad| {
                        quad.x0 <= angle
                            && angle <= quad.x1
                            && quad.y0_px <= radius
                            && radius <= quad.y1_px
                    })
                    .cloned()
                    .collect()
            }
            Self::Rectangular => quads
                .iter()
                .filter(|quad| {
                    quad.x0 <= x && x <= quad.x1 && quad.y0_px <= y && y <= quad.y1_px
                })
                .cloned()
                .collect(),
            Self::Custom(picker) => picker.pick_quads(quads, x, y),
        }
    }
}

/// Angle of `(x, y)` in `[0, TAU)`, zero at twelve o'clock, growing clockwise
/// in a y-down frame.
#[must_use]
pub fn clockwise_angle_from_top(x: f64, y: f64) -> f64 {
    (y.atan2(x) + FRAC_PI_2 + TAU) % TAU
}
