use serde::{Deserialize, Serialize};

use crate::error::{PartitionError, PartitionResult};

/// Container box supplied by the host layout system, in logical pixels.
///
/// A zero width or height is the normal "not yet laid out" state.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub left: f64,
    pub top: f64,
}

impl Dimensions {
    #[must_use]
    pub const fn new(width: f64, height: f64, left: f64, top: f64) -> Self {
        Self {
            width,
            height,
            left,
            top,
        }
    }

    #[must_use]
    pub const fn sized(width: f64, height: f64) -> Self {
        Self::new(width, height, 0.0, 0.0)
    }

    #[must_use]
    pub fn is_laid_out(self) -> bool {
        self.width != 0.0 && self.height != 0.0
    }

    pub fn validate(self) -> PartitionResult<()> {
        let size_ok = |value: f64| value.is_finite() && value >= 0.0;
        if !size_ok(self.width) || !size_ok(self.height) {
            return Err(PartitionError::InvalidDimensions {
                width: self.width,
                height: self.height,
            });
        }
        if !self.left.is_finite() || !self.top.is_finite() {
            return Err(PartitionError::InvalidData(
                "container offsets must be finite".to_owned(),
            ));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Element bounding box in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ViewportRect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl ViewportRect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Translates a viewport point into this rect's top-left based frame.
    #[must_use]
    pub fn to_local(self, viewport_x: f64, viewport_y: f64) -> Point {
        Point::new(viewport_x - self.left, viewport_y - self.top)
    }
}

/// Device-pixel size of a drawing surface's backing store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct BackingSize {
    pub width: u32,
    pub height: u32,
}

impl BackingSize {
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Scales a logical size by `pixel_ratio`, truncating each axis toward zero.
    #[must_use]
    pub fn from_logical(width: f64, height: f64, pixel_ratio: f64) -> Self {
        Self {
            width: (width * pixel_ratio) as u32,
            height: (height * pixel_ratio) as u32,
        }
    }
}
