use std::sync::Arc;

use crate::core::{Dimensions, ShapeViewModel};

/// Inputs supplied by the host on every mount/update cycle.
#[derive(Debug, Clone)]
pub struct PartitionProps {
    pub initialized: bool,
    pub geometry: Arc<ShapeViewModel>,
    pub dimensions: Dimensions,
}

impl PartitionProps {
    #[must_use]
    pub fn new(initialized: bool, geometry: Arc<ShapeViewModel>, dimensions: Dimensions) -> Self {
        Self {
            initialized,
            geometry,
            dimensions,
        }
    }

    /// Props for a chart whose layout and container are both ready.
    #[must_use]
    pub fn ready(geometry: ShapeViewModel, dimensions: Dimensions) -> Self {
        Self::new(true, Arc::new(geometry), dimensions)
    }

    /// `false` while the host is uninitialized or the container has a zero axis.
    #[must_use]
    pub fn is_renderable(&self) -> bool {
        self.initialized && self.dimensions.is_laid_out()
    }
}

impl Default for PartitionProps {
    fn default() -> Self {
        Self::new(false, Arc::new(ShapeViewModel::null()), Dimensions::default())
    }
}
