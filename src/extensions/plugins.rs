use serde::{Deserialize, Serialize};

use crate::api::LifecycleState;
use crate::core::{BackingSize, Dimensions};

/// Read-only state snapshot passed to plugin hooks.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PluginContext {
    pub lifecycle: LifecycleState,
    pub dimensions: Dimensions,
    pub pixel_ratio: f64,
    pub backing: BackingSize,
    pub quads_len: usize,
}

/// Event stream exposed to plugins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum PluginEvent {
    LifecycleChanged {
        from: LifecycleState,
        to: LifecycleState,
    },
    Rendered,
    Picked {
        shape_count: usize,
        index_count: usize,
    },
    PointerLeft,
}

/// Extension hook interface, e.g. for cross-chart highlighting.
pub trait PartitionPlugin {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: PluginEvent, context: PluginContext);
}
