//! Observer hooks for hosts that need more than the render-completed callback.
//!
//! Plugins only read controller state; they never drive rendering or picking.

pub mod plugins;

pub use plugins::{PartitionPlugin, PluginContext, PluginEvent};
