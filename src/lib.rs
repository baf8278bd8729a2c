//! partition-rs: render/pick controller for partition charts.
//!
//! Sunburst and treemap layouts are computed upstream into an immutable
//! geometry snapshot; this crate owns the canvas surface the snapshot is
//! drawn on, decides when the external drawing routine runs, and maps
//! pointer positions back to the shapes and source data rows under them.

pub mod api;
pub mod core;
pub mod error;
pub mod extensions;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{ControllerConfig, PartitionController, PartitionProps};
pub use error::{PartitionError, PartitionResult};
