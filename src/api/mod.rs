mod controller;
mod controller_config;
mod controller_snapshot;
mod host_adapter;
mod lifecycle_coordinator;
mod pick_controller;
mod plugin_dispatch;
mod props;
mod render_cycle_finalizer;
mod render_dispatcher;

pub use controller::{PartitionController, SurfaceDescriptor};
pub use controller_config::ControllerConfig;
pub use controller_snapshot::{
    ControllerSnapshot, SNAPSHOT_DOCUMENT_FORMAT, SNAPSHOT_DOCUMENT_VERSION, SnapshotDocument,
};
pub use host_adapter::{
    ActionDispatcher, HostAction, PartitionHostState, bind_render_completed, project_props,
};
pub use lifecycle_coordinator::{LifecycleState, RenderOutcome};
pub use pick_controller::aggregate_data_indices;
pub use props::PartitionProps;
