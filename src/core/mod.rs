pub mod geometry;
pub mod pick;
pub mod types;

pub use geometry::{
    ChildEntry, HierarchyNode, NodeKey, PartitionConfig, PartitionLayout, QuadViewModel,
    ShapeViewModel,
};
pub use pick::{PickStrategy, PickedQuads, QuadPicker, clockwise_angle_from_top};
pub use types::{BackingSize, Dimensions, Point, ViewportRect};
