use std::fmt;
use std::sync::Arc;

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::core::pick::{PickStrategy, PickedQuads};
use crate::core::types::Point;
use crate::render::Color;

/// Key of one child within its parent's ordered children.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodeKey {
    Text(String),
    Number(OrderedFloat<f64>),
}

impl From<&str> for NodeKey {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl From<String> for NodeKey {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<f64> for NodeKey {
    fn from(value: f64) -> Self {
        Self::Number(OrderedFloat(value))
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(text) => f.write_str(text),
            Self::Number(number) => write!(f, "{}", number.0),
        }
    }
}

/// One `[key, subtree]` pair of a hierarchy node.
#[derive(Debug, Clone, PartialEq)]
pub struct ChildEntry {
    pub key: NodeKey,
    pub node: Option<Arc<HierarchyNode>>,
}

impl ChildEntry {
    #[must_use]
    pub fn new(key: impl Into<NodeKey>, node: Option<Arc<HierarchyNode>>) -> Self {
        Self {
            key: key.into(),
            node,
        }
    }
}

/// Node of the aggregated data hierarchy a layout was computed from.
///
/// `input_indices` lists the source data rows that contributed to the node.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HierarchyNode {
    pub input_indices: Vec<usize>,
    pub children: Vec<ChildEntry>,
}

impl HierarchyNode {
    #[must_use]
    pub fn leaf(input_indices: Vec<usize>) -> Self {
        Self {
            input_indices,
            children: Vec::new(),
        }
    }

    #[must_use]
    pub fn branch(input_indices: Vec<usize>, children: Vec<ChildEntry>) -> Self {
        Self {
            input_indices,
            children,
        }
    }

    /// Returns the subtree stored under `key`, scanning children in order.
    #[must_use]
    pub fn find_child(&self, key: &NodeKey) -> Option<&Arc<HierarchyNode>> {
        self.children
            .iter()
            .find(|entry| &entry.key == key)
            .and_then(|entry| entry.node.as_ref())
    }
}

/// One laid-out shape: an annular sector (radial) or a box (rectangular).
///
/// For radial layouts `x0..x1` is an angle range in radians starting at
/// twelve o'clock and growing clockwise; `y0_px..y1_px` is the radius band.
/// For rectangular layouts both ranges are pixel spans relative to the
/// shape tree origin.
#[derive(Debug, Clone, PartialEq)]
pub struct QuadViewModel {
    pub data_name: NodeKey,
    pub depth: usize,
    pub value: f64,
    pub fill_color: Color,
    pub x0: f64,
    pub x1: f64,
    pub y0_px: f64,
    pub y1_px: f64,
    pub parent: Arc<HierarchyNode>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PartitionLayout {
    #[default]
    Sunburst,
    Treemap,
}

impl PartitionLayout {
    #[must_use]
    pub fn default_pick_strategy(self) -> PickStrategy {
        match self {
            Self::Sunburst => PickStrategy::Radial,
            Self::Treemap => PickStrategy::Rectangular,
        }
    }
}

/// Render configuration the layout was computed with.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PartitionConfig {
    pub width: f64,
    pub height: f64,
    pub layout: PartitionLayout,
}

impl PartitionConfig {
    #[must_use]
    pub const fn new(width: f64, height: f64, layout: PartitionLayout) -> Self {
        Self {
            width,
            height,
            layout,
        }
    }
}

/// Immutable per-render description of every drawable shape.
///
/// Produced upstream whenever data or layout configuration changes; the
/// controller only reads it.
#[derive(Debug, Clone)]
pub struct ShapeViewModel {
    pub config: PartitionConfig,
    pub quads: Arc<[QuadViewModel]>,
    /// Offset of the shape tree origin from the canvas top-left, in logical pixels.
    pub disk_center: Point,
    pub pick_strategy: PickStrategy,
}

impl ShapeViewModel {
    #[must_use]
    pub fn new(
        config: PartitionConfig,
        quads: impl Into<Arc<[QuadViewModel]>>,
        disk_center: Point,
    ) -> Self {
        Self {
            pick_strategy: config.layout.default_pick_strategy(),
            config,
            quads: quads.into(),
            disk_center,
        }
    }

    /// Empty model used before the host has produced a layout.
    #[must_use]
    pub fn null() -> Self {
        Self::new(
            PartitionConfig::default(),
            Vec::<QuadViewModel>::new(),
            Point::default(),
        )
    }

    #[must_use]
    pub fn with_pick_strategy(mut self, pick_strategy: PickStrategy) -> Self {
        self.pick_strategy = pick_strategy;
        self
    }

    /// Copy of this model whose declared size is `width x height`.
    ///
    /// Every field other than `config.width` and `config.height` is shared
    /// with `self`.
    #[must_use]
    pub fn with_declared_size(&self, width: f64, height: f64) -> Self {
        let mut patched = self.clone();
        patched.config.width = width;
        patched.config.height = height;
        patched
    }

    #[must_use]
    pub fn is_null(&self) -> bool {
        self.quads.is_empty()
    }

    /// Quads containing the chart-local point `(x, y)`, in hit priority order.
    #[must_use]
    pub fn pick_quads(&self, x: f64, y: f64) -> PickedQuads {
        self.pick_strategy.pick_quads(&self.quads, x, y)
    }
}

impl Default for ShapeViewModel {
    fn default() -> Self {
        Self::null()
    }
}
