#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::f64::consts::{FRAC_PI_2, PI, TAU};
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use partition_rs::PartitionResult;
use partition_rs::core::{
    BackingSize, ChildEntry, HierarchyNode, NodeKey, PartitionConfig, PartitionLayout,
    PickedQuads, Point, QuadPicker, QuadViewModel, ShapeViewModel, ViewportRect,
};
use partition_rs::render::{CanvasElement, Color, Renderer};

/// Host-visible state of a `FakeCanvas`, shared with the test body.
#[derive(Debug)]
pub struct FakeCanvasState {
    pub rect_origin: Cell<(f64, f64)>,
    pub supports_2d: Cell<bool>,
    pub acquisitions: Cell<u32>,
    pub backing: Cell<BackingSize>,
    pub backing_writes: Cell<u32>,
    pub display: Cell<(f64, f64)>,
    pub reported_ratio: Cell<Option<f64>>,
}

impl Default for FakeCanvasState {
    fn default() -> Self {
        Self {
            rect_origin: Cell::new((0.0, 0.0)),
            supports_2d: Cell::new(true),
            acquisitions: Cell::new(0),
            backing: Cell::new(BackingSize::default()),
            backing_writes: Cell::new(0),
            display: Cell::new((0.0, 0.0)),
            reported_ratio: Cell::new(None),
        }
    }
}

#[derive(Debug)]
pub struct FakeCanvas {
    pub state: Rc<FakeCanvasState>,
}

impl FakeCanvas {
    pub fn new() -> (Self, Rc<FakeCanvasState>) {
        let state = Rc::new(FakeCanvasState::default());
        (
            Self {
                state: state.clone(),
            },
            state,
        )
    }

    pub fn at(left: f64, top: f64) -> (Self, Rc<FakeCanvasState>) {
        let (canvas, state) = Self::new();
        state.rect_origin.set((left, top));
        (canvas, state)
    }
}

/// Drawing context handed out by `FakeCanvas`; carries its acquisition number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FakeContext(pub u32);

impl CanvasElement for FakeCanvas {
    type Context = FakeContext;

    fn acquire_context(&mut self) -> Option<FakeContext> {
        let next = self.state.acquisitions.get() + 1;
        self.state.acquisitions.set(next);
        self.state.supports_2d.get().then_some(FakeContext(next))
    }

    fn bounding_client_rect(&self) -> ViewportRect {
        let (left, top) = self.state.rect_origin.get();
        let (width, height) = self.state.display.get();
        ViewportRect::new(left, top, width, height)
    }

    fn set_backing_size(&mut self, size: BackingSize) {
        self.state.backing.set(size);
        self.state.backing_writes.set(self.state.backing_writes.get() + 1);
    }

    fn set_display_size(&mut self, width: f64, height: f64) {
        self.state.display.set((width, height));
    }

    fn device_pixel_ratio(&self) -> Option<f64> {
        self.state.reported_ratio.get()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RenderCall {
    pub context: FakeContext,
    pub pixel_ratio: f64,
    pub declared_size: (f64, f64),
    pub quads_len: usize,
}

/// Renderer double that records every call and appends to a shared event log.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub calls: Vec<RenderCall>,
    pub log: Rc<RefCell<Vec<String>>>,
}

impl RecordingRenderer {
    pub fn with_log(log: Rc<RefCell<Vec<String>>>) -> Self {
        Self {
            calls: Vec::new(),
            log,
        }
    }
}

impl Renderer<FakeContext> for RecordingRenderer {
    fn render(
        &mut self,
        context: &mut FakeContext,
        pixel_ratio: f64,
        geometry: &ShapeViewModel,
    ) -> PartitionResult<()> {
        self.log.borrow_mut().push("draw".to_owned());
        self.calls.push(RenderCall {
            context: *context,
            pixel_ratio,
            declared_size: (geometry.config.width, geometry.config.height),
            quads_len: geometry.quads.len(),
        });
        Ok(())
    }
}

/// Spatial index double that records queried chart-local points.
#[derive(Debug, Default)]
pub struct RecordingPicker {
    pub queries: Mutex<Vec<Point>>,
    pub hits: Vec<QuadViewModel>,
}

impl RecordingPicker {
    pub fn returning(hits: Vec<QuadViewModel>) -> Self {
        Self {
            queries: Mutex::new(Vec::new()),
            hits,
        }
    }

    pub fn queries(&self) -> Vec<Point> {
        self.queries.lock().expect("queries lock").clone()
    }
}

impl QuadPicker for RecordingPicker {
    fn pick_quads(&self, _quads: &[QuadViewModel], x: f64, y: f64) -> PickedQuads {
        self.queries.lock().expect("queries lock").push(Point::new(x, y));
        self.hits.iter().cloned().collect()
    }
}

pub fn quad(
    name: impl Into<NodeKey>,
    depth: usize,
    parent: &Arc<HierarchyNode>,
    (x0, x1): (f64, f64),
    (y0_px, y1_px): (f64, f64),
) -> QuadViewModel {
    QuadViewModel {
        data_name: name.into(),
        depth,
        value: 1.0,
        fill_color: Color::rgb(0.3, 0.5, 0.7),
        x0,
        x1,
        y0_px,
        y1_px,
        parent: parent.clone(),
    }
}

/// Two-level hierarchy over five source rows:
///
/// ```text
/// root [0..5]
///   a [0, 1, 2]
///     a1 [0, 1]
///     a2 [2]
///   b [3, 4]
/// ```
pub struct Hierarchy {
    pub root: Arc<HierarchyNode>,
    pub a: Arc<HierarchyNode>,
}

pub fn hierarchy() -> Hierarchy {
    let a = Arc::new(HierarchyNode::branch(
        vec![0, 1, 2],
        vec![
            ChildEntry::new("a1", Some(Arc::new(HierarchyNode::leaf(vec![0, 1])))),
            ChildEntry::new("a2", Some(Arc::new(HierarchyNode::leaf(vec![2])))),
        ],
    ));
    let root = Arc::new(HierarchyNode::branch(
        vec![0, 1, 2, 3, 4],
        vec![
            ChildEntry::new("a", Some(a.clone())),
            ChildEntry::new("b", Some(Arc::new(HierarchyNode::leaf(vec![3, 4])))),
        ],
    ));
    Hierarchy { root, a }
}

/// Sunburst centered at (100, 100) on a 200x200 layout.
///
/// Ring 1 (radius 20..60): `a` on the right half, `b` on the left half.
/// Ring 2 (radius 60..100): `a1` top-right quarter, `a2` bottom-right quarter.
pub fn sunburst() -> ShapeViewModel {
    let Hierarchy { root, a } = hierarchy();
    ShapeViewModel::new(
        PartitionConfig::new(200.0, 200.0, PartitionLayout::Sunburst),
        vec![
            quad("a", 1, &root, (0.0, PI), (20.0, 60.0)),
            quad("b", 1, &root, (PI, TAU), (20.0, 60.0)),
            quad("a1", 2, &a, (0.0, FRAC_PI_2), (60.0, 100.0)),
            quad("a2", 2, &a, (FRAC_PI_2, PI), (60.0, 100.0)),
        ],
        Point::new(100.0, 100.0),
    )
}

/// Treemap with origin at (10, 10) on a 220x120 layout.
///
/// `a` spans x 0..100 and holds `a1` (y 0..50) and `a2` (y 50..100);
/// `b` spans x 100..200.
pub fn treemap() -> ShapeViewModel {
    let Hierarchy { root, a } = hierarchy();
    ShapeViewModel::new(
        PartitionConfig::new(220.0, 120.0, PartitionLayout::Treemap),
        vec![
            quad("a", 1, &root, (0.0, 100.0), (0.0, 100.0)),
            quad("b", 1, &root, (100.0, 200.0), (0.0, 100.0)),
            quad("a1", 2, &a, (0.0, 100.0), (0.0, 50.0)),
            quad("a2", 2, &a, (0.0, 100.0), (50.0, 100.0)),
        ],
        Point::new(10.0, 10.0),
    )
}

pub fn names(shapes: &[QuadViewModel]) -> Vec<String> {
    shapes.iter().map(|shape| shape.data_name.to_string()).collect()
}
