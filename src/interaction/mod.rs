use indexmap::IndexSet;

use crate::core::{PickedQuads, Point};

/// Result of one successful pick query.
#[derive(Debug, Clone, PartialEq)]
pub struct PickOutcome {
    /// Pointer position in chart-local coordinates (relative to the disk center).
    pub local: Point,
    /// Shapes under the pointer, in hit priority order.
    pub shapes: PickedQuads,
    /// Union of the source data rows behind `shapes`, in first-seen order.
    pub data_indices: IndexSet<usize>,
}

impl PickOutcome {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }
}

/// Pointer-driven state retained between pick queries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PickState {
    pointer: Option<Point>,
    last: Option<PickOutcome>,
}

impl PickState {
    #[must_use]
    pub fn pointer(&self) -> Option<Point> {
        self.pointer
    }

    #[must_use]
    pub fn last(&self) -> Option<&PickOutcome> {
        self.last.as_ref()
    }

    /// Data rows behind the most recent pick; `None` when no pick is retained.
    #[must_use]
    pub fn picked_data_indices(&self) -> Option<&IndexSet<usize>> {
        self.last.as_ref().map(|outcome| &outcome.data_indices)
    }

    pub fn on_pointer_move(&mut self, viewport_x: f64, viewport_y: f64) {
        self.pointer = Some(Point::new(viewport_x, viewport_y));
    }

    pub fn on_pick(&mut self, outcome: PickOutcome) {
        self.last = Some(outcome);
    }

    pub fn on_pointer_leave(&mut self) {
        self.pointer = None;
        self.last = None;
    }

    /// Drops the retained pick without forgetting the pointer.
    pub fn clear_pick(&mut self) {
        self.last = None;
    }
}
