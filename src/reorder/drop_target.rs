//! Pointer coordinate → insertion point.

use super::order::RowKey;

/// Vertical extent of one row, as reported by `getBoundingClientRect()`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowGeometry {
    pub key: RowKey,
    pub top: f64,
    pub height: f64,
}

impl RowGeometry {
    pub fn midpoint(&self) -> f64 {
        self.top + self.height / 2.0
    }
}

/// The row the dragged row should be inserted *before*.
///
/// `rows` must be in visual (top to bottom) order.  The row in motion is
/// skipped.  Returns the first remaining row whose midpoint lies strictly
/// below `pointer_y`, or `None` when the pointer is below every midpoint and
/// the dragged row belongs at the end.
pub fn insertion_target(rows: &[RowGeometry], pointer_y: f64, in_motion: Option<RowKey>) -> Option<RowKey> {
    rows.iter()
        .filter(|r| Some(r.key) != in_motion)
        .find(|r| pointer_y < r.midpoint())
        .map(|r| r.key)
}
