// File: crates/spendview-core/src/types.rs
// Summary: Shared constants and surface insets.

/// Maximum number of category buckets a chart can display.
/// The last bucket may be a synthetic "Other" aggregate.
pub const MAX_CATEGORIES: usize = 10;

/// Gap carved out of each bar's right edge, in pixels (applied twice).
pub const BAR_STROKE_WIDTH: f32 = 4.0;

/// Number of horizontal grid rows in the hourly graph.
pub const HORIZONTAL_LINES: usize = 6;

/// Upper bound for grid label text size, in pixels.
pub const MAX_TEXT_SIZE: f32 = 20.0;

/// Preferred grid cell size used when measuring the hourly graph.
pub const GRID_CELL: f32 = MAX_TEXT_SIZE * 4.0;

/// Screen paddings, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Insets {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    /// Create new insets (caller keeps them non-negative).
    pub const fn new(left: f32, right: f32, top: f32, bottom: f32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f32 { self.top + self.bottom }
}
