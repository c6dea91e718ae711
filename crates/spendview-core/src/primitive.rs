// File: crates/spendview-core/src/primitive.rs
// Summary: Fixed-capacity arena of per-bucket drawable primitives.

use crate::color::Rgba;
use crate::geometry::Rect;
use crate::types::MAX_CATEGORIES;

/// Drawable shape for one category bucket. Unused slots are tagged
/// `Empty` explicitly instead of carrying sentinel geometry.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Primitive {
    #[default]
    Empty,
    Bar {
        rect: Rect,
        color: Rgba,
    },
    Wedge {
        /// Bounding oval of the arc.
        oval: Rect,
        /// Start angle, degrees, 0 at 3 o'clock, clockwise.
        start_deg: f32,
        /// Angular span, degrees.
        sweep_deg: f32,
        stroke_width: f32,
        color: Rgba,
    },
}

impl Primitive {
    pub fn is_empty(&self) -> bool {
        matches!(self, Primitive::Empty)
    }
}

/// One slot per possible bucket index, reused in place across re-layouts.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PrimitiveArena {
    slots: [Primitive; MAX_CATEGORIES],
}

impl PrimitiveArena {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.slots = [Primitive::Empty; MAX_CATEGORIES];
    }

    pub fn set(&mut self, index: usize, primitive: Primitive) {
        self.slots[index] = primitive;
    }

    pub fn get(&self, index: usize) -> &Primitive {
        &self.slots[index]
    }

    /// Iterate occupied slots in bucket order.
    pub fn occupied(&self) -> impl Iterator<Item = (usize, &Primitive)> {
        self.slots.iter().enumerate().filter(|(_, p)| !p.is_empty())
    }
}
