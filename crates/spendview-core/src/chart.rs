// File: crates/spendview-core/src/chart.rs
// Summary: Bar/pie spending chart: lazy layout, hit-testing, selection and reveal.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use crate::aggregate::aggregate_categories;
use crate::color::{generate_palette, gradient_offset, reveal_gradient, Rgba};
use crate::geometry::{Point, Rect};
use crate::payment::{CategoryTotal, Payment};
use crate::primitive::{Primitive, PrimitiveArena};
use crate::render::RenderOp;
use crate::snapshot::{ChartSnapshot, SnapshotError, SNAPSHOT_VERSION};
use crate::types::{Insets, BAR_STROKE_WIDTH, MAX_CATEGORIES};

/// Angular gap reserved between adjacent pie wedges, degrees.
const WEDGE_GAP_DEG: f32 = 1.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChartMode {
    Pie,
    Bar,
}

/// Outbound notification emitted by the chart; the host drains these
/// instead of registering a callback.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    CategorySelected { name: String },
}

/// Interactive spending chart. All state is owned by the instance and
/// mutated from the single render/input thread; the external animation
/// driver feeds `set_percent` each frame and calls `clear_selection`
/// when a reveal cycle ends.
pub struct SpendingChart {
    mode: ChartMode,
    categories: Vec<CategoryTotal>,
    palette: [Rgba; MAX_CATEGORIES],
    primitives: PrimitiveArena,
    dirty: bool,
    selected: Option<usize>,
    percent: u8,
    gradient: [Rgba; 3],
    width: f32,
    height: f32,
    insets: Insets,
    events: VecDeque<ChartEvent>,
}

impl SpendingChart {
    /// Construct a chart with a deterministic palette derived from `palette_seed`.
    pub fn new(mode: ChartMode, palette_seed: u64) -> Self {
        let palette = generate_palette(palette_seed);
        Self {
            mode,
            categories: Vec::new(),
            palette,
            primitives: PrimitiveArena::new(),
            dirty: true,
            selected: None,
            percent: 100,
            gradient: reveal_gradient(palette[0]),
            width: 0.0,
            height: 0.0,
            insets: Insets::default(),
            events: VecDeque::new(),
        }
    }

    pub fn mode(&self) -> ChartMode {
        self.mode
    }

    pub fn set_mode(&mut self, mode: ChartMode) {
        self.mode = mode;
        self.dirty = true;
    }

    pub fn categories(&self) -> &[CategoryTotal] {
        &self.categories
    }

    pub fn palette(&self) -> &[Rgba; MAX_CATEGORIES] {
        &self.palette
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    /// Aggregate raw payments into ranked category buckets.
    pub fn set_payments(&mut self, payments: &[Payment]) {
        self.categories = aggregate_categories(payments);
        self.dirty = true;
    }

    /// Update the drawable surface geometry.
    pub fn set_size(&mut self, width: f32, height: f32, insets: Insets) {
        self.width = width;
        self.height = height;
        self.insets = insets;
        self.dirty = true;
    }

    /// Clamped display percent for the reveal animation.
    pub fn set_percent(&mut self, percent: u8) {
        self.percent = percent.min(100);
    }

    /// Reset the selection cycle; the next pointer-down may select again.
    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    /// Drain the next outbound event, if any.
    pub fn poll_event(&mut self) -> Option<ChartEvent> {
        self.events.pop_front()
    }

    /// Current primitives, recomputing first if stale.
    pub fn primitives(&mut self) -> &PrimitiveArena {
        self.ensure_layout();
        &self.primitives
    }

    /// Resolve a pointer-down at (x, y) to a bucket selection.
    /// No-op while a selection is already active, and for misses.
    pub fn pointer_down(&mut self, x: f32, y: f32) -> Option<usize> {
        self.ensure_layout();
        if self.selected.is_some() {
            return None;
        }
        let hit = match self.mode {
            ChartMode::Bar => self.hit_test_bar(Point::new(x, y)),
            ChartMode::Pie => self.hit_test_pie(Point::new(x, y)),
        };
        if let Some(index) = hit {
            self.select(index);
        }
        hit
    }

    /// Compute this frame's drawing commands from the current primitives,
    /// selection state and percent.
    pub fn render(&mut self) -> Vec<RenderOp> {
        self.ensure_layout();
        let mut ops = Vec::new();
        let percent = f32::from(self.percent);
        for (index, primitive) in self.primitives.occupied() {
            match *primitive {
                Primitive::Bar { rect, color } => {
                    ops.push(RenderOp::FillRect { rect, color });
                    if self.selected == Some(index) {
                        if let Some(op) = self.bar_reveal(rect) {
                            ops.push(op);
                        }
                    }
                }
                Primitive::Wedge { oval, start_deg, sweep_deg, stroke_width, color } => {
                    let faded = if self.selected.is_some() && self.selected != Some(index) {
                        // alpha = 255 - round(2.55 * percent), in exact integer form
                        // so the half-way case at percent 50 rounds up.
                        let fade = (255 * u32::from(self.percent) + 50) / 100;
                        color.with_alpha((255 - fade) as u8)
                    } else {
                        color
                    };
                    ops.push(RenderOp::StrokeArc {
                        oval,
                        start_deg,
                        sweep_deg,
                        stroke_width,
                        color: faded,
                    });
                    if self.selected == Some(index) {
                        ops.push(RenderOp::StrokeArc {
                            oval,
                            start_deg,
                            sweep_deg,
                            stroke_width: self.width.min(self.height) / 8.0 + percent / 10.0,
                            color,
                        });
                    }
                }
                Primitive::Empty => {}
            }
        }
        ops
    }

    /// Capture host-persistable state.
    pub fn snapshot(&self) -> ChartSnapshot {
        ChartSnapshot {
            version: SNAPSHOT_VERSION,
            mode: self.mode,
            categories: self.categories.clone(),
            colors: self.palette.to_vec(),
        }
    }

    /// Restore from a validated snapshot. Selection is transient and
    /// always cleared.
    pub fn restore(&mut self, snapshot: &ChartSnapshot) {
        self.mode = snapshot.mode;
        self.categories = snapshot.categories.clone();
        for (slot, color) in self.palette.iter_mut().zip(&snapshot.colors) {
            *slot = *color;
        }
        self.selected = None;
        self.dirty = true;
    }

    /// Restore from a persisted JSON blob. Fails closed: any decode or
    /// validation error leaves the chart in the empty state.
    pub fn restore_json(&mut self, text: &str) -> Result<(), SnapshotError> {
        match ChartSnapshot::from_json(text) {
            Ok(snapshot) => {
                self.restore(&snapshot);
                Ok(())
            }
            Err(err) => {
                self.categories.clear();
                self.selected = None;
                self.dirty = true;
                Err(err)
            }
        }
    }

    // ---- layout ------------------------------------------------------------

    fn ensure_layout(&mut self) {
        if !self.dirty {
            return;
        }
        self.primitives.clear();
        if !self.categories.is_empty() {
            match self.mode {
                ChartMode::Bar => self.layout_bars(),
                ChartMode::Pie => self.layout_wedges(),
            }
        }
        self.dirty = false;
    }

    fn layout_bars(&mut self) {
        // Buckets arrive sorted descending, so slot 0 carries the maximum.
        let max_amount = self.categories[0].amount;
        if max_amount <= 0 {
            return;
        }
        let delta = (self.width / self.categories.len() as f32).floor();
        let mut cx = self.insets.left;
        for (index, category) in self.categories.iter().enumerate() {
            let ratio = category.amount as f32 / max_amount as f32;
            let cy = self.height * (1.0 - ratio) - self.insets.top;
            self.primitives.set(
                index,
                Primitive::Bar {
                    rect: Rect::from_ltrb(
                        cx,
                        cy,
                        cx + delta - 2.0 * BAR_STROKE_WIDTH,
                        self.height - self.insets.bottom,
                    ),
                    color: self.palette[index],
                },
            );
            cx += delta;
        }
    }

    fn layout_wedges(&mut self) {
        let total: i64 = self.categories.iter().map(|c| c.amount).sum();
        if total <= 0 {
            return;
        }
        let r = self.width.min(self.height) / 2.0;
        let ring = r / 4.0;
        let cx = self.insets.left + self.width / 2.0;
        let cy = self.insets.top + self.height / 2.0;
        let oval = Rect::from_ltrb(cx - r + ring, cy - r + ring, cx + r - ring, cy + r - ring);

        let mut start = 0.0f32;
        for (index, category) in self.categories.iter().enumerate() {
            let sweep =
                (category.amount as f32 / total as f32 * 360.0 - WEDGE_GAP_DEG).max(0.0);
            self.primitives.set(
                index,
                Primitive::Wedge {
                    oval,
                    start_deg: start,
                    sweep_deg: sweep,
                    stroke_width: ring,
                    color: self.palette[index],
                },
            );
            start += sweep + WEDGE_GAP_DEG;
        }
    }

    // ---- hit testing -------------------------------------------------------

    fn hit_test_bar(&self, p: Point) -> Option<usize> {
        self.primitives
            .occupied()
            .find(|(_, prim)| matches!(prim, Primitive::Bar { rect, .. } if rect.contains(p)))
            .map(|(index, _)| index)
    }

    fn hit_test_pie(&self, p: Point) -> Option<usize> {
        // Points beyond the outer radius are misses, not angular matches.
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        if (p.x - half_w).hypot(p.y - half_h) > half_w.min(half_h) {
            return None;
        }
        let angle = self.pointer_angle(p)?;
        for (index, primitive) in self.primitives.occupied() {
            if let Primitive::Wedge { start_deg, sweep_deg, .. } = *primitive {
                if angle >= start_deg && angle <= start_deg + sweep_deg {
                    return Some(index);
                }
            }
        }
        None
    }

    /// Angle of the pointer around the chart center, degrees in [0, 360),
    /// 0 at 3 o'clock and increasing clockwise. Computed per quadrant via
    /// arcsine of the dominant offset ratio plus the quadrant base angle;
    /// the 360-degree seam wraps back to 0.
    fn pointer_angle(&self, p: Point) -> Option<f32> {
        let half_w = self.width / 2.0;
        let half_h = self.height / 2.0;
        let (a, b, base) = if p.y > half_h {
            if p.x > half_w {
                (p.y - half_h, p.x - half_w, 0.0)
            } else {
                (half_w - p.x, p.y - half_h, 90.0)
            }
        } else if p.x > half_w {
            (p.x - half_w, half_h - p.y, 270.0)
        } else {
            (half_h - p.y, half_w - p.x, 180.0)
        };
        let hyp = f64::from(a).hypot(f64::from(b));
        if hyp == 0.0 {
            return None;
        }
        let ratio = (f64::from(a) / hyp).min(1.0);
        let mut angle = ratio.asin().to_degrees() as f32 + base;
        if angle >= 360.0 {
            angle -= 360.0;
        }
        Some(angle)
    }

    // ---- selection & reveal ------------------------------------------------

    fn select(&mut self, index: usize) {
        self.selected = Some(index);
        self.gradient = reveal_gradient(self.palette[index]);
        self.events.push_back(ChartEvent::CategorySelected {
            name: self.categories[index].name.clone(),
        });
    }

    /// Clipped gradient fill for the selected bar: the revealed region
    /// grows bottom-up with percent while the source slice slides through
    /// the 3x-height gradient bitmap.
    fn bar_reveal(&self, rect: Rect) -> Option<RenderOp> {
        let h = rect.height();
        let reveal_h = h * f32::from(self.percent) / 100.0;
        if reveal_h <= 0.0 {
            return None;
        }
        let offset = gradient_offset(h, self.percent);
        Some(RenderOp::GradientRect {
            dest: Rect::from_ltrb(rect.left, rect.bottom - reveal_h, rect.right, rect.bottom),
            src_offset_y: offset + (h - reveal_h),
            src_height: reveal_h,
            gradient: self.gradient,
        })
    }
}
