// File: crates/spendview-core/src/graph.rs
// Summary: Hourly spending graph: 24-bucket sums, grid quantization, percent-clipped polyline.

use chrono::{TimeZone, Timelike, Utc};

use crate::color::Rgba;
use crate::geometry::{clamp, Point};
use crate::payment::Payment;
use crate::render::RenderOp;
use crate::snapshot::{GraphSnapshot, SnapshotError, HOURS, SNAPSHOT_VERSION};
use crate::types::{Insets, GRID_CELL, HORIZONTAL_LINES, MAX_TEXT_SIZE};

const GRID_COLOR: Rgba = Rgba::opaque(204, 204, 204);
const LABEL_COLOR: Rgba = Rgba::opaque(136, 136, 136);
const LINE_COLOR: Rgba = Rgba::opaque(255, 0, 0);

/// Sum payment amounts into 24 hour-of-day buckets, with the hour taken
/// in the supplied time zone. Pure function of its inputs.
pub fn bucket_hours<Tz: TimeZone>(payments: &[Payment], tz: &Tz) -> [i64; HOURS] {
    let mut hours = [0i64; HOURS];
    for p in payments {
        let hour = p.time.with_timezone(tz).hour() as usize;
        hours[hour] += p.amount;
    }
    hours
}

/// Line graph of one category's spending by hour of day. Geometry is
/// recomputed on every `render` call since the reveal boundary moves
/// with the externally driven percent.
pub struct HourlyGraph {
    hours: [i64; HOURS],
    category: String,
    active: bool,
    percent: u8,
    width: f32,
    height: f32,
    insets: Insets,
    text_size: f32,
    visible: bool,
}

impl Default for HourlyGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl HourlyGraph {
    pub fn new() -> Self {
        Self {
            hours: [0; HOURS],
            category: String::new(),
            active: false,
            percent: 100,
            width: 0.0,
            height: 0.0,
            insets: Insets::default(),
            text_size: 0.0,
            visible: false,
        }
    }

    pub fn hours(&self) -> &[i64; HOURS] {
        &self.hours
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn percent(&self) -> u8 {
        self.percent
    }

    pub fn text_size(&self) -> f32 {
        self.text_size
    }

    /// Clamped display percent driving the left-to-right reveal boundary.
    pub fn set_percent(&mut self, percent: u8) {
        self.percent = percent.min(100);
    }

    /// Bucket one category's payments by hour of day (UTC). The display
    /// label is the category of the earliest payment; an empty subset
    /// hides the graph.
    pub fn set_payments(&mut self, payments: &[Payment]) {
        self.active = !payments.is_empty();
        self.category = payments
            .iter()
            .min_by_key(|p| p.time)
            .map(|p| p.category.clone())
            .unwrap_or_default();
        self.hours = bucket_hours(payments, &Utc);
    }

    /// Size the graph asks for when the host imposes no constraint:
    /// one preferred cell per grid step plus the insets.
    pub fn preferred_size(insets: Insets) -> (f32, f32) {
        (
            GRID_CELL * (HOURS - 1) as f32 + insets.hsum(),
            GRID_CELL * HORIZONTAL_LINES as f32 + insets.vsum(),
        )
    }

    /// Negotiate a size against the available space: quantize to whole
    /// grid cells (23 columns x `HORIZONTAL_LINES` rows) and derive the
    /// label text size from the cell, capped at `MAX_TEXT_SIZE`.
    /// Returns the final (width, height).
    pub fn measure(&mut self, avail_width: f32, avail_height: f32, insets: Insets) -> (f32, f32) {
        let columns = (HOURS - 1) as f32;
        let rows = HORIZONTAL_LINES as f32;
        let ww = (avail_width - insets.hsum()).max(0.0);
        let hh = (avail_height - insets.vsum()).max(0.0);
        let cell = (ww / columns).min(hh / rows);

        self.text_size = clamp(cell / 2.0, 0.0, MAX_TEXT_SIZE);
        self.width = (cell * columns + insets.hsum()).min(avail_width);
        self.height = (cell * rows + insets.vsum()).min(avail_height);
        self.insets = insets;
        self.visible = self.width > 0.0 && self.height > 0.0;
        (self.width, self.height)
    }

    /// Adopt a host-imposed size directly, deriving the text size from it.
    pub fn set_size(&mut self, width: f32, height: f32, insets: Insets) {
        let ww = (width - insets.hsum()).max(0.0);
        let hh = (height - insets.vsum()).max(0.0);
        let cell = (ww / (HOURS - 1) as f32).min(hh / HORIZONTAL_LINES as f32);
        self.text_size = clamp(cell / 2.0, 0.0, MAX_TEXT_SIZE);
        self.width = width;
        self.height = height;
        self.insets = insets;
        self.visible = width > 0.0 && height > 0.0;
    }

    /// Compute this frame's grid, labels and the percent-clipped polyline.
    pub fn render(&self) -> Vec<RenderOp> {
        let mut ops = Vec::new();
        if !(self.active && self.visible) {
            return ops;
        }

        let max = *self.hours.iter().max().unwrap_or(&0);
        let delta_y = (self.height - self.insets.vsum()) / HORIZONTAL_LINES as f32;
        let row_labels = [max, max - max / 4, max / 2, max / 4, 0];

        // Reserve a right-hand column wide enough for the largest label.
        let cost = row_labels
            .iter()
            .map(|v| self.text_width(&v.to_string()))
            .fold(0.0f32, f32::max);
        let label_x = self.width - self.insets.right - cost;
        let top_y = self.insets.top + delta_y;

        if self.text_size > 0.0 {
            ops.push(RenderOp::Text {
                origin: Point::new(self.insets.left, top_y - 1.0),
                size: self.text_size,
                color: LABEL_COLOR,
                text: self.category.clone(),
            });
        }

        let mut y = top_y;
        for value in row_labels {
            ops.push(RenderOp::Line {
                from: Point::new(self.insets.left, y),
                to: Point::new(self.width - self.insets.right, y),
                width: 1.0,
                color: GRID_COLOR,
                dashed: true,
            });
            if self.text_size > 0.0 {
                ops.push(RenderOp::Text {
                    origin: Point::new(label_x, y - 1.0),
                    size: self.text_size,
                    color: LABEL_COLOR,
                    text: value.to_string(),
                });
            }
            y += delta_y;
        }
        let base_y = y - delta_y;

        let delta_x = (label_x - self.insets.left) / (HOURS - 1) as f32;
        let unit = if max > 0 { (base_y - top_y) / max as f32 } else { 0.0 };
        let max_x = (self.width - self.insets.hsum()) * f32::from(self.percent) / 100.0;

        let mut x = self.insets.left;
        for hour in 0..HOURS {
            ops.push(RenderOp::Line {
                from: Point::new(x, top_y),
                to: Point::new(x, base_y),
                width: 1.0,
                color: GRID_COLOR,
                dashed: true,
            });
            if self.text_size > 0.0 {
                let nudge = if hour < 10 { 3.0 } else { 6.0 };
                ops.push(RenderOp::Text {
                    origin: Point::new((x - nudge).max(self.insets.left), base_y + self.text_size),
                    size: self.text_size,
                    color: LABEL_COLOR,
                    text: hour.to_string(),
                });
            }

            if hour > 0 {
                let x0 = x - delta_x;
                let y0 = base_y - unit * self.hours[hour - 1] as f32;
                let y1 = base_y - unit * self.hours[hour] as f32;
                if max_x > x {
                    ops.push(segment(x0, y0, x, y1));
                } else if max_x > x0 && max_x <= x {
                    // Clip exactly at the reveal boundary.
                    let t = (max_x - x0) / delta_x;
                    ops.push(segment(x0, y0, max_x, y0 + t * (y1 - y0)));
                }
            }
            x += delta_x;
        }
        ops
    }

    /// Capture host-persistable state.
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            version: SNAPSHOT_VERSION,
            hours: self.hours.to_vec(),
            category: self.category.clone(),
        }
    }

    /// Restore from a validated snapshot; re-arms drawing at full reveal.
    pub fn restore(&mut self, snapshot: &GraphSnapshot) {
        for (slot, value) in self.hours.iter_mut().zip(&snapshot.hours) {
            *slot = *value;
        }
        self.category = snapshot.category.clone();
        self.active = true;
        self.percent = 100;
    }

    /// Restore from a persisted JSON blob. Fails closed: any decode or
    /// validation error leaves the graph empty and hidden.
    pub fn restore_json(&mut self, text: &str) -> Result<(), SnapshotError> {
        match GraphSnapshot::from_json(text) {
            Ok(snapshot) => {
                self.restore(&snapshot);
                Ok(())
            }
            Err(err) => {
                self.hours = [0; HOURS];
                self.category.clear();
                self.active = false;
                Err(err)
            }
        }
    }

    /// Label width estimate; there is no font engine in scope, so widths
    /// are approximated from the glyph count.
    fn text_width(&self, text: &str) -> f32 {
        0.6 * self.text_size * text.chars().count() as f32
    }
}

fn segment(x0: f32, y0: f32, x1: f32, y1: f32) -> RenderOp {
    RenderOp::Line {
        from: Point::new(x0, y0),
        to: Point::new(x1, y1),
        width: 2.0,
        color: LINE_COLOR,
        dashed: false,
    }
}
