// File: crates/spendview-core/src/render.rs
// Summary: Backend-agnostic render operations emitted per frame.

use crate::color::Rgba;
use crate::geometry::{Point, Rect};

/// One drawing command. The engine only computes geometry and style;
/// an external backend (Skia, GPU, terminal, ...) consumes these.
#[derive(Clone, Debug, PartialEq)]
pub enum RenderOp {
    FillRect {
        rect: Rect,
        color: Rgba,
    },
    /// Blit a horizontal slice of the 3x-height reveal gradient into `dest`.
    /// `src_offset_y`/`src_height` address the slice inside the gradient
    /// bitmap; the bitmap itself is `gradient` rendered bottom-to-top over
    /// three bar heights.
    GradientRect {
        dest: Rect,
        src_offset_y: f32,
        src_height: f32,
        gradient: [Rgba; 3],
    },
    StrokeArc {
        oval: Rect,
        start_deg: f32,
        sweep_deg: f32,
        stroke_width: f32,
        color: Rgba,
    },
    Line {
        from: Point,
        to: Point,
        width: f32,
        color: Rgba,
        dashed: bool,
    },
    Text {
        origin: Point,
        size: f32,
        color: Rgba,
        text: String,
    },
}
