// File: crates/spendview-core/src/lib.rs
// Summary: Core library entry point; exports the public chart/graph geometry API.

pub mod aggregate;
pub mod chart;
pub mod color;
pub mod geometry;
pub mod graph;
pub mod payment;
pub mod primitive;
pub mod render;
pub mod snapshot;
pub mod types;

pub use aggregate::{aggregate_categories, OTHER_LABEL};
pub use chart::{ChartEvent, ChartMode, SpendingChart};
pub use color::{generate_palette, Rgba};
pub use geometry::{Point, Rect};
pub use graph::{bucket_hours, HourlyGraph};
pub use payment::{payments_from_json, CategoryTotal, Payment};
pub use primitive::{Primitive, PrimitiveArena};
pub use render::RenderOp;
pub use snapshot::{ChartSnapshot, GraphSnapshot, SnapshotError};
pub use types::{Insets, HORIZONTAL_LINES, MAX_CATEGORIES, MAX_TEXT_SIZE};
