// File: crates/spendview-core/tests/hittest.rs
// Purpose: Validate pointer-to-bucket resolution for bars and pie wedges.

use chrono::{TimeZone, Utc};
use spendview_core::{ChartEvent, ChartMode, Insets, Payment, SpendingChart};

fn payment(id: u32, category: &str, amount: i64) -> Payment {
    Payment {
        id,
        name: format!("payment {id}"),
        amount,
        category: category.to_string(),
        time: Utc
            .timestamp_millis_opt(1_663_246_340_000 + i64::from(id) * 60_000)
            .unwrap(),
    }
}

fn bar_chart() -> SpendingChart {
    // Bucket 0: rect (0, 0)-(42, 100); bucket 1: rect (50, 50)-(92, 100).
    let mut c = SpendingChart::new(ChartMode::Bar, 42);
    c.set_payments(&[payment(1, "a", 100), payment(2, "b", 50)]);
    c.set_size(100.0, 100.0, Insets::default());
    c
}

fn pie_chart() -> SpendingChart {
    // Wedge 0: [0, 269]; wedge 1: [270, 359]. Center (100, 100), r = 100.
    let mut c = SpendingChart::new(ChartMode::Pie, 42);
    c.set_payments(&[payment(1, "a", 300), payment(2, "b", 100)]);
    c.set_size(200.0, 200.0, Insets::default());
    c
}

/// Point on the circle of `radius` around (100, 100) at `deg`, measured
/// clockwise from 3 o'clock in screen coordinates.
fn on_circle(deg: f32, radius: f32) -> (f32, f32) {
    let rad = deg.to_radians();
    (100.0 + radius * rad.cos(), 100.0 + radius * rad.sin())
}

#[test]
fn bar_centroid_resolves_to_its_bucket() {
    let mut c = bar_chart();
    assert_eq!(c.pointer_down(21.0, 50.0), Some(0));

    let mut c = bar_chart();
    assert_eq!(c.pointer_down(71.0, 75.0), Some(1));
}

#[test]
fn bar_containment_is_edge_inclusive() {
    let mut c = bar_chart();
    assert_eq!(c.pointer_down(42.0, 100.0), Some(0));
}

#[test]
fn bar_gap_and_outside_points_miss() {
    let mut c = bar_chart();
    assert_eq!(c.pointer_down(45.0, 99.0), None);
    assert_eq!(c.pointer_down(71.0, 20.0), None); // above the shorter bar
    assert_eq!(c.pointer_down(500.0, 500.0), None);
}

#[test]
fn wedge_centroid_resolves_to_its_bucket() {
    let mut c = pie_chart();
    let (x, y) = on_circle(134.5, 80.0);
    assert_eq!(c.pointer_down(x, y), Some(0));

    let mut c = pie_chart();
    let (x, y) = on_circle(315.0, 80.0);
    assert_eq!(c.pointer_down(x, y), Some(1));
}

#[test]
fn axis_aligned_pointers_resolve_consistently() {
    // 0 degrees (3 o'clock) computes as 360 and wraps back into wedge 0.
    let mut c = pie_chart();
    assert_eq!(c.pointer_down(180.0, 100.0), Some(0));

    // 90 degrees (6 o'clock).
    let mut c = pie_chart();
    assert_eq!(c.pointer_down(100.0, 180.0), Some(0));

    // 180 degrees (9 o'clock).
    let mut c = pie_chart();
    assert_eq!(c.pointer_down(20.0, 100.0), Some(0));

    // 270 degrees (12 o'clock) is wedge 1's inclusive lower bound.
    let mut c = pie_chart();
    assert_eq!(c.pointer_down(100.0, 20.0), Some(1));
}

#[test]
fn pie_center_and_far_outside_miss() {
    let mut c = pie_chart();
    assert_eq!(c.pointer_down(100.0, 100.0), None);
    assert_eq!(c.pointer_down(1000.0, 1000.0), None);
}

#[test]
fn selection_is_exclusive_until_cleared() {
    let mut c = bar_chart();
    assert_eq!(c.pointer_down(21.0, 50.0), Some(0));
    // Second tap on the other bucket is ignored while selected.
    assert_eq!(c.pointer_down(71.0, 75.0), None);
    assert!(matches!(
        c.poll_event(),
        Some(ChartEvent::CategorySelected { name }) if name == "A"
    ));
    assert!(c.poll_event().is_none());

    c.clear_selection();
    assert_eq!(c.pointer_down(71.0, 75.0), Some(1));
    assert!(matches!(
        c.poll_event(),
        Some(ChartEvent::CategorySelected { name }) if name == "B"
    ));
}
