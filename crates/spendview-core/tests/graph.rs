// File: crates/spendview-core/tests/graph.rs
// Purpose: Validate hourly bucketing, grid measurement and percent-clipped polyline.

use chrono::{FixedOffset, TimeZone, Utc};
use spendview_core::{
    bucket_hours, GraphSnapshot, HourlyGraph, Insets, Payment, Point, RenderOp, Rgba,
    MAX_TEXT_SIZE,
};

const GRAPH_LINE: Rgba = Rgba::opaque(255, 0, 0);

fn payment_at(id: u32, category: &str, amount: i64, hour: u32, minute: u32) -> Payment {
    Payment {
        id,
        name: format!("payment {id}"),
        amount,
        category: category.to_string(),
        time: Utc.with_ymd_and_hms(2022, 9, 15, hour, minute, 0).unwrap(),
    }
}

fn polyline(ops: &[RenderOp]) -> Vec<(Point, Point)> {
    ops.iter()
        .filter_map(|op| match op {
            RenderOp::Line { from, to, color, .. } if *color == GRAPH_LINE => Some((*from, *to)),
            _ => None,
        })
        .collect()
}

#[test]
fn buckets_sum_amounts_per_hour() {
    let payments = vec![
        payment_at(1, "cafe", 5, 0, 30),
        payment_at(2, "cafe", 7, 13, 10),
        payment_at(3, "cafe", 3, 13, 50),
    ];
    let hours = bucket_hours(&payments, &Utc);
    assert_eq!(hours[0], 5);
    assert_eq!(hours[13], 10);
    assert_eq!(hours.iter().sum::<i64>(), 15);
}

#[test]
fn bucketing_honors_the_time_zone_offset() {
    let payments = vec![
        payment_at(1, "cafe", 5, 0, 30),
        payment_at(2, "cafe", 7, 13, 10),
    ];
    let plus_one = FixedOffset::east_opt(3600).unwrap();
    let hours = bucket_hours(&payments, &plus_one);
    assert_eq!(hours[1], 5);
    assert_eq!(hours[14], 7);
}

#[test]
fn category_comes_from_the_earliest_payment() {
    let mut g = HourlyGraph::new();
    g.set_payments(&[
        payment_at(2, "later", 7, 13, 10),
        payment_at(1, "Cafe", 5, 0, 30),
    ]);
    assert_eq!(g.category(), "Cafe");
}

#[test]
fn empty_subset_hides_the_graph() {
    let mut g = HourlyGraph::new();
    g.set_size(1000.0, 600.0, Insets::default());
    g.set_payments(&[]);
    assert_eq!(g.category(), "");
    assert!(g.render().is_empty());
}

#[test]
fn measure_quantizes_to_grid_cells_and_caps_text() {
    let mut g = HourlyGraph::new();
    let (w, h) = g.measure(1000.0, 600.0, Insets::default());
    // cell = min(1000/23, 600/6) = 1000/23; height snaps to six cells.
    assert!((w - 1000.0).abs() < 1e-2);
    assert!((h - 6.0 * (1000.0 / 23.0)).abs() < 1e-2);
    assert_eq!(g.text_size(), MAX_TEXT_SIZE);
    assert!(g.is_visible());
}

#[test]
fn measure_with_no_space_hides_the_graph() {
    let mut g = HourlyGraph::new();
    g.measure(0.0, 0.0, Insets::default());
    assert!(!g.is_visible());
    assert_eq!(g.text_size(), 0.0);
}

#[test]
fn percent_zero_draws_no_polyline() {
    let mut g = restored_graph(vec![10; 24]);
    g.set_percent(0);
    assert!(polyline(&g.render()).is_empty());
}

#[test]
fn percent_hundred_draws_all_segments() {
    let mut g = restored_graph(vec![10; 24]);
    g.set_percent(100);
    assert_eq!(polyline(&g.render()).len(), 23);
}

#[test]
fn intermediate_percent_clips_exactly_at_the_boundary() {
    let mut g = restored_graph(vec![10; 24]);
    g.set_percent(10);
    let segments = polyline(&g.render());
    assert!(!segments.is_empty());
    // Reveal boundary: plot width x percent / 100.
    let boundary = 1000.0 * 10.0 / 100.0;
    let last = segments.last().unwrap();
    assert!((last.1.x - boundary).abs() < 1e-3, "clipped at {}", last.1.x);
    // Flat data: the interpolated endpoint keeps the segment's height.
    assert!((last.1.y - last.0.y).abs() < 1e-3);
}

#[test]
fn clip_interpolates_between_the_two_endpoints() {
    let mut hours = vec![0i64; 24];
    hours[1] = 100;
    let mut g = restored_graph(hours);
    g.set_percent(1); // boundary lands inside the first segment
    let segments = polyline(&g.render());
    assert_eq!(segments.len(), 1);
    let (from, to) = segments[0];

    // Independently derived geometry for a 1000x600 surface, no insets:
    // rows are 100 px apart, so the plot spans y = 100..500; the label
    // column is 0.6 * 20 * 3 = 36 px wide, so hour columns are
    // (1000 - 36) / 23 px apart. Hour 0 holds 0, hour 1 holds the max,
    // so the full segment runs (0, 500) -> (delta_x, 100).
    let delta_x = (1000.0 - 36.0) / 23.0;
    let boundary = 1000.0 * 1.0 / 100.0;
    let t = boundary / delta_x;
    assert_eq!(from, Point::new(0.0, 500.0));
    assert!((to.x - boundary).abs() < 1e-3);
    assert!((to.y - (500.0 + t * (100.0 - 500.0))).abs() < 1e-3);
}

#[test]
fn grid_emits_rows_columns_and_labels() {
    let g = restored_graph(vec![10; 24]);
    let ops = g.render();
    let dashed = ops
        .iter()
        .filter(|op| matches!(op, RenderOp::Line { dashed: true, .. }))
        .count();
    // 5 horizontal rows + 24 vertical hour lines.
    assert_eq!(dashed, 29);
    let labels = ops
        .iter()
        .filter(|op| matches!(op, RenderOp::Text { .. }))
        .count();
    // category + 5 row labels + 24 hour labels.
    assert_eq!(labels, 30);
}

#[test]
fn row_labels_step_down_in_quarters() {
    let g = restored_graph(vec![100; 24]);
    let texts: Vec<String> = g
        .render()
        .iter()
        .filter_map(|op| match op {
            RenderOp::Text { text, .. } => Some(text.clone()),
            _ => None,
        })
        .collect();
    for expected in ["100", "75", "50", "25", "0"] {
        assert!(texts.iter().any(|t| t == expected), "missing label {expected}");
    }
}

fn restored_graph(hours: Vec<i64>) -> HourlyGraph {
    let mut g = HourlyGraph::new();
    g.set_size(1000.0, 600.0, Insets::default());
    g.restore(&GraphSnapshot {
        version: 1,
        hours,
        category: "Cafe".to_string(),
    });
    g
}
