// File: crates/demo/src/main.rs
// Summary: Headless demo: loads a payment payload, drives bar/pie charts and the hourly graph.

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use spendview_core::{
    payments_from_json, ChartEvent, ChartMode, HourlyGraph, Insets, Payment, Primitive,
    SpendingChart,
};

/// Fallback payload when no file is given on the command line.
const SAMPLE_PAYLOAD: &str = r#"[
  {"id": 1,  "name": "Supermarket",    "amount": 2899, "category": "Groceries",  "time": 1663246340000},
  {"id": 2,  "name": "Bakery",         "amount": 450,  "category": "groceries",  "time": 1663257140000},
  {"id": 3,  "name": "Metro",          "amount": 55,   "category": "Transport",  "time": 1663221140000},
  {"id": 4,  "name": "Taxi",           "amount": 780,  "category": "transport",  "time": 1663293140000},
  {"id": 5,  "name": "Espresso bar",   "amount": 320,  "category": "Cafe",       "time": 1663250540000},
  {"id": 6,  "name": "Lunch",          "amount": 1240, "category": "cafe",       "time": 1663261940000},
  {"id": 7,  "name": "Pharmacy",       "amount": 690,  "category": "Health",     "time": 1663232840000},
  {"id": 8,  "name": "Gym pass",       "amount": 1500, "category": "health",     "time": 1663311140000},
  {"id": 9,  "name": "Indie bundle",   "amount": 999,  "category": "Games",      "time": 1663282340000},
  {"id": 10, "name": "Streaming",      "amount": 599,  "category": "Subscriptions", "time": 1663300340000},
  {"id": 11, "name": "Grocer corner",  "amount": 1130, "category": "GROCERIES",  "time": 1663268420000},
  {"id": 12, "name": "Bus ticket",     "amount": 40,   "category": "Transport",  "time": 1663275620000}
]"#;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let payload = match std::env::args().nth(1) {
        Some(path) => std::fs::read_to_string(&path)
            .with_context(|| format!("failed to read payload '{path}'"))?,
        None => SAMPLE_PAYLOAD.to_string(),
    };
    let payments = payments_from_json(&payload).context("failed to decode payload JSON")?;
    info!(count = payments.len(), "loaded payments");

    let insets = Insets::default();
    let mut graph = HourlyGraph::new();
    let (gw, gh) = HourlyGraph::preferred_size(insets);
    graph.measure(gw, gh, insets);

    // Bar chart: tap the tallest bucket and animate the reveal.
    let mut bar = SpendingChart::new(ChartMode::Bar, 7);
    bar.set_payments(&payments);
    bar.set_size(1000.0, 600.0, insets);
    info!(buckets = bar.categories().len(), "bar chart ready");

    let target = match *bar.primitives().get(0) {
        Primitive::Bar { rect, .. } => rect.center(),
        _ => anyhow::bail!("bar chart produced no primitives"),
    };
    bar.pointer_down(target.x, target.y);
    drive_selection(&mut bar, &mut graph, &payments)?;

    // Pie chart: tap the mid-angle of the largest wedge.
    let mut pie = SpendingChart::new(ChartMode::Pie, 11);
    pie.set_payments(&payments);
    pie.set_size(600.0, 600.0, insets);

    let target = match *pie.primitives().get(0) {
        Primitive::Wedge { oval, start_deg, sweep_deg, .. } => {
            let mid = (start_deg + sweep_deg / 2.0).to_radians();
            let center = oval.center();
            let radius = oval.width() / 2.0;
            (center.x + radius * mid.cos(), center.y + radius * mid.sin())
        }
        _ => anyhow::bail!("pie chart produced no primitives"),
    };
    pie.pointer_down(target.0, target.1);
    drive_selection(&mut pie, &mut graph, &payments)?;

    // Suspend/resume round trip through the host-persisted snapshots.
    let chart_blob = bar.snapshot().to_json()?;
    let graph_blob = graph.snapshot().to_json()?;
    let mut resumed = SpendingChart::new(ChartMode::Bar, 1);
    resumed.restore_json(&chart_blob)?;
    let mut resumed_graph = HourlyGraph::new();
    resumed_graph.restore_json(&graph_blob)?;
    info!(
        categories = resumed.categories().len(),
        graph_category = resumed_graph.category(),
        "snapshot round trip complete"
    );

    Ok(())
}

/// Drain the selection event, point the graph at the selected category and
/// run a linear 0..100 percent sweep over both components.
fn drive_selection(
    chart: &mut SpendingChart,
    graph: &mut HourlyGraph,
    payments: &[Payment],
) -> Result<()> {
    let ChartEvent::CategorySelected { name } =
        chart.poll_event().context("pointer-down selected nothing")?;
    info!(category = %name, "selected");

    let filtered: Vec<Payment> = payments
        .iter()
        .filter(|p| p.category.eq_ignore_ascii_case(&name))
        .cloned()
        .collect();
    graph.set_payments(&filtered);

    for percent in (0..=100).step_by(20) {
        chart.set_percent(percent as u8);
        graph.set_percent(percent as u8);
        let chart_ops = chart.render().len();
        let graph_ops = graph.render().len();
        info!(percent, chart_ops, graph_ops, "frame");
    }
    chart.clear_selection();
    Ok(())
}
