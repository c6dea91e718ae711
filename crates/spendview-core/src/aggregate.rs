// File: crates/spendview-core/src/aggregate.rs
// Summary: Groups payments into ranked category totals with top-9 + "Other" collapse.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::payment::{CategoryTotal, Payment};
use crate::types::MAX_CATEGORIES;

/// Label for the synthetic trailing bucket of collapsed categories.
pub const OTHER_LABEL: &str = "Other";

/// Group payments case-insensitively by category and rank by total,
/// descending. Keeps at most `MAX_CATEGORIES - 1` real buckets; everything
/// past the top 9 is summed into one trailing "Other" entry, appended only
/// when at least one group was collapsed. Sorting is stable, so ties keep
/// first-encountered order. Pure function of the input list.
pub fn aggregate_categories(payments: &[Payment]) -> Vec<CategoryTotal> {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, i64> = HashMap::new();

    for p in payments {
        let key = p.category.to_lowercase();
        match totals.entry(key) {
            Entry::Occupied(mut e) => *e.get_mut() += p.amount,
            Entry::Vacant(e) => {
                order.push(e.key().clone());
                e.insert(p.amount);
            }
        }
    }

    let mut groups: Vec<CategoryTotal> = order
        .into_iter()
        .map(|key| {
            let amount = totals[&key];
            CategoryTotal::new(capitalize_first(&key), amount)
        })
        .collect();

    groups.sort_by(|a, b| b.amount.cmp(&a.amount));

    if groups.len() > MAX_CATEGORIES - 1 {
        let other: i64 = groups[MAX_CATEGORIES - 1..].iter().map(|c| c.amount).sum();
        groups.truncate(MAX_CATEGORIES - 1);
        groups.push(CategoryTotal::new(OTHER_LABEL, other));
    }

    groups
}

/// Display form of a lowercased group key: first letter upper-cased.
fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) => c.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
