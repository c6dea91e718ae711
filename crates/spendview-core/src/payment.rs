// File: crates/spendview-core/src/payment.rs
// Summary: Payment record and per-category aggregate types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single spending record. Amounts are minor currency units, >= 0.
/// Timestamps travel as millisecond epoch values on the wire.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Payment {
    pub id: u32,
    pub name: String,
    pub amount: i64,
    pub category: String,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub time: DateTime<Utc>,
}

/// One aggregated category bucket: display-cased name plus summed amount.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotal {
    pub name: String,
    pub amount: i64,
}

impl CategoryTotal {
    pub fn new(name: impl Into<String>, amount: i64) -> Self {
        Self { name: name.into(), amount }
    }
}

/// Decode a payment payload from its JSON form.
pub fn payments_from_json(text: &str) -> Result<Vec<Payment>, serde_json::Error> {
    serde_json::from_str(text)
}
