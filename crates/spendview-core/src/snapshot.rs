// File: crates/spendview-core/src/snapshot.rs
// Summary: Versioned, host-persisted transient-state snapshots for chart and graph.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::chart::ChartMode;
use crate::color::Rgba;
use crate::payment::CategoryTotal;
use crate::types::MAX_CATEGORIES;

pub const SNAPSHOT_VERSION: u32 = 1;

/// Number of hourly buckets carried in a graph snapshot.
pub const HOURS: usize = 24;

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot decode failed: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("unsupported snapshot version {0}")]
    Version(u32),
    #[error("snapshot failed validation: {0}")]
    Invalid(&'static str),
}

/// Chart state the host persists across suspend/resume: display mode,
/// aggregated categories and the color palette. Selection and percent
/// are transient and intentionally not captured.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartSnapshot {
    pub version: u32,
    pub mode: ChartMode,
    pub categories: Vec<CategoryTotal>,
    pub colors: Vec<Rgba>,
}

impl ChartSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let snap: Self = serde_json::from_str(text)?;
        snap.validate()?;
        Ok(snap)
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::Version(self.version));
        }
        if self.categories.len() > MAX_CATEGORIES {
            return Err(SnapshotError::Invalid("too many categories"));
        }
        if self.colors.len() != MAX_CATEGORIES {
            return Err(SnapshotError::Invalid("palette must hold one color per bucket"));
        }
        for (i, c) in self.colors.iter().enumerate() {
            if self.colors[..i].contains(c) {
                return Err(SnapshotError::Invalid("palette colors must be distinct"));
            }
        }
        Ok(())
    }
}

/// Graph state the host persists: the 24 hourly sums and the category label.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphSnapshot {
    pub version: u32,
    pub hours: Vec<i64>,
    pub category: String,
}

impl GraphSnapshot {
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(text: &str) -> Result<Self, SnapshotError> {
        let snap: Self = serde_json::from_str(text)?;
        snap.validate()?;
        Ok(snap)
    }

    pub fn validate(&self) -> Result<(), SnapshotError> {
        if self.version != SNAPSHOT_VERSION {
            return Err(SnapshotError::Version(self.version));
        }
        if self.hours.len() != HOURS {
            return Err(SnapshotError::Invalid("graph snapshot must hold 24 hourly sums"));
        }
        Ok(())
    }
}
