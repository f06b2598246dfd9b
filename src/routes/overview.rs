use serde::{Deserialize, Serialize};

use crate::models::{DailyRecord, HourlyRecord};

// =========================================================
// Overview types
// =========================================================

/// Number of head rows shown in each dataset preview table.
pub const PREVIEW_ROWS: usize = 5;

/// Head rows of the (filtered) daily table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyPreview {
    pub rows: Vec<DailyRecord>,
}

impl DailyPreview {
    /// Take the first [`PREVIEW_ROWS`] rows, fewer if the table is shorter.
    pub fn head(rows: &[DailyRecord]) -> Self {
        Self {
            rows: rows.iter().take(PREVIEW_ROWS).copied().collect(),
        }
    }
}

/// Head rows of the (filtered) hourly table.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyPreview {
    pub rows: Vec<HourlyRecord>,
}

impl HourlyPreview {
    /// Take the first [`PREVIEW_ROWS`] rows, fewer if the table is shorter.
    pub fn head(rows: &[HourlyRecord]) -> Self {
        Self {
            rows: rows.iter().take(PREVIEW_ROWS).copied().collect(),
        }
    }
}
