use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::DailyRecord;

// =========================================================
// Time series types
// =========================================================

/// One point of the daily usage line, grouped client-side by the
/// working-day flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    pub date: NaiveDate,
    pub cnt: u32,
    pub working_day: bool,
}

/// Daily total usage over time, working days vs holidays.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeSeriesData {
    pub points: Vec<TimeSeriesPoint>,
}

impl TimeSeriesData {
    /// Project the filtered daily table onto the line-chart points,
    /// preserving row order.
    pub fn from_daily(rows: &[DailyRecord]) -> Self {
        Self {
            points: rows
                .iter()
                .map(|r| TimeSeriesPoint {
                    date: r.date,
                    cnt: r.cnt,
                    working_day: r.is_working_day(),
                })
                .collect(),
        }
    }
}
