use serde::{Deserialize, Serialize};

// =========================================================
// Hourly distribution types
// =========================================================

/// One bar of an hour-of-day chart.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct HourlyBar {
    /// Hour of day, 0-23.
    pub hour: u8,
    /// Summed metric for that hour.
    pub value: u64,
}

/// A full 24-bar series for one metric. `bars` always covers hours
/// 0 through 23 in ascending order, absent hours contributing zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlySeries {
    /// Metric name: `cnt`, `casual`, or `registered`.
    pub metric: String,
    pub bars: Vec<HourlyBar>,
}

impl HourlySeries {
    pub fn new(metric: impl Into<String>, sums: &[u64; 24]) -> Self {
        Self {
            metric: metric.into(),
            bars: sums
                .iter()
                .enumerate()
                .map(|(hour, &value)| HourlyBar {
                    hour: hour as u8,
                    value,
                })
                .collect(),
        }
    }
}

/// The three hourly bar charts: total, casual, and registered rentals.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HourlyDistributionData {
    pub total: HourlySeries,
    pub casual: HourlySeries,
    pub registered: HourlySeries,
}
