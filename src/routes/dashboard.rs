use serde::{Deserialize, Serialize};

use super::hourly::HourlySeries;
use super::overview::{DailyPreview, HourlyPreview};
use super::regression::{RegressionSummary, ScatterPanel};
use super::timeseries::TimeSeriesData;
use super::user_types::UserTypeBreakdown;

// =========================================================
// Visualization selection types
// =========================================================

/// The closed set of dashboard visualizations. Dispatch on this enum is
/// exhaustive; there is no string-based mode selection anywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visualization {
    Overview,
    TimeSeries,
    HourlyDistribution,
    PieChart,
    Regression,
    Combined,
}

impl Visualization {
    /// All modes, in menu order.
    pub const ALL: [Visualization; 6] = [
        Visualization::Overview,
        Visualization::TimeSeries,
        Visualization::HourlyDistribution,
        Visualization::PieChart,
        Visualization::Regression,
        Visualization::Combined,
    ];

    /// Whether the date-range filter applies to this mode. Regression
    /// deliberately runs on the full daily table.
    pub fn respects_date_filter(&self) -> bool {
        !matches!(self, Visualization::Regression)
    }
}

/// Mean rentals per row of a dataset.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct UsageSummary {
    pub mean_cnt: f64,
    pub mean_casual: f64,
    pub mean_registered: f64,
}

/// Scalar metrics panel for one of the two datasets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetricsPanel {
    /// `daily` or `hourly`.
    pub dataset: String,
    pub summary: UsageSummary,
}

/// One renderable unit handed to the presentation surface. A mode maps
/// to an ordered list of these.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Panel {
    Metrics(MetricsPanel),
    DailyPreview(DailyPreview),
    HourlyPreview(HourlyPreview),
    TimeSeries(TimeSeriesData),
    HourlyBars(HourlySeries),
    UserTypePie(UserTypeBreakdown),
    RegressionSummary(RegressionSummary),
    Scatter(ScatterPanel),
}

/// Response payload of the visualization endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisualizationData {
    pub visualization: Visualization,
    pub panels: Vec<Panel>,
}
