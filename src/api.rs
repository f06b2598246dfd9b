//! Public API surface for the dashboard backend.
//!
//! This file consolidates the DTO types handed to the presentation
//! surface. All types derive Serialize/Deserialize for JSON.

pub use crate::routes::dashboard::MetricsPanel;
pub use crate::routes::dashboard::Panel;
pub use crate::routes::dashboard::UsageSummary;
pub use crate::routes::dashboard::Visualization;
pub use crate::routes::dashboard::VisualizationData;
pub use crate::routes::hourly::HourlyBar;
pub use crate::routes::hourly::HourlyDistributionData;
pub use crate::routes::hourly::HourlySeries;
pub use crate::routes::overview::DailyPreview;
pub use crate::routes::overview::HourlyPreview;
pub use crate::routes::overview::PREVIEW_ROWS;
pub use crate::routes::regression::Coefficient;
pub use crate::routes::regression::FitLine;
pub use crate::routes::regression::RegressionData;
pub use crate::routes::regression::RegressionSummary;
pub use crate::routes::regression::ScatterPanel;
pub use crate::routes::regression::ScatterPoint;
pub use crate::routes::timeseries::TimeSeriesData;
pub use crate::routes::timeseries::TimeSeriesPoint;
pub use crate::routes::user_types::PieSlice;
pub use crate::routes::user_types::UserTypeBreakdown;
