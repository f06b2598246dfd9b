//! Visualization selection: the pure mapping from a dashboard mode to
//! the ordered list of panels it renders.

use crate::api::{
    DailyPreview, HourlyPreview, MetricsPanel, Panel, TimeSeriesData, UserTypeBreakdown,
    Visualization,
};
use crate::data::Datasets;
use crate::models::DateRange;

use super::aggregate::aggregate_by_hour;
use super::error::AnalysisError;
use super::filter::filter_by_range;
use super::regression::fit_model;
use super::stats::summarize;

/// Render the panels of one visualization mode.
///
/// Stateless and deterministic: every call refilters and recomputes from
/// the immutable base tables, so identical inputs give identical panels.
/// The range applies to every mode except Regression, which always runs
/// on the full daily table (preserved behavior, not a bug).
pub fn render_visualization(
    datasets: &Datasets,
    range: &DateRange,
    mode: Visualization,
) -> Result<Vec<Panel>, AnalysisError> {
    match mode {
        Visualization::Overview => {
            let daily = filter_by_range(&datasets.daily, range);
            let hourly = filter_by_range(&datasets.hourly, range);
            Ok(vec![
                Panel::DailyPreview(DailyPreview::head(&daily)),
                Panel::HourlyPreview(HourlyPreview::head(&hourly)),
            ])
        }

        Visualization::TimeSeries => {
            let daily = filter_by_range(&datasets.daily, range);
            Ok(vec![Panel::TimeSeries(TimeSeriesData::from_daily(&daily))])
        }

        Visualization::HourlyDistribution => {
            let hourly = filter_by_range(&datasets.hourly, range);
            let distribution = aggregate_by_hour(&hourly).to_distribution();
            Ok(vec![
                Panel::HourlyBars(distribution.total),
                Panel::HourlyBars(distribution.casual),
                Panel::HourlyBars(distribution.registered),
            ])
        }

        Visualization::PieChart => {
            let daily = filter_by_range(&datasets.daily, range);
            Ok(vec![Panel::UserTypePie(UserTypeBreakdown::from_rows(
                &daily,
            ))])
        }

        Visualization::Regression => {
            let fit = fit_model(&datasets.daily)?;
            let mut panels = vec![Panel::RegressionSummary(fit.summary)];
            panels.extend(fit.scatter.into_iter().map(Panel::Scatter));
            Ok(panels)
        }

        // Exactly the union of the other modes, in fixed order: metrics,
        // time series, hourly bars x3, pie, regression scatters x4.
        Visualization::Combined => {
            let daily = filter_by_range(&datasets.daily, range);
            let hourly = filter_by_range(&datasets.hourly, range);

            let mut panels = Vec::with_capacity(11);
            panels.push(Panel::Metrics(MetricsPanel {
                dataset: "daily".to_string(),
                summary: summarize(&daily)?,
            }));
            panels.push(Panel::Metrics(MetricsPanel {
                dataset: "hourly".to_string(),
                summary: summarize(&hourly)?,
            }));
            panels.push(Panel::TimeSeries(TimeSeriesData::from_daily(&daily)));

            let distribution = aggregate_by_hour(&hourly).to_distribution();
            panels.push(Panel::HourlyBars(distribution.total));
            panels.push(Panel::HourlyBars(distribution.casual));
            panels.push(Panel::HourlyBars(distribution.registered));

            panels.push(Panel::UserTypePie(UserTypeBreakdown::from_rows(&daily)));

            let fit = fit_model(&datasets.daily)?;
            panels.extend(fit.scatter.into_iter().map(Panel::Scatter));
            Ok(panels)
        }
    }
}
