use chrono::NaiveDate;

use crate::api::{Panel, Visualization};
use crate::data::Datasets;
use crate::models::{DailyRecord, DateRange, HourlyRecord};
use crate::services::dashboard::render_visualization;
use crate::services::error::AnalysisError;

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2011, 1, day).unwrap()
}

fn daily(day: u32, cnt: u32) -> DailyRecord {
    DailyRecord {
        date: date(day),
        season: 1,
        yr: 0,
        mnth: 1,
        holiday: 0,
        weekday: 6,
        workingday: u8::from(day % 2 == 0),
        weathersit: 1 + (day % 3) as u8,
        temp: 0.1 + 0.05 * day as f64,
        atemp: 0.1 + 0.05 * day as f64,
        hum: 0.9 - 0.04 * day as f64,
        windspeed: 0.05 + 0.02 * day as f64,
        casual: cnt / 4,
        registered: cnt - cnt / 4,
        cnt,
    }
}

fn hourly(day: u32, hr: u8, cnt: u32) -> HourlyRecord {
    HourlyRecord {
        date: date(day),
        season: 1,
        yr: 0,
        mnth: 1,
        hr,
        holiday: 0,
        weekday: 6,
        workingday: 0,
        weathersit: 1,
        temp: 0.2,
        atemp: 0.2,
        hum: 0.7,
        windspeed: 0.1,
        casual: cnt / 2,
        registered: cnt - cnt / 2,
        cnt,
    }
}

fn sample_datasets() -> Datasets {
    Datasets {
        daily: (1..=10).map(|d| daily(d, 800 + 40 * d)).collect(),
        hourly: (1..=10)
            .flat_map(|d| (0..4).map(move |h| hourly(d, h * 6, 20 + d)))
            .collect(),
    }
}

fn full_range() -> DateRange {
    DateRange::new(date(1), date(10)).unwrap()
}

#[test]
fn test_overview_renders_two_previews() {
    let panels = render_visualization(&sample_datasets(), &full_range(), Visualization::Overview)
        .unwrap();

    assert_eq!(panels.len(), 2);
    match (&panels[0], &panels[1]) {
        (Panel::DailyPreview(day), Panel::HourlyPreview(hour)) => {
            assert_eq!(day.rows.len(), 5);
            assert_eq!(hour.rows.len(), 5);
        }
        other => panic!("unexpected overview panels: {:?}", other),
    }
}

#[test]
fn test_time_series_respects_the_filter() {
    let datasets = sample_datasets();
    let range = DateRange::new(date(2), date(4)).unwrap();

    let panels =
        render_visualization(&datasets, &range, Visualization::TimeSeries).unwrap();

    match &panels[0] {
        Panel::TimeSeries(data) => {
            assert_eq!(data.points.len(), 3);
            assert_eq!(data.points[0].date, date(2));
            assert!(data.points[0].working_day);
        }
        other => panic!("unexpected panel: {:?}", other),
    }
}

#[test]
fn test_hourly_distribution_renders_three_bar_charts() {
    let panels = render_visualization(
        &sample_datasets(),
        &full_range(),
        Visualization::HourlyDistribution,
    )
    .unwrap();

    assert_eq!(panels.len(), 3);
    let metrics: Vec<String> = panels
        .iter()
        .map(|p| match p {
            Panel::HourlyBars(series) => series.metric.clone(),
            other => panic!("unexpected panel: {:?}", other),
        })
        .collect();
    assert_eq!(metrics, vec!["cnt", "casual", "registered"]);
}

#[test]
fn test_pie_chart_sums_filtered_daily_rows() {
    let datasets = sample_datasets();
    let range = DateRange::new(date(1), date(2)).unwrap();

    let panels = render_visualization(&datasets, &range, Visualization::PieChart).unwrap();

    match &panels[0] {
        Panel::UserTypePie(breakdown) => {
            let total: u64 = breakdown.slices.iter().map(|s| s.count).sum();
            assert_eq!(total, u64::from(datasets.daily[0].cnt + datasets.daily[1].cnt));
        }
        other => panic!("unexpected panel: {:?}", other),
    }
}

#[test]
fn test_regression_renders_summary_then_four_scatters() {
    let panels =
        render_visualization(&sample_datasets(), &full_range(), Visualization::Regression)
            .unwrap();

    assert_eq!(panels.len(), 5);
    assert!(matches!(panels[0], Panel::RegressionSummary(_)));
    assert!(panels[1..]
        .iter()
        .all(|p| matches!(p, Panel::Scatter(_))));
}

#[test]
fn test_regression_ignores_the_date_filter() {
    // A range excluding every row still fits on the full daily table.
    let datasets = sample_datasets();
    let empty_range = DateRange::new(
        NaiveDate::from_ymd_opt(2012, 1, 1).unwrap(),
        NaiveDate::from_ymd_opt(2012, 1, 2).unwrap(),
    )
    .unwrap();

    let panels =
        render_visualization(&datasets, &empty_range, Visualization::Regression).unwrap();

    match &panels[0] {
        Panel::RegressionSummary(summary) => {
            assert_eq!(summary.observations, datasets.daily.len());
        }
        other => panic!("unexpected panel: {:?}", other),
    }
}

#[test]
fn test_combined_is_the_union_in_fixed_order() {
    let panels =
        render_visualization(&sample_datasets(), &full_range(), Visualization::Combined)
            .unwrap();

    // metrics x2, time series, hourly bars x3, pie, scatters x4
    assert_eq!(panels.len(), 11);
    assert!(matches!(&panels[0], Panel::Metrics(m) if m.dataset == "daily"));
    assert!(matches!(&panels[1], Panel::Metrics(m) if m.dataset == "hourly"));
    assert!(matches!(panels[2], Panel::TimeSeries(_)));
    assert!(panels[3..6].iter().all(|p| matches!(p, Panel::HourlyBars(_))));
    assert!(matches!(panels[6], Panel::UserTypePie(_)));
    assert!(panels[7..].iter().all(|p| matches!(p, Panel::Scatter(_))));
}

#[test]
fn test_combined_with_empty_filter_reports_no_data() {
    let datasets = sample_datasets();
    let empty_range = DateRange::new(
        NaiveDate::from_ymd_opt(2012, 6, 1).unwrap(),
        NaiveDate::from_ymd_opt(2012, 6, 30).unwrap(),
    )
    .unwrap();

    let err =
        render_visualization(&datasets, &empty_range, Visualization::Combined).unwrap_err();
    assert_eq!(err, AnalysisError::NoData);
}

#[test]
fn test_rendering_is_repeatable() {
    let datasets = sample_datasets();
    let range = full_range();

    let first = render_visualization(&datasets, &range, Visualization::Combined).unwrap();
    let second = render_visualization(&datasets, &range, Visualization::Combined).unwrap();

    assert_eq!(
        serde_json::to_string(&first).unwrap(),
        serde_json::to_string(&second).unwrap()
    );
}
