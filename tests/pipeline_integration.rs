//! End-to-end pipeline tests: CSV text in, chart-ready panels out.

use bikedash::api::{Panel, Visualization, VisualizationData};
use bikedash::data::loader::parse_records;
use bikedash::data::Datasets;
use bikedash::models::{DailyRecord, DateRange, HourlyRecord};
use bikedash::services::render_visualization;

use chrono::NaiveDate;

const DAY_CSV: &str = "\
instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985
2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801
3,2011-01-03,1,0,1,0,1,1,1,0.196364,0.189405,0.437273,0.248309,120,1229,1349
4,2011-01-04,1,0,1,0,2,1,1,0.2,0.212122,0.590435,0.160296,108,1454,1562
5,2011-01-05,1,0,1,0,3,1,1,0.226957,0.22927,0.436957,0.1869,82,1518,1600
6,2011-01-06,1,0,1,0,4,1,1,0.204348,0.233209,0.518261,0.0895652,88,1518,1606
7,2011-01-07,1,0,1,0,5,1,2,0.196522,0.208839,0.498696,0.168726,148,1362,1510
8,2011-01-08,1,0,1,0,6,0,2,0.165,0.162254,0.535833,0.266804,68,891,959
9,2011-01-09,1,0,1,0,0,0,1,0.138333,0.116175,0.434167,0.36195,54,768,822
10,2011-01-10,1,0,1,0,1,1,1,0.150833,0.150888,0.482917,0.223267,41,1280,1321
";

const HOUR_CSV: &str = "\
instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0.0,3,13,16
2,2011-01-01,1,0,1,1,0,6,0,1,0.22,0.2727,0.8,0.0,8,32,40
3,2011-01-01,1,0,1,8,0,6,0,1,0.24,0.2879,0.75,0.0,1,7,8
4,2011-01-02,1,0,1,8,0,0,0,2,0.22,0.2727,0.77,0.1343,5,28,33
5,2011-01-02,1,0,1,17,0,0,0,2,0.2,0.2576,0.64,0.0,9,26,35
6,2011-01-03,1,0,1,17,0,1,1,1,0.16,0.1818,0.55,0.1045,4,41,45
";

fn load_fixture() -> Datasets {
    let daily: Vec<DailyRecord> = parse_records(DAY_CSV.as_bytes()).unwrap();
    let hourly: Vec<HourlyRecord> = parse_records(HOUR_CSV.as_bytes()).unwrap();
    Datasets { daily, hourly }
}

fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2011, 1, day).unwrap()
}

#[test]
fn test_fixture_loads_and_spans_the_expected_dates() {
    let datasets = load_fixture();
    assert_eq!(datasets.daily.len(), 10);
    assert_eq!(datasets.hourly.len(), 6);
    assert_eq!(datasets.date_span(), Some((date(1), date(10))));
}

#[test]
fn test_every_mode_renders_on_the_full_span() {
    let datasets = load_fixture();
    let range = DateRange::new(date(1), date(10)).unwrap();

    for mode in Visualization::ALL {
        let panels = render_visualization(&datasets, &range, mode).unwrap();
        assert!(!panels.is_empty(), "{:?} produced no panels", mode);
    }
}

#[test]
fn test_filtered_time_series_matches_the_source_rows() {
    let datasets = load_fixture();
    let range = DateRange::new(date(3), date(5)).unwrap();

    let panels =
        render_visualization(&datasets, &range, Visualization::TimeSeries).unwrap();

    match &panels[0] {
        Panel::TimeSeries(data) => {
            let counts: Vec<u32> = data.points.iter().map(|p| p.cnt).collect();
            assert_eq!(counts, vec![1349, 1562, 1600]);
        }
        other => panic!("unexpected panel: {:?}", other),
    }
}

#[test]
fn test_hourly_totals_aggregate_across_days() {
    let datasets = load_fixture();
    let range = DateRange::new(date(1), date(10)).unwrap();

    let panels = render_visualization(
        &datasets,
        &range,
        Visualization::HourlyDistribution,
    )
    .unwrap();

    match &panels[0] {
        Panel::HourlyBars(series) => {
            assert_eq!(series.metric, "cnt");
            let hour8 = series.bars.iter().find(|b| b.hour == 8).unwrap();
            // 8 on Jan 1 plus 33 on Jan 2.
            assert_eq!(hour8.value, 41);
            let hour17 = series.bars.iter().find(|b| b.hour == 17).unwrap();
            assert_eq!(hour17.value, 80);
        }
        other => panic!("unexpected panel: {:?}", other),
    }
}

#[test]
fn test_regression_uses_the_full_table_regardless_of_filter() {
    let datasets = load_fixture();
    let narrow = DateRange::new(date(1), date(2)).unwrap();

    let panels =
        render_visualization(&datasets, &narrow, Visualization::Regression).unwrap();

    match &panels[0] {
        Panel::RegressionSummary(summary) => {
            assert_eq!(summary.observations, 10);
            assert_eq!(summary.coefficients.len(), 5);
        }
        other => panic!("unexpected panel: {:?}", other),
    }
}

#[test]
fn test_response_payload_round_trips_as_json() {
    let datasets = load_fixture();
    let range = DateRange::new(date(1), date(10)).unwrap();

    let payload = VisualizationData {
        visualization: Visualization::Combined,
        panels: render_visualization(&datasets, &range, Visualization::Combined).unwrap(),
    };

    let json = serde_json::to_string(&payload).unwrap();
    assert!(json.contains("\"visualization\":\"combined\""));
    let back: VisualizationData = serde_json::from_str(&json).unwrap();
    assert_eq!(back.panels.len(), payload.panels.len());
}
