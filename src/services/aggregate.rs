//! Hour-of-day aggregation of the hourly table.

use crate::api::{HourlyDistributionData, HourlySeries};
use crate::models::HourlyRecord;

/// Per-hour sums of the three rental metrics. The domain is always the
/// full 0-23 range: hours with no rows contribute zero rather than being
/// dropped.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct HourlyAggregate {
    pub total: [u64; 24],
    pub casual: [u64; 24],
    pub registered: [u64; 24],
}

/// Sum cnt/casual/registered per hour-of-day bucket over the given rows.
///
/// Deterministic and pure; recomputed on every invocation, never cached.
pub fn aggregate_by_hour(rows: &[HourlyRecord]) -> HourlyAggregate {
    let mut aggregate = HourlyAggregate::default();
    for row in rows {
        let hour = usize::from(row.hr);
        if hour >= 24 {
            // malformed row, hr outside 0-23
            continue;
        }
        aggregate.total[hour] += u64::from(row.cnt);
        aggregate.casual[hour] += u64::from(row.casual);
        aggregate.registered[hour] += u64::from(row.registered);
    }
    aggregate
}

impl HourlyAggregate {
    /// Expand into the three 24-bar chart series.
    pub fn to_distribution(&self) -> HourlyDistributionData {
        HourlyDistributionData {
            total: HourlySeries::new("cnt", &self.total),
            casual: HourlySeries::new("casual", &self.casual),
            registered: HourlySeries::new("registered", &self.registered),
        }
    }
}
