//! Summary statistics over a filtered dataset.

use crate::api::UsageSummary;
use crate::models::RentalCounts;

use super::error::AnalysisError;

/// Arithmetic means of cnt/casual/registered over all rows.
///
/// An empty dataset has no defined mean; that is reported as
/// [`AnalysisError::NoData`] so the caller never formats a NaN.
pub fn summarize<R: RentalCounts>(rows: &[R]) -> Result<UsageSummary, AnalysisError> {
    if rows.is_empty() {
        return Err(AnalysisError::NoData);
    }

    let n = rows.len() as f64;
    let cnt: u64 = rows.iter().map(|r| u64::from(r.cnt())).sum();
    let casual: u64 = rows.iter().map(|r| u64::from(r.casual())).sum();
    let registered: u64 = rows.iter().map(|r| u64::from(r.registered())).sum();

    Ok(UsageSummary {
        mean_cnt: cnt as f64 / n,
        mean_casual: casual as f64 / n,
        mean_registered: registered as f64 / n,
    })
}
