//! Date-range filtering of the base tables.

use crate::models::{DateRange, Dated};

/// Rows whose date lies within `range`, bounds included.
///
/// Pure projection: row order is preserved, no row is duplicated, and the
/// input is untouched. Applies identically to the daily and hourly tables
/// through the [`Dated`] seam. The `start <= end` precondition is carried
/// by [`DateRange`] itself, so no validation happens here.
pub fn filter_by_range<R: Dated + Copy>(rows: &[R], range: &DateRange) -> Vec<R> {
    rows.iter()
        .copied()
        .filter(|row| range.contains(row.date()))
        .collect()
}
