//! Inclusive calendar date range with boundary validation.

use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

/// Raised when a requested range has its end before its start.
///
/// This is a user-correctable input error, caught at the boundary next to
/// the date pickers; nothing downstream ever sees a reversed range.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid date range: start {start} is after end {end}")]
pub struct InvalidDateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// An inclusive `[start, end]` range of calendar dates.
///
/// The `start <= end` invariant holds for every constructed value, so
/// only [`DateRange::new`] can build one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Build a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, InvalidDateRange> {
        if start > end {
            return Err(InvalidDateRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` lies within the range, bounds included.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}
