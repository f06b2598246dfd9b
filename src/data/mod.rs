//! Data acquisition layer.
//!
//! The dashboard's only persistent inputs are two read-only CSV tables.
//! This module fetches them once at startup, parses them into typed
//! records, and hands the application a single immutable [`Datasets`]
//! value. Every downstream computation borrows from it; nothing in the
//! crate mutates a loaded table.

pub mod config;
pub mod loader;

pub use config::SourceConfig;
pub use loader::{load_datasets, DataError};

use chrono::NaiveDate;

use crate::models::{DailyRecord, HourlyRecord};

/// The two base tables, loaded once per process and shared read-only.
#[derive(Debug, Clone, Default)]
pub struct Datasets {
    /// Daily aggregated rentals.
    pub daily: Vec<DailyRecord>,
    /// Hourly aggregated rentals.
    pub hourly: Vec<HourlyRecord>,
}

impl Datasets {
    /// First and last date of the daily table, if any rows are present.
    /// This span is what the date pickers default to.
    pub fn date_span(&self) -> Option<(NaiveDate, NaiveDate)> {
        let first = self.daily.iter().map(|r| r.date).min()?;
        let last = self.daily.iter().map(|r| r.date).max()?;
        Some((first, last))
    }
}
