//! Domain records for the two bike-sharing tables.
//!
//! Field names follow the CSV headers of the cleaned Capital Bikeshare
//! exports (`day_df_cleaned.csv` / `hour_df_cleaned.csv`), except `dteday`
//! which is exposed as `date`. Unknown CSV columns are ignored during
//! deserialization.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the daily dataset: rentals aggregated per calendar date,
/// with weather and season covariates.
///
/// `cnt = casual + registered` is a guarantee of the data source, not
/// something this crate enforces.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyRecord {
    /// Calendar date (CSV column `dteday`, ISO-8601).
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    /// Season category, 1-4.
    pub season: u8,
    /// Year indicator (0 = 2011, 1 = 2012).
    pub yr: u8,
    /// Month, 1-12.
    pub mnth: u8,
    /// Holiday flag, 0/1.
    pub holiday: u8,
    /// Day of week, 0-6.
    pub weekday: u8,
    /// Working-day flag, 0/1.
    pub workingday: u8,
    /// Ordinal weather severity, 1 (clear) to 4 (severe).
    pub weathersit: u8,
    /// Normalized temperature in [0, 1].
    pub temp: f64,
    /// Normalized feeling temperature in [0, 1].
    pub atemp: f64,
    /// Normalized humidity in [0, 1].
    pub hum: f64,
    /// Normalized wind speed in [0, 1].
    pub windspeed: f64,
    /// Rentals by unregistered users.
    pub casual: u32,
    /// Rentals by registered members.
    pub registered: u32,
    /// Total rentals.
    pub cnt: u32,
}

/// One row of the hourly dataset: one record per (date, hour-of-day) pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HourlyRecord {
    /// Calendar date (CSV column `dteday`, ISO-8601).
    #[serde(rename = "dteday")]
    pub date: NaiveDate,
    /// Season category, 1-4.
    pub season: u8,
    /// Year indicator (0 = 2011, 1 = 2012).
    pub yr: u8,
    /// Month, 1-12.
    pub mnth: u8,
    /// Hour of day, 0-23.
    pub hr: u8,
    /// Holiday flag, 0/1.
    pub holiday: u8,
    /// Day of week, 0-6.
    pub weekday: u8,
    /// Working-day flag, 0/1.
    pub workingday: u8,
    /// Ordinal weather severity, 1 (clear) to 4 (severe).
    pub weathersit: u8,
    /// Normalized temperature in [0, 1].
    pub temp: f64,
    /// Normalized feeling temperature in [0, 1].
    pub atemp: f64,
    /// Normalized humidity in [0, 1].
    pub hum: f64,
    /// Normalized wind speed in [0, 1].
    pub windspeed: f64,
    /// Rentals by unregistered users.
    pub casual: u32,
    /// Rentals by registered members.
    pub registered: u32,
    /// Total rentals.
    pub cnt: u32,
}

impl DailyRecord {
    /// Whether this date is a working day.
    pub fn is_working_day(&self) -> bool {
        self.workingday != 0
    }
}

/// Access to the calendar date of a record. Seam for the generic range
/// filter, which applies identically to both tables.
pub trait Dated {
    fn date(&self) -> NaiveDate;
}

impl Dated for DailyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for HourlyRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

/// Access to the per-record rental counters. Seam for summary statistics
/// and user-type breakdowns over either table.
pub trait RentalCounts {
    fn casual(&self) -> u32;
    fn registered(&self) -> u32;
    fn cnt(&self) -> u32;
}

impl RentalCounts for DailyRecord {
    fn casual(&self) -> u32 {
        self.casual
    }

    fn registered(&self) -> u32 {
        self.registered
    }

    fn cnt(&self) -> u32 {
        self.cnt
    }
}

impl RentalCounts for HourlyRecord {
    fn casual(&self) -> u32 {
        self.casual
    }

    fn registered(&self) -> u32 {
        self.registered
    }

    fn cnt(&self) -> u32 {
        self.cnt
    }
}
