//! Dataset source configuration.
//!
//! Sources are plain HTTPS locations of the two cleaned CSV exports. They
//! can be overridden through environment variables; the defaults point at
//! the published Capital Bikeshare files the dashboard was built around.

use std::env;

/// Default location of the daily dataset.
pub const DEFAULT_DAY_URL: &str = "https://raw.githubusercontent.com/rizalpangestu1/belajar-analisis-data-python-rizal-dicoding/refs/heads/main/day_df_cleaned.csv";

/// Default location of the hourly dataset.
pub const DEFAULT_HOUR_URL: &str = "https://raw.githubusercontent.com/rizalpangestu1/belajar-analisis-data-python-rizal-dicoding/refs/heads/main/hour_df_cleaned.csv";

/// Locations of the two source tables.
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// URL of the daily CSV.
    pub day_url: String,
    /// URL of the hourly CSV.
    pub hour_url: String,
}

impl SourceConfig {
    /// Read the configuration from `DAY_DATASET_URL` / `HOUR_DATASET_URL`,
    /// falling back to the published defaults.
    pub fn from_env() -> Self {
        Self {
            day_url: env::var("DAY_DATASET_URL").unwrap_or_else(|_| DEFAULT_DAY_URL.to_string()),
            hour_url: env::var("HOUR_DATASET_URL").unwrap_or_else(|_| DEFAULT_HOUR_URL.to_string()),
        }
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            day_url: DEFAULT_DAY_URL.to_string(),
            hour_url: DEFAULT_HOUR_URL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_published_files() {
        let config = SourceConfig::default();
        assert!(config.day_url.ends_with("day_df_cleaned.csv"));
        assert!(config.hour_url.ends_with("hour_df_cleaned.csv"));
    }
}
