//! One-shot acquisition of the two source tables.
//!
//! Each table is fetched with a single GET and parsed straight from the
//! response body. There is no retry and no caching: a failure here means
//! the dashboard cannot start, and the error is surfaced to the operator
//! rather than recovered from.

use serde::de::DeserializeOwned;
use tracing::info;

use super::config::SourceConfig;
use super::Datasets;
use crate::models::{DailyRecord, HourlyRecord};
use thiserror::Error;

/// A source table could not be fetched or parsed. Fatal at startup.
#[derive(Debug, Error)]
pub enum DataError {
    /// The HTTP fetch failed (connectivity, DNS, non-2xx status).
    #[error("dataset unavailable: failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    /// The body was retrieved but is not a valid CSV table.
    #[error("dataset unavailable: failed to parse {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: csv::Error,
    },
}

/// Parse a CSV byte buffer into typed records. Unknown columns are
/// ignored; a malformed row fails the whole table.
pub fn parse_records<T: DeserializeOwned>(bytes: &[u8]) -> Result<Vec<T>, csv::Error> {
    let mut reader = csv::Reader::from_reader(bytes);
    reader.deserialize().collect()
}

async fn fetch_table<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<T>, DataError> {
    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|source| DataError::Fetch {
            url: url.to_string(),
            source,
        })?;

    let bytes = response.bytes().await.map_err(|source| DataError::Fetch {
        url: url.to_string(),
        source,
    })?;

    parse_records(&bytes).map_err(|source| DataError::Parse {
        url: url.to_string(),
        source,
    })
}

/// Fetch and parse both tables. Single attempt per table.
pub async fn load_datasets(config: &SourceConfig) -> Result<Datasets, DataError> {
    let client = reqwest::Client::new();

    let daily: Vec<DailyRecord> = fetch_table(&client, &config.day_url).await?;
    info!(rows = daily.len(), url = %config.day_url, "loaded daily dataset");

    let hourly: Vec<HourlyRecord> = fetch_table(&client, &config.hour_url).await?;
    info!(rows = hourly.len(), url = %config.hour_url, "loaded hourly dataset");

    Ok(Datasets { daily, hourly })
}
