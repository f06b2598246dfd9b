//! Data Transfer Objects for the HTTP API.
//!
//! These DTOs are used for request/response serialization in the REST
//! API. The visualization payloads themselves are re-exported from the
//! routes module since they already derive Serialize/Deserialize.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{Panel, Visualization, VisualizationData};

/// Query parameters for the visualization endpoint. Both bounds default
/// to the full span of the daily table; the Regression mode ignores them.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default)]
pub struct DateRangeQuery {
    /// Inclusive start date (ISO-8601)
    #[serde(default)]
    pub start: Option<NaiveDate>,
    /// Inclusive end date (ISO-8601)
    #[serde(default)]
    pub end: Option<NaiveDate>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Version of the API
    pub version: String,
}

/// Shape of the loaded datasets, used by the frontend to initialize the
/// date pickers to the full daily span.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetInfoResponse {
    /// Row count of the daily table
    pub daily_rows: usize,
    /// Row count of the hourly table
    pub hourly_rows: usize,
    /// First date of the daily table, if any rows were loaded
    pub first_date: Option<NaiveDate>,
    /// Last date of the daily table, if any rows were loaded
    pub last_date: Option<NaiveDate>,
}
