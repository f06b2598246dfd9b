//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::InvalidDateRange;
use crate::services::AnalysisError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Reversed date range from the pickers; user-correctable, reported
    /// in place without rendering anything.
    InvalidDateRange(InvalidDateRange),
    /// A computation failed for the requested mode; other modes stay
    /// selectable.
    Analysis(AnalysisError),
    /// Internal server error
    Internal(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::InvalidDateRange(e) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("INVALID_DATE_RANGE", e.to_string()),
            ),
            AppError::Analysis(e) => {
                let code = match e {
                    AnalysisError::NoData => "NO_DATA",
                    AnalysisError::InvalidResponseValue { .. } => "INVALID_RESPONSE_VALUE",
                    AnalysisError::UnderdeterminedModel { .. } => "UNDERDETERMINED_MODEL",
                };
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    ApiError::new(code, e.to_string()),
                )
            }
            AppError::Internal(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ApiError::new("INTERNAL_ERROR", msg),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<InvalidDateRange> for AppError {
    fn from(err: InvalidDateRange) -> Self {
        AppError::InvalidDateRange(err)
    }
}

impl From<AnalysisError> for AppError {
    fn from(err: AnalysisError) -> Self {
        AppError::Analysis(err)
    }
}
