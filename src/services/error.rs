//! Error taxonomy of the analytical core.

use chrono::NaiveDate;
use thiserror::Error;

/// A computation could not produce a defined result for the current
/// inputs. These abort rendering of the requested visualization only;
/// other modes stay selectable and nothing is retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// The filtered dataset is empty, so means are undefined. Reported
    /// explicitly instead of letting NaN reach the fixed 2-decimal
    /// formatting downstream.
    #[error("no data in the selected range: statistics are undefined")]
    NoData,

    /// A daily row carries a rental count that cannot be log-transformed.
    #[error("invalid response value: cnt={cnt} on {date} cannot be log-transformed")]
    InvalidResponseValue { date: NaiveDate, cnt: u32 },

    /// Not enough observations to fit the model with a positive residual
    /// degree of freedom.
    #[error("underdetermined model: {rows} rows for {params} parameters")]
    UnderdeterminedModel { rows: usize, params: usize },
}
