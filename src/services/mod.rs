//! Service layer: the analytical core of the dashboard.
//!
//! Every function here is a pure computation over borrowed slices of the
//! immutable base tables. Nothing is cached and nothing is mutated in
//! place; each render cycle rebuilds what it needs and discards it.

pub mod aggregate;

pub mod dashboard;

pub mod error;

pub mod filter;

pub mod regression;

pub mod stats;

pub use aggregate::{aggregate_by_hour, HourlyAggregate};
pub use dashboard::render_visualization;
pub use error::AnalysisError;
pub use filter::filter_by_range;
pub use regression::{fit_model, COVARIATES};
pub use stats::summarize;

#[cfg(test)]
mod dashboard_tests;
