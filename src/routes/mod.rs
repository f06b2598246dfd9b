//! Chart-payload data types, one module per visualization.
//!
//! These are the DTOs the analytical services fill in and the HTTP layer
//! serializes; see [`crate::api`] for the consolidated surface.

pub mod dashboard;
pub mod hourly;
pub mod overview;
pub mod regression;
pub mod timeseries;
pub mod user_types;
