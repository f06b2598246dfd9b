//! Application state for the HTTP server.

use std::sync::Arc;

use crate::data::Datasets;

/// Shared application state passed to all handlers.
///
/// The two base tables are loaded once at startup and shared read-only;
/// handlers borrow them and never mutate.
#[derive(Clone)]
pub struct AppState {
    /// The immutable daily and hourly tables.
    pub datasets: Arc<Datasets>,
}

impl AppState {
    /// Create a new application state around the loaded datasets.
    pub fn new(datasets: Arc<Datasets>) -> Self {
        Self { datasets }
    }
}
