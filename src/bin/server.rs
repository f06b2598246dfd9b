//! Bike-sharing dashboard HTTP server binary.
//!
//! This is the main entry point for the dashboard REST API server. It
//! fetches the two source tables, builds the HTTP router, and starts
//! serving requests. A failed dataset load is fatal: the process exits
//! with the error instead of serving an empty dashboard.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin bikedash-server
//! ```
//!
//! # Environment Variables
//!
//! - `HOST`: Server host (default: 0.0.0.0)
//! - `PORT`: Server port (default: 8080)
//! - `DAY_DATASET_URL` / `HOUR_DATASET_URL`: CSV source overrides
//! - `RUST_LOG`: Log level (default: info)

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use bikedash::data::{load_datasets, SourceConfig};
use bikedash::http::{create_router, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::INFO),
        )
        .with_target(true)
        .init();

    info!("Starting bike-sharing dashboard server");

    // Single fetch attempt per table; any failure is surfaced here.
    let config = SourceConfig::from_env();
    let datasets = load_datasets(&config).await?;
    if let Some((first, last)) = datasets.date_span() {
        info!(%first, %last, "daily dataset spans");
    }

    // Create application state around the immutable tables
    let state = AppState::new(Arc::new(datasets));

    // Create router with all endpoints
    let app = create_router(state);

    // Determine bind address
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port: u16 = env::var("PORT")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(8080);
    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;

    info!("Server listening on http://{}", addr);

    // Start the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
