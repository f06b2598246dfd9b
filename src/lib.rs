//! # Bike-Sharing Dashboard Backend
//!
//! Analytical backend for a bike-sharing usage dashboard.
//!
//! This crate loads the daily and hourly Capital Bikeshare tables,
//! filters them by date range, and produces chart-ready payloads for an
//! external frontend: a usage time series, hourly distributions, a
//! user-type breakdown, an OLS regression of log rentals on weather, and
//! summary metrics. The REST API is exposed via Axum.
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Data Transfer Objects (DTOs) for API responses
//! - [`data`]: Dataset acquisition and the immutable base tables
//! - [`models`]: Domain records and the validated date range
//! - [`routes`]: Route-specific data types per visualization
//! - [`services`]: The analytical core (filter, aggregate, stats, OLS,
//!   visualization selection)
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Design
//!
//! The base tables are loaded once at startup and shared read-only.
//! Every interaction recomputes the derived series fresh; nothing is
//! cached. Errors from one visualization abort that render only.

pub mod api;

pub mod data;
pub mod models;

pub mod routes;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
