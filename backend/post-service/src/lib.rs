/// Post Service Library
///
/// Serves the home greeting and the read-only posts listing.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers (home, posts)
/// - `models`: Persisted entities
/// - `services`: Business logic layer
/// - `db`: Repository trait and PostgreSQL implementation
/// - `middleware`: Request metrics middleware
/// - `error`: Error types and handling
/// - `config`: Configuration management
/// - `metrics`: Prometheus collectors and the `/metrics` handler
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
