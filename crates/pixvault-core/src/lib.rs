//! Pixvault Core Library
//!
//! This crate provides the domain models, error types, configuration, and
//! validation shared across all Pixvault components.

pub mod config;
pub mod error;
pub mod models;
pub mod telemetry;
pub mod validation;

// Re-export commonly used types
pub use config::Config;
pub use error::AppError;
pub use telemetry::init_tracing;
