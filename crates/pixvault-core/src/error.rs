//! Error types module
//!
//! All failures the core can report are unified under the `AppError` enum.
//! Link-lifecycle outcomes (`Expired`, `NotFound` on resolve) are deliberately
//! NOT part of this enum: they are expected results of the link state machine
//! and are modeled as variants of `LinkResolution` in the services crate.

use sqlx::Error as SqlxError;
use uuid::Uuid;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for authorization and configuration problems
    Warn,
    /// Error level - for unexpected failures
    Error,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// No `is_original` spec exists in the size catalog. Upload cannot
    /// proceed; an administrator has to fix the catalog.
    #[error("size catalog has no original spec configured")]
    NotConfigured,

    #[error("invalid image: {0}")]
    InvalidImage(String),

    #[error("invalid file extension: {extension} (allowed: png, jpg, jpeg)")]
    InvalidExtension { extension: String },

    #[error("invalid link lifetime: {requested}s (allowed: {min}..={max}s)")]
    InvalidLifetime { requested: i64, min: i64, max: i64 },

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("user has no account tier assigned")]
    NoTierAssigned,

    #[error("image asset not found: {0}")]
    AssetNotFound(Uuid),

    #[error("database error: {0}")]
    Database(#[source] SqlxError),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Machine-readable code used in structured logs.
    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotConfigured => "NOT_CONFIGURED",
            AppError::InvalidImage(_) => "INVALID_IMAGE",
            AppError::InvalidExtension { .. } => "INVALID_EXTENSION",
            AppError::InvalidLifetime { .. } => "INVALID_LIFETIME",
            AppError::PermissionDenied(_) => "PERMISSION_DENIED",
            AppError::NoTierAssigned => "NO_TIER_ASSIGNED",
            AppError::AssetNotFound(_) => "ASSET_NOT_FOUND",
            AppError::Database(_) => "DATABASE_ERROR",
            AppError::Internal(_) => "INTERNAL_ERROR",
        }
    }

    pub fn log_level(&self) -> LogLevel {
        match self {
            AppError::InvalidImage(_)
            | AppError::InvalidExtension { .. }
            | AppError::InvalidLifetime { .. }
            | AppError::AssetNotFound(_) => LogLevel::Debug,
            AppError::NotConfigured
            | AppError::PermissionDenied(_)
            | AppError::NoTierAssigned => LogLevel::Warn,
            AppError::Database(_) | AppError::Internal(_) => LogLevel::Error,
        }
    }
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::Internal(err.to_string())
    }
}
