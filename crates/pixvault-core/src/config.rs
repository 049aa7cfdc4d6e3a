//! Configuration module
//!
//! Environment-driven configuration for the services and the sweeper.
//! All knobs have defaults so an empty environment still yields a usable
//! configuration for tests and local runs.

use std::env;

const DEFAULT_LINK_MIN_LIFETIME_SECS: i64 = 300;
const DEFAULT_LINK_MAX_LIFETIME_SECS: i64 = 30_000;
const DEFAULT_JPEG_QUALITY: u8 = 90;
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 86_400;
const DEFAULT_MAX_FILE_SIZE_MB: usize = 25;
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 20;
const DEFAULT_DB_TIMEOUT_SECS: u64 = 30;

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_timeout_seconds: u64,
    /// Base address expiring-link public URLs are composed from.
    pub public_base_url: String,
    /// Interval between sweeper runs.
    pub sweep_interval_secs: u64,
    /// Allowed range for a requested link lifetime.
    pub link_min_lifetime_secs: i64,
    pub link_max_lifetime_secs: i64,
    /// Quality used when re-encoding JPEG thumbnails.
    pub jpeg_quality: u8,
    pub max_file_size_bytes: usize,
    pub environment: String,
}

impl Config {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        // Load .env if present; ignore absence.
        dotenvy::dotenv().ok();

        let environment = env::var("ENVIRONMENT")
            .or_else(|_| env::var("APP_ENV"))
            .unwrap_or_else(|_| "development".to_string());

        let max_file_size_mb = env::var("MAX_FILE_SIZE_MB")
            .ok()
            .and_then(|v| v.parse::<usize>().ok())
            .unwrap_or(DEFAULT_MAX_FILE_SIZE_MB);

        Ok(Config {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "postgres://localhost/pixvault".to_string()),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            db_timeout_seconds: env::var("DB_TIMEOUT_SECONDS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_DB_TIMEOUT_SECS),
            public_base_url: env::var("PUBLIC_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:8080".to_string()),
            sweep_interval_secs: env::var("SWEEP_INTERVAL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECS),
            link_min_lifetime_secs: env::var("LINK_MIN_LIFETIME_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LINK_MIN_LIFETIME_SECS),
            link_max_lifetime_secs: env::var("LINK_MAX_LIFETIME_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LINK_MAX_LIFETIME_SECS),
            jpeg_quality: env::var("JPEG_QUALITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_JPEG_QUALITY),
            max_file_size_bytes: max_file_size_mb * 1024 * 1024,
            environment,
        })
    }

    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: "postgres://localhost/pixvault".to_string(),
            db_max_connections: DEFAULT_DB_MAX_CONNECTIONS,
            db_timeout_seconds: DEFAULT_DB_TIMEOUT_SECS,
            public_base_url: "http://localhost:8080".to_string(),
            sweep_interval_secs: DEFAULT_SWEEP_INTERVAL_SECS,
            link_min_lifetime_secs: DEFAULT_LINK_MIN_LIFETIME_SECS,
            link_max_lifetime_secs: DEFAULT_LINK_MAX_LIFETIME_SECS,
            jpeg_quality: DEFAULT_JPEG_QUALITY,
            max_file_size_bytes: DEFAULT_MAX_FILE_SIZE_MB * 1024 * 1024,
            environment: "development".to_string(),
        }
    }
}
