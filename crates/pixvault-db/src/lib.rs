//! Pixvault Database Layer
//!
//! Repository traits the services depend on, their sqlx/Postgres
//! implementations, and in-memory mocks for DB-free testing.

pub mod db;
pub mod test_helpers;
pub mod traits;

// Re-exports: repository traits
pub use traits::{AssetRepository, LinkRepository, SpecRepository, TierRepository};

// Re-exports: Postgres implementations and helpers
pub use db::{
    run_migrations, PgAssetRepository, PgLinkRepository, PgSpecRepository, PgTierRepository,
};

// Re-exports: transaction utilities
pub use db::transaction::TransactionGuard;
