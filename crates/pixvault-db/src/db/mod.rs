mod asset;
mod link;
mod spec;
mod tier;
pub mod transaction;

pub use asset::PgAssetRepository;
pub use link::PgLinkRepository;
pub use spec::PgSpecRepository;
pub use tier::PgTierRepository;

use sqlx::PgPool;

/// Apply the embedded migrations. Run once at startup before any repository
/// is used.
pub async fn run_migrations(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
