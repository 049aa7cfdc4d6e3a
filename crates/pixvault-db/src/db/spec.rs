use async_trait::async_trait;
use sqlx::{PgPool, Postgres};

use pixvault_core::models::{SizeCatalog, ThumbnailSpec};
use pixvault_core::AppError;

use crate::traits::SpecRepository;

#[derive(Clone)]
pub struct PgSpecRepository {
    pool: PgPool,
}

impl PgSpecRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SpecRepository for PgSpecRepository {
    #[tracing::instrument(skip(self))]
    async fn load_catalog(&self) -> Result<SizeCatalog, AppError> {
        // position is the catalog iteration order the admin created.
        let specs: Vec<ThumbnailSpec> = sqlx::query_as::<Postgres, ThumbnailSpec>(
            r#"
            SELECT id, title, target_height_px, is_original
            FROM thumbnail_specs
            ORDER BY position
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        tracing::debug!(specs = specs.len(), "Loaded size catalog snapshot");
        Ok(SizeCatalog::new(specs))
    }
}
