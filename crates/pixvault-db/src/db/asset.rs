use async_trait::async_trait;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use pixvault_core::models::{ImageAsset, NewImageAsset};
use pixvault_core::AppError;

use crate::db::transaction::TransactionGuard;
use crate::traits::AssetRepository;

const ASSET_COLUMNS: &str =
    "id, owner_id, spec_id, title, payload, content_type, width_px, height_px, created_at";

#[derive(Clone)]
pub struct PgAssetRepository {
    pool: PgPool,
}

impl PgAssetRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AssetRepository for PgAssetRepository {
    /// Insert the whole family in one transaction. Any insert failure rolls
    /// back previously written siblings, so a partial family is never
    /// observable.
    #[tracing::instrument(skip(self, assets), fields(family_size = assets.len()))]
    async fn create_family(&self, assets: Vec<NewImageAsset>) -> Result<Vec<ImageAsset>, AppError> {
        let mut tx = TransactionGuard::begin(&self.pool).await?;

        let mut created = Vec::with_capacity(assets.len());
        for asset in assets {
            let row: ImageAsset = sqlx::query_as::<Postgres, ImageAsset>(&format!(
                r#"
                INSERT INTO image_assets
                    (owner_id, spec_id, title, payload, content_type, width_px, height_px)
                VALUES ($1, $2, $3, $4, $5, $6, $7)
                RETURNING {ASSET_COLUMNS}
                "#
            ))
            .bind(asset.owner_id)
            .bind(asset.spec_id)
            .bind(asset.title)
            .bind(asset.payload)
            .bind(asset.content_type)
            .bind(asset.width_px)
            .bind(asset.height_px)
            .fetch_one(&mut **tx)
            .await?;
            created.push(row);
        }

        tx.commit().await?;

        tracing::info!(created = created.len(), "Asset family committed");
        Ok(created)
    }

    #[tracing::instrument(skip(self))]
    async fn get_owned(
        &self,
        owner_id: Uuid,
        asset_id: Uuid,
    ) -> Result<Option<ImageAsset>, AppError> {
        let asset: Option<ImageAsset> = sqlx::query_as::<Postgres, ImageAsset>(&format!(
            r#"
            SELECT {ASSET_COLUMNS}
            FROM image_assets
            WHERE owner_id = $1 AND id = $2
            "#
        ))
        .bind(owner_id)
        .bind(asset_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(asset)
    }

    #[tracing::instrument(skip(self, allowed_spec_ids))]
    async fn list_visible(
        &self,
        owner_id: Uuid,
        allowed_spec_ids: &[Uuid],
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ImageAsset>, AppError> {
        let assets: Vec<ImageAsset> = sqlx::query_as::<Postgres, ImageAsset>(&format!(
            r#"
            SELECT {ASSET_COLUMNS}
            FROM image_assets
            WHERE owner_id = $1 AND spec_id = ANY($2)
            ORDER BY created_at DESC
            LIMIT $3 OFFSET $4
            "#
        ))
        .bind(owner_id)
        .bind(allowed_spec_ids)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(assets)
    }

    #[tracing::instrument(skip(self, allowed_spec_ids))]
    async fn count_visible(
        &self,
        owner_id: Uuid,
        allowed_spec_ids: &[Uuid],
    ) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM image_assets
            WHERE owner_id = $1 AND spec_id = ANY($2)
            "#,
        )
        .bind(owner_id)
        .bind(allowed_spec_ids)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
