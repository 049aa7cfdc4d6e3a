use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use pixvault_core::models::{ExpiringLink, NewExpiringLink};
use pixvault_core::AppError;

use crate::traits::LinkRepository;

const LINK_COLUMNS: &str = "id, owner_id, asset_id, title, width_px, height_px, token, \
     encoded_payload, content_type, requested_lifetime_secs, created_at, expires_at, public_url";

#[derive(Clone)]
pub struct PgLinkRepository {
    pool: PgPool,
}

impl PgLinkRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl LinkRepository for PgLinkRepository {
    #[tracing::instrument(skip(self, link), fields(asset_id = %link.asset_id))]
    async fn insert(&self, link: NewExpiringLink) -> Result<ExpiringLink, AppError> {
        let row: ExpiringLink = sqlx::query_as::<Postgres, ExpiringLink>(&format!(
            r#"
            INSERT INTO expiring_links
                (owner_id, asset_id, title, width_px, height_px, token,
                 encoded_payload, content_type, requested_lifetime_secs,
                 created_at, expires_at, public_url)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
            RETURNING {LINK_COLUMNS}
            "#
        ))
        .bind(link.owner_id)
        .bind(link.asset_id)
        .bind(link.title)
        .bind(link.width_px)
        .bind(link.height_px)
        .bind(link.token)
        .bind(link.encoded_payload)
        .bind(link.content_type)
        .bind(link.requested_lifetime_secs)
        .bind(link.created_at)
        .bind(link.expires_at)
        .bind(link.public_url)
        .fetch_one(&self.pool)
        .await?;

        tracing::info!(link_id = %row.id, expires_at = %row.expires_at, "Expiring link created");
        Ok(row)
    }

    #[tracing::instrument(skip(self))]
    async fn get_by_token(&self, token: Uuid) -> Result<Option<ExpiringLink>, AppError> {
        let link: Option<ExpiringLink> = sqlx::query_as::<Postgres, ExpiringLink>(&format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM expiring_links
            WHERE token = $1
            "#
        ))
        .bind(token)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }

    #[tracing::instrument(skip(self))]
    async fn find_by_asset(&self, asset_id: Uuid) -> Result<Option<ExpiringLink>, AppError> {
        let link: Option<ExpiringLink> = sqlx::query_as::<Postgres, ExpiringLink>(&format!(
            r#"
            SELECT {LINK_COLUMNS}
            FROM expiring_links
            WHERE asset_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#
        ))
        .bind(asset_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(link)
    }

    /// Compare-and-delete: reports whether a row was removed, so the lazy GC
    /// and the sweeper can both attempt the same delete without error.
    #[tracing::instrument(skip(self))]
    async fn delete_by_id(&self, link_id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM expiring_links WHERE id = $1")
            .bind(link_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    #[tracing::instrument(skip(self))]
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM expiring_links WHERE expires_at < $1")
            .bind(now)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    #[tracing::instrument(skip(self))]
    async fn count_live(&self, owner_id: Uuid, now: DateTime<Utc>) -> Result<i64, AppError> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM expiring_links
            WHERE owner_id = $1 AND expires_at > $2
            "#,
        )
        .bind(owner_id)
        .bind(now)
        .fetch_one(&self.pool)
        .await?;

        Ok(count.0)
    }
}
