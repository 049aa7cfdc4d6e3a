use async_trait::async_trait;
use sqlx::{PgPool, Postgres};
use uuid::Uuid;

use pixvault_core::models::AccountTier;
use pixvault_core::AppError;

use crate::traits::TierRepository;

#[derive(Clone)]
pub struct PgTierRepository {
    pool: PgPool,
}

impl PgTierRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TierRepository for PgTierRepository {
    #[tracing::instrument(skip(self))]
    async fn get_tier(&self, tier_id: Uuid) -> Result<Option<AccountTier>, AppError> {
        let tier: Option<AccountTier> = sqlx::query_as::<Postgres, AccountTier>(
            r#"
            SELECT
                t.id,
                t.title,
                t.can_create_expiring_link,
                COALESCE(
                    array_agg(a.spec_id) FILTER (WHERE a.spec_id IS NOT NULL),
                    '{}'
                ) AS allowed_spec_ids
            FROM account_tiers t
            LEFT JOIN account_tier_allowed_specs a ON a.tier_id = t.id
            WHERE t.id = $1
            GROUP BY t.id, t.title, t.can_create_expiring_link
            "#,
        )
        .bind(tier_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(tier)
    }
}
