//! Tier-filtered asset listing.

use std::sync::Arc;

use chrono::Utc;

use pixvault_core::models::{ImageAsset, User};
use pixvault_core::AppError;
use pixvault_db::{AssetRepository, LinkRepository};

use crate::access::AccessPolicy;

/// One page of visible assets plus the total match count.
#[derive(Debug, Clone)]
pub struct Page {
    pub items: Vec<ImageAsset>,
    pub total: i64,
    pub limit: i64,
    pub offset: i64,
}

pub struct LibraryService {
    assets: Arc<dyn AssetRepository>,
    links: Arc<dyn LinkRepository>,
    policy: AccessPolicy,
}

impl LibraryService {
    pub fn new(
        assets: Arc<dyn AssetRepository>,
        links: Arc<dyn LinkRepository>,
        policy: AccessPolicy,
    ) -> Self {
        Self {
            assets,
            links,
            policy,
        }
    }

    /// The user's own assets whose spec is in their tier's allow-set, newest
    /// first. A user without a tier is rejected with `NoTierAssigned`, never
    /// given a silently empty page.
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn list_visible(
        &self,
        user: &User,
        limit: i64,
        offset: i64,
    ) -> Result<Page, AppError> {
        let tier = self.policy.require_tier(user).await?;

        let items = self
            .assets
            .list_visible(user.id, &tier.allowed_spec_ids, limit, offset)
            .await?;
        let total = self
            .assets
            .count_visible(user.id, &tier.allowed_spec_ids)
            .await?;

        Ok(Page {
            items,
            total,
            limit,
            offset,
        })
    }

    /// Dashboard counters: visible assets and currently live links.
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn dashboard_counts(&self, user: &User) -> Result<(i64, i64), AppError> {
        let tier = self.policy.require_tier(user).await?;
        let assets = self
            .assets
            .count_visible(user.id, &tier.allowed_spec_ids)
            .await?;
        let live_links = self.links.count_live(user.id, Utc::now()).await?;
        Ok((assets, live_links))
    }
}
