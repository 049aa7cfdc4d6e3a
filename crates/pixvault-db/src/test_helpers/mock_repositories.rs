//! Mock repository implementations for testing
//!
//! These mocks let the services be tested without a database. Writes and
//! deletes go through the same trait contracts as the Postgres
//! implementations, including the rows-affected semantics the lazy GC and
//! sweeper rely on.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use pixvault_core::models::{
    AccountTier, ExpiringLink, ImageAsset, NewExpiringLink, NewImageAsset, SizeCatalog,
    ThumbnailSpec,
};
use pixvault_core::AppError;

use crate::traits::{AssetRepository, LinkRepository, SpecRepository, TierRepository};

/// Mock spec catalog backed by a plain vector.
#[derive(Clone, Default)]
pub struct MockSpecRepository {
    specs: Arc<Mutex<Vec<ThumbnailSpec>>>,
}

impl MockSpecRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_spec(&self, spec: ThumbnailSpec) {
        self.specs.lock().unwrap().push(spec);
    }
}

#[async_trait]
impl SpecRepository for MockSpecRepository {
    async fn load_catalog(&self) -> Result<SizeCatalog, AppError> {
        Ok(SizeCatalog::new(self.specs.lock().unwrap().clone()))
    }
}

/// Mock tier store.
#[derive(Clone, Default)]
pub struct MockTierRepository {
    tiers: Arc<Mutex<HashMap<Uuid, AccountTier>>>,
}

impl MockTierRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_tier(&self, tier: AccountTier) {
        self.tiers.lock().unwrap().insert(tier.id, tier);
    }
}

#[async_trait]
impl TierRepository for MockTierRepository {
    async fn get_tier(&self, tier_id: Uuid) -> Result<Option<AccountTier>, AppError> {
        Ok(self.tiers.lock().unwrap().get(&tier_id).cloned())
    }
}

/// Mock asset store. `fail_next_create` makes `create_family` fail without
/// writing anything, mirroring the all-or-nothing transaction of the Pg
/// implementation.
#[derive(Clone, Default)]
pub struct MockAssetRepository {
    assets: Arc<Mutex<HashMap<Uuid, ImageAsset>>>,
    fail_next_create: Arc<AtomicBool>,
}

impl MockAssetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_next_create(&self) {
        self.fail_next_create.store(true, Ordering::SeqCst);
    }

    pub fn asset_count(&self) -> usize {
        self.assets.lock().unwrap().len()
    }
}

#[async_trait]
impl AssetRepository for MockAssetRepository {
    async fn create_family(&self, assets: Vec<NewImageAsset>) -> Result<Vec<ImageAsset>, AppError> {
        if self.fail_next_create.swap(false, Ordering::SeqCst) {
            return Err(AppError::Internal("simulated storage failure".to_string()));
        }

        let now = Utc::now();
        let mut store = self.assets.lock().unwrap();
        let mut created = Vec::with_capacity(assets.len());
        for asset in assets {
            let row = ImageAsset {
                id: Uuid::new_v4(),
                owner_id: asset.owner_id,
                spec_id: asset.spec_id,
                title: asset.title,
                payload: asset.payload,
                content_type: asset.content_type,
                width_px: asset.width_px,
                height_px: asset.height_px,
                created_at: now,
            };
            store.insert(row.id, row.clone());
            created.push(row);
        }
        Ok(created)
    }

    async fn get_owned(
        &self,
        owner_id: Uuid,
        asset_id: Uuid,
    ) -> Result<Option<ImageAsset>, AppError> {
        Ok(self
            .assets
            .lock()
            .unwrap()
            .get(&asset_id)
            .filter(|a| a.owner_id == owner_id)
            .cloned())
    }

    async fn list_visible(
        &self,
        owner_id: Uuid,
        allowed_spec_ids: &[Uuid],
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ImageAsset>, AppError> {
        let mut visible: Vec<ImageAsset> = self
            .assets
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.owner_id == owner_id && allowed_spec_ids.contains(&a.spec_id))
            .cloned()
            .collect();
        visible.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(visible
            .into_iter()
            .skip(offset as usize)
            .take(limit as usize)
            .collect())
    }

    async fn count_visible(
        &self,
        owner_id: Uuid,
        allowed_spec_ids: &[Uuid],
    ) -> Result<i64, AppError> {
        Ok(self
            .assets
            .lock()
            .unwrap()
            .values()
            .filter(|a| a.owner_id == owner_id && allowed_spec_ids.contains(&a.spec_id))
            .count() as i64)
    }
}

/// Mock link store.
#[derive(Clone, Default)]
pub struct MockLinkRepository {
    links: Arc<Mutex<HashMap<Uuid, ExpiringLink>>>,
}

impl MockLinkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a pre-built row directly, bypassing the service. Tests use this
    /// to plant already-expired links instead of waiting on a clock.
    pub fn add_link(&self, link: ExpiringLink) {
        self.links.lock().unwrap().insert(link.id, link);
    }

    pub fn link_count(&self) -> usize {
        self.links.lock().unwrap().len()
    }
}

#[async_trait]
impl LinkRepository for MockLinkRepository {
    async fn insert(&self, link: NewExpiringLink) -> Result<ExpiringLink, AppError> {
        let row = ExpiringLink {
            id: Uuid::new_v4(),
            owner_id: link.owner_id,
            asset_id: link.asset_id,
            title: link.title,
            width_px: link.width_px,
            height_px: link.height_px,
            token: link.token,
            encoded_payload: link.encoded_payload,
            content_type: link.content_type,
            requested_lifetime_secs: link.requested_lifetime_secs,
            created_at: link.created_at,
            expires_at: link.expires_at,
            public_url: link.public_url,
        };
        self.links.lock().unwrap().insert(row.id, row.clone());
        Ok(row)
    }

    async fn get_by_token(&self, token: Uuid) -> Result<Option<ExpiringLink>, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .values()
            .find(|l| l.token == token)
            .cloned())
    }

    async fn find_by_asset(&self, asset_id: Uuid) -> Result<Option<ExpiringLink>, AppError> {
        let store = self.links.lock().unwrap();
        let mut candidates: Vec<&ExpiringLink> =
            store.values().filter(|l| l.asset_id == asset_id).collect();
        candidates.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(candidates.first().map(|l| (*l).clone()))
    }

    async fn delete_by_id(&self, link_id: Uuid) -> Result<bool, AppError> {
        Ok(self.links.lock().unwrap().remove(&link_id).is_some())
    }

    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError> {
        let mut store = self.links.lock().unwrap();
        let before = store.len();
        store.retain(|_, l| l.expires_at >= now);
        Ok((before - store.len()) as u64)
    }

    async fn count_live(&self, owner_id: Uuid, now: DateTime<Utc>) -> Result<i64, AppError> {
        Ok(self
            .links
            .lock()
            .unwrap()
            .values()
            .filter(|l| l.owner_id == owner_id && l.expires_at > now)
            .count() as i64)
    }
}
