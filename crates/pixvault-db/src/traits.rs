//! Repository traits the services are written against.
//!
//! Production wires the Postgres implementations from `db`; tests wire the
//! in-memory mocks from `test_helpers`.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use pixvault_core::models::{
    AccountTier, ExpiringLink, ImageAsset, NewExpiringLink, NewImageAsset, SizeCatalog,
};
use pixvault_core::AppError;

/// Read access to the admin-managed thumbnail-spec catalog.
#[async_trait]
pub trait SpecRepository: Send + Sync {
    /// Load a point-in-time snapshot of the whole catalog.
    async fn load_catalog(&self) -> Result<SizeCatalog, AppError>;
}

/// Read access to account tiers.
#[async_trait]
pub trait TierRepository: Send + Sync {
    async fn get_tier(&self, tier_id: Uuid) -> Result<Option<AccountTier>, AppError>;
}

/// Storage for image assets.
#[async_trait]
pub trait AssetRepository: Send + Sync {
    /// Persist a whole upload family (original plus derived variants)
    /// atomically: either every row is committed or none is.
    async fn create_family(&self, assets: Vec<NewImageAsset>) -> Result<Vec<ImageAsset>, AppError>;

    /// Fetch one asset, scoped to its owner.
    async fn get_owned(
        &self,
        owner_id: Uuid,
        asset_id: Uuid,
    ) -> Result<Option<ImageAsset>, AppError>;

    /// The owner's assets whose spec is in the allow-set, newest first.
    async fn list_visible(
        &self,
        owner_id: Uuid,
        allowed_spec_ids: &[Uuid],
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ImageAsset>, AppError>;

    async fn count_visible(
        &self,
        owner_id: Uuid,
        allowed_spec_ids: &[Uuid],
    ) -> Result<i64, AppError>;
}

/// Storage for expiring links.
///
/// Deletions report whether a row was actually removed, so the resolve-side
/// lazy GC and the sweeper can race without either path erroring.
#[async_trait]
pub trait LinkRepository: Send + Sync {
    async fn insert(&self, link: NewExpiringLink) -> Result<ExpiringLink, AppError>;

    async fn get_by_token(&self, token: Uuid) -> Result<Option<ExpiringLink>, AppError>;

    /// Any existing link for the asset, live or stale.
    async fn find_by_asset(&self, asset_id: Uuid) -> Result<Option<ExpiringLink>, AppError>;

    /// Delete one link; `false` means it was already gone.
    async fn delete_by_id(&self, link_id: Uuid) -> Result<bool, AppError>;

    /// Batch-delete every link past its expiry. Returns the count; zero on an
    /// empty set.
    async fn delete_expired(&self, now: DateTime<Utc>) -> Result<u64, AppError>;

    /// Number of the owner's links still live at `now`.
    async fn count_live(&self, owner_id: Uuid, now: DateTime<Utc>) -> Result<i64, AppError>;
}
