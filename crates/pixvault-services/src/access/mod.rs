//! Account-tier access policy.

use std::sync::Arc;

use pixvault_core::models::{AccountTier, ImageAsset, User};
use pixvault_core::AppError;
use pixvault_db::TierRepository;

/// Visibility and permission checks driven by the user's account tier.
#[derive(Clone)]
pub struct AccessPolicy {
    tiers: Arc<dyn TierRepository>,
}

impl AccessPolicy {
    pub fn new(tiers: Arc<dyn TierRepository>) -> Self {
        Self { tiers }
    }

    /// Resolve the user's tier, rejecting users that were never configured
    /// with one. "No tier" is surfaced as its own signal so the edge layer
    /// can distinguish it from a tier with an empty allow-set.
    pub async fn require_tier(&self, user: &User) -> Result<AccountTier, AppError> {
        let tier_id = user.tier_id.ok_or(AppError::NoTierAssigned)?;
        self.tiers
            .get_tier(tier_id)
            .await?
            .ok_or(AppError::NoTierAssigned)
    }

    /// An asset is visible exactly when its spec is in the tier's allow-set.
    pub fn can_list_asset(tier: &AccountTier, asset: &ImageAsset) -> bool {
        tier.allows_spec(asset.spec_id)
    }

    pub fn can_create_expiring_link(tier: &AccountTier) -> bool {
        tier.can_create_expiring_link
    }
}
