//! Expiring-link lifecycle: creation, resolution, lazy GC.

use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;
use chrono::{Duration, Utc};
use uuid::Uuid;

use pixvault_core::models::{ExpiringLink, NewExpiringLink, User};
use pixvault_core::validation::validate_lifetime;
use pixvault_core::AppError;
use pixvault_db::{AssetRepository, LinkRepository};

use crate::access::AccessPolicy;

/// Outcome of resolving a token. `Expired` and `NotFound` are expected
/// results of the link state machine, not errors.
#[derive(Debug)]
pub enum LinkResolution {
    Live(ResolvedImage),
    Expired,
    NotFound,
}

/// The decoded payload behind a live link.
#[derive(Debug, Clone)]
pub struct ResolvedImage {
    pub bytes: Vec<u8>,
    pub content_type: String,
    pub width_px: i32,
    pub height_px: i32,
}

pub struct ExpiringLinkService {
    assets: Arc<dyn AssetRepository>,
    links: Arc<dyn LinkRepository>,
    policy: AccessPolicy,
    public_base_url: String,
    min_lifetime_secs: i64,
    max_lifetime_secs: i64,
}

impl ExpiringLinkService {
    pub fn new(
        assets: Arc<dyn AssetRepository>,
        links: Arc<dyn LinkRepository>,
        policy: AccessPolicy,
        public_base_url: String,
        min_lifetime_secs: i64,
        max_lifetime_secs: i64,
    ) -> Self {
        Self {
            assets,
            links,
            policy,
            public_base_url,
            min_lifetime_secs,
            max_lifetime_secs,
        }
    }

    fn public_url(&self, token: Uuid) -> String {
        format!("{}/links/{token}", self.public_base_url.trim_end_matches('/'))
    }

    /// Mint a time-boxed shareable link for one of the user's assets.
    ///
    /// The payload is copied into the link row at creation time, so the link
    /// outlives later mutation or deletion of the source asset. At most one
    /// live link exists per asset: an existing live link is returned instead
    /// of minting a duplicate, and a stale one is deleted first.
    #[tracing::instrument(skip(self, user), fields(user_id = %user.id))]
    pub async fn create_link(
        &self,
        user: &User,
        asset_id: Uuid,
        lifetime_secs: i64,
    ) -> Result<ExpiringLink, AppError> {
        let tier = self.policy.require_tier(user).await?;
        if !AccessPolicy::can_create_expiring_link(&tier) {
            return Err(AppError::PermissionDenied(format!(
                "tier '{}' cannot create expiring links",
                tier.title
            )));
        }

        validate_lifetime(lifetime_secs, self.min_lifetime_secs, self.max_lifetime_secs)?;

        let asset = self
            .assets
            .get_owned(user.id, asset_id)
            .await?
            .ok_or(AppError::AssetNotFound(asset_id))?;

        if let Some(existing) = self.links.find_by_asset(asset_id).await? {
            if !existing.is_expired(Utc::now()) {
                tracing::debug!(link_id = %existing.id, "Returning existing live link");
                return Ok(existing);
            }
            // Stale leftover; remove it first. The delete may lose a race
            // against the sweeper, which is fine.
            self.links.delete_by_id(existing.id).await?;
        }

        let token = Uuid::new_v4();
        let created_at = Utc::now();
        let link = NewExpiringLink {
            owner_id: user.id,
            asset_id,
            title: asset.title.clone(),
            width_px: asset.width_px,
            height_px: asset.height_px,
            token,
            encoded_payload: BASE64.encode(&asset.payload),
            content_type: asset.content_type.clone(),
            requested_lifetime_secs: lifetime_secs,
            created_at,
            expires_at: created_at + Duration::seconds(lifetime_secs),
            public_url: self.public_url(token),
        };

        self.links.insert(link).await
    }

    /// Resolve a token against the link state machine.
    ///
    /// An expired record is deleted as a side effect of the read, before
    /// responding: a repeated resolve of the same token can therefore never
    /// come back `Live` again. Racing the sweeper on the delete is safe
    /// because deleting an already-deleted row is a no-op.
    #[tracing::instrument(skip(self))]
    pub async fn resolve_link(&self, token: Uuid) -> Result<LinkResolution, AppError> {
        let Some(link) = self.links.get_by_token(token).await? else {
            return Ok(LinkResolution::NotFound);
        };

        if link.is_expired(Utc::now()) {
            let deleted = self.links.delete_by_id(link.id).await?;
            tracing::info!(link_id = %link.id, deleted, "Expired link reaped on resolve");
            return Ok(LinkResolution::Expired);
        }

        let bytes = BASE64
            .decode(link.encoded_payload.as_bytes())
            .map_err(|e| AppError::Internal(format!("stored link payload is corrupt: {e}")))?;

        Ok(LinkResolution::Live(ResolvedImage {
            bytes,
            content_type: link.content_type,
            width_px: link.width_px,
            height_px: link.height_px,
        }))
    }
}
