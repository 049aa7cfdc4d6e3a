use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A time-boxed, self-contained shareable pointer to one image asset's
/// payload.
///
/// The payload is base64-copied into the row at creation time, so the link
/// keeps working (until expiry) even if the source asset is mutated or
/// deleted afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ExpiringLink {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub asset_id: Uuid,
    pub title: String,
    pub width_px: i32,
    pub height_px: i32,
    /// Opaque unguessable identifier the public URL is keyed by.
    pub token: Uuid,
    /// Base64 copy of the asset payload, taken at creation time.
    #[serde(skip_serializing)]
    pub encoded_payload: String,
    pub content_type: String,
    pub requested_lifetime_secs: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub public_url: String,
}

impl ExpiringLink {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        now >= self.expires_at
    }
}

/// A not-yet-persisted link row.
#[derive(Debug, Clone)]
pub struct NewExpiringLink {
    pub owner_id: Uuid,
    pub asset_id: Uuid,
    pub title: String,
    pub width_px: i32,
    pub height_px: i32,
    pub token: Uuid,
    pub encoded_payload: String,
    pub content_type: String,
    pub requested_lifetime_secs: i64,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
    pub public_url: String,
}
