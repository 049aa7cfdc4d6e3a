use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One stored image variant (the original or a derived thumbnail) belonging
/// to a user.
///
/// A successful upload creates a complete family: one original row plus one
/// row per configured thumbnail height, committed atomically.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ImageAsset {
    pub id: Uuid,
    pub owner_id: Uuid,
    pub spec_id: Uuid,
    pub title: String,
    #[serde(skip_serializing)]
    pub payload: Vec<u8>,
    pub content_type: String,
    pub width_px: i32,
    pub height_px: i32,
    pub created_at: DateTime<Utc>,
}

/// A not-yet-persisted asset row, produced by the upload pipeline.
#[derive(Debug, Clone)]
pub struct NewImageAsset {
    pub owner_id: Uuid,
    pub spec_id: Uuid,
    pub title: String,
    pub payload: Vec<u8>,
    pub content_type: String,
    pub width_px: i32,
    pub height_px: i32,
}
