use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Minimal account record the core needs: identity plus tier assignment.
/// Authentication lives in the edge layer.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    /// `None` means the account was never configured with a tier; listing
    /// operations reject such users rather than returning an empty set.
    pub tier_id: Option<Uuid>,
}
