use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Account tier: controls which asset variants a user may see and whether
/// they may mint expiring links.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct AccountTier {
    pub id: Uuid,
    pub title: String,
    /// Spec ids whose assets are visible to users on this tier.
    pub allowed_spec_ids: Vec<Uuid>,
    pub can_create_expiring_link: bool,
}

impl AccountTier {
    pub fn allows_spec(&self, spec_id: Uuid) -> bool {
        self.allowed_spec_ids.contains(&spec_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allows_spec() {
        let allowed = Uuid::new_v4();
        let tier = AccountTier {
            id: Uuid::new_v4(),
            title: "Basic".to_string(),
            allowed_spec_ids: vec![allowed],
            can_create_expiring_link: false,
        };
        assert!(tier.allows_spec(allowed));
        assert!(!tier.allows_spec(Uuid::new_v4()));
    }
}
