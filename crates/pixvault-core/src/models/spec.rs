use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Admin-managed target size an uploaded image is derived to, or the marker
/// for the stored original.
///
/// Invariant: `is_original` specs carry no target height; all others carry a
/// positive one. The admin surface enforces this on write; `is_well_formed`
/// lets the core assert it on read.
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct ThumbnailSpec {
    pub id: Uuid,
    pub title: String,
    pub target_height_px: Option<i32>,
    pub is_original: bool,
}

impl ThumbnailSpec {
    pub fn is_well_formed(&self) -> bool {
        match (self.is_original, self.target_height_px) {
            (true, None) => true,
            (false, Some(h)) => h > 0,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(height: Option<i32>, is_original: bool) -> ThumbnailSpec {
        ThumbnailSpec {
            id: Uuid::new_v4(),
            title: "spec".to_string(),
            target_height_px: height,
            is_original,
        }
    }

    #[test]
    fn test_well_formed_specs() {
        assert!(spec(None, true).is_well_formed());
        assert!(spec(Some(200), false).is_well_formed());
    }

    #[test]
    fn test_malformed_specs() {
        assert!(!spec(Some(200), true).is_well_formed());
        assert!(!spec(None, false).is_well_formed());
        assert!(!spec(Some(0), false).is_well_formed());
        assert!(!spec(Some(-1), false).is_well_formed());
    }
}
