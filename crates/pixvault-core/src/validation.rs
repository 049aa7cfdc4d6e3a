//! Input validation helpers shared by the services.

use crate::AppError;

/// Validate a requested link lifetime against the configured bounds.
/// Both bounds are inclusive.
pub fn validate_lifetime(requested: i64, min: i64, max: i64) -> Result<(), AppError> {
    if requested < min || requested > max {
        return Err(AppError::InvalidLifetime {
            requested,
            min,
            max,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifetime_bounds_inclusive() {
        assert!(validate_lifetime(299, 300, 30_000).is_err());
        assert!(validate_lifetime(300, 300, 30_000).is_ok());
        assert!(validate_lifetime(30_000, 300, 30_000).is_ok());
        assert!(validate_lifetime(30_001, 300, 30_000).is_err());
    }

    #[test]
    fn test_lifetime_error_carries_bounds() {
        match validate_lifetime(42, 300, 30_000) {
            Err(AppError::InvalidLifetime {
                requested,
                min,
                max,
            }) => {
                assert_eq!(requested, 42);
                assert_eq!(min, 300);
                assert_eq!(max, 30_000);
            }
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
