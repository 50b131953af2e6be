//! Appearance rating rules.

use crate::error::CoreError;

/// Inclusive lower bound for an appearance rating.
pub const MIN_RATING: i32 = 1;
/// Inclusive upper bound for an appearance rating.
pub const MAX_RATING: i32 = 5;

/// Validate a rating before it is persisted.
///
/// Accepts the raw optional value straight from a request body, so a missing
/// rating fails the same way an out-of-range one does.
///
/// # Examples
///
/// ```
/// use lateshow_core::rating::validate_rating;
///
/// assert_eq!(validate_rating(Some(4)).unwrap(), 4);
/// assert!(validate_rating(Some(6)).is_err());
/// assert!(validate_rating(None).is_err());
/// ```
pub fn validate_rating(value: Option<i32>) -> Result<i32, CoreError> {
    match value {
        Some(v) if (MIN_RATING..=MAX_RATING).contains(&v) => Ok(v),
        _ => Err(CoreError::Validation(
            "Rating must be between 1 and 5.".to_string(),
        )),
    }
}
