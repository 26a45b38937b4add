//! Centralized validation and helper functions.

/// Minimum number of fragments in an assembly: a backbone and one insert
pub const MIN_FRAGMENTS: usize = 2;

/// Maximum number of fragments accepted from a single specification
pub const MAX_FRAGMENTS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("must specify at least two fragments, got {0}")]
    TooFewFragments(usize),
    #[error("too many fragments: {0} exceeds maximum allowed ({MAX_FRAGMENTS})")]
    TooManyFragments(usize),
}

/// Check that `count` fragments make a complete assembly, with no upper bound.
///
/// # Errors
///
/// Returns `ValidationError::TooFewFragments` below [`MIN_FRAGMENTS`].
pub fn check_min_fragments(count: usize) -> Result<(), ValidationError> {
    if count < MIN_FRAGMENTS {
        Err(ValidationError::TooFewFragments(count))
    } else {
        Ok(())
    }
}

/// Check the number of fragments read from a single specification.
///
/// # Errors
///
/// Returns `ValidationError::TooFewFragments` below [`MIN_FRAGMENTS`], or
/// `ValidationError::TooManyFragments` above [`MAX_FRAGMENTS`].
pub fn check_fragment_count(count: usize) -> Result<(), ValidationError> {
    check_min_fragments(count)?;
    if count > MAX_FRAGMENTS {
        Err(ValidationError::TooManyFragments(count))
    } else {
        Ok(())
    }
}

/// Check if adding another fragment would exceed the maximum allowed.
///
/// Call this with the current count BEFORE adding a new fragment.
#[must_use]
pub fn check_fragment_limit(count: usize) -> Option<ValidationError> {
    if count >= MAX_FRAGMENTS {
        Some(ValidationError::TooManyFragments(count + 1))
    } else {
        None
    }
}

/// A volume the caller can actually pipette: finite and not negative
#[must_use]
pub fn is_valid_volume(vol_ul: f64) -> bool {
    vol_ul.is_finite() && vol_ul >= 0.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_count() {
        assert_eq!(check_fragment_count(0), Err(ValidationError::TooFewFragments(0)));
        assert_eq!(check_fragment_count(1), Err(ValidationError::TooFewFragments(1)));
        assert!(check_fragment_count(2).is_ok());
        assert!(check_fragment_count(MAX_FRAGMENTS).is_ok());
        assert_eq!(
            check_fragment_count(MAX_FRAGMENTS + 1),
            Err(ValidationError::TooManyFragments(MAX_FRAGMENTS + 1))
        );
    }

    #[test]
    fn test_min_fragments_has_no_upper_bound() {
        assert_eq!(check_min_fragments(1), Err(ValidationError::TooFewFragments(1)));
        assert!(check_min_fragments(2).is_ok());
        assert!(check_min_fragments(MAX_FRAGMENTS * 10).is_ok());
    }

    #[test]
    fn test_fragment_limit() {
        assert!(check_fragment_limit(0).is_none());
        assert!(check_fragment_limit(MAX_FRAGMENTS - 1).is_none());
        assert!(check_fragment_limit(MAX_FRAGMENTS).is_some());
    }

    #[test]
    fn test_valid_volume() {
        assert!(is_valid_volume(0.0));
        assert!(is_valid_volume(2.5));
        assert!(!is_valid_volume(-0.1));
        assert!(!is_valid_volume(f64::NAN));
        assert!(!is_valid_volume(f64::INFINITY));
    }
}
