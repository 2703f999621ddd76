//! Narrowing a parsed number into the accepted range.

use log::debug;

use crate::number::{SanitizedNumber, UnsanitizedNumber};

/// Smallest answer the prompt accepts.
pub const LOWER_BOUND: i64 = 1;
/// Largest answer the prompt accepts.
pub const UPPER_BOUND: i64 = 10;

/// Range-checks a parsed number, keeping absence absent.
///
/// A `None` input short-circuits to `None` before any range logic runs, so
/// a parse failure flows through unchanged. Otherwise the wrapped value
/// must satisfy `LOWER_BOUND <= value <= UPPER_BOUND`, both ends inclusive;
/// in-range values are rewrapped as a [`SanitizedNumber`] carrying the same
/// integer, everything else becomes `None`.
///
/// # Examples
///
/// ```
/// use pick_a_number_core::parsing::parse_number;
/// use pick_a_number_core::sanitization::sanitize_number;
///
/// assert!(sanitize_number(parse_number("10")).is_some());
/// assert!(sanitize_number(parse_number("11")).is_none());
/// assert!(sanitize_number(None).is_none());
/// ```
#[must_use]
pub fn sanitize_number(input: Option<UnsanitizedNumber>) -> Option<SanitizedNumber> {
    let candidate = input?;

    if (LOWER_BOUND..=UPPER_BOUND).contains(&candidate.value()) {
        Some(SanitizedNumber::from_checked(candidate))
    } else {
        debug!("{candidate} is outside {LOWER_BOUND}..={UPPER_BOUND}");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(value: i64) -> Option<UnsanitizedNumber> {
        Some(UnsanitizedNumber::new(value))
    }

    #[test]
    fn test_sanitize_accepts_whole_range() {
        for value in LOWER_BOUND..=UPPER_BOUND {
            let sanitized = sanitize_number(candidate(value));
            assert_eq!(sanitized.map(SanitizedNumber::value), Some(value));
        }
    }

    #[test]
    fn test_sanitize_bounds_are_inclusive() {
        assert!(sanitize_number(candidate(1)).is_some());
        assert!(sanitize_number(candidate(10)).is_some());
    }

    #[test]
    fn test_sanitize_rejects_neighbors_of_the_bounds() {
        assert!(sanitize_number(candidate(0)).is_none());
        assert!(sanitize_number(candidate(11)).is_none());
    }

    #[test]
    fn test_sanitize_rejects_far_out_values() {
        assert!(sanitize_number(candidate(-5)).is_none());
        assert!(sanitize_number(candidate(9001)).is_none());
        assert!(sanitize_number(candidate(i64::MIN)).is_none());
        assert!(sanitize_number(candidate(i64::MAX)).is_none());
    }

    #[test]
    fn test_sanitize_short_circuits_absence() {
        assert!(sanitize_number(None).is_none());
    }

    #[test]
    fn test_sanitize_preserves_the_value() {
        let sanitized = sanitize_number(candidate(7)).unwrap();
        assert_eq!(sanitized.value(), 7);
        assert_eq!(format!("{sanitized}"), "7");
    }
}
