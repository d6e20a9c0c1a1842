//! This module implements the whole-number test and the integer rounding
//! functions, all built on native truncating conversion.

/// Returns true if `a` has no fractional part.
pub fn is_whole_number(a: f64) -> bool {
    a as i64 as f64 == a
}

/// Rounds `a` up to an integer. For negative non-whole values this
/// truncates toward zero (`ceil(-2.3) == -2`), which coincides with the
/// mathematical ceiling.
pub fn ceil(a: f64) -> i64 {
    if a > 0.0 && !is_whole_number(a) {
        (a + 1.0) as i64
    } else {
        a as i64
    }
}

/// Rounds `a` down to an integer. For positive non-whole values this
/// truncates toward zero (`floor(2.7) == 2`).
pub fn floor(a: f64) -> i64 {
    if a < 0.0 && !is_whole_number(a) {
        (a - 1.0) as i64
    } else {
        a as i64
    }
}

/// Rounds `a` to the nearest integer, defined as `floor(a + 0.5)`. Ties
/// round up: `round(2.5) == 3` and `round(-2.5) == -2`.
pub fn round(a: f64) -> i64 {
    floor(a + 0.5)
}

#[test]
fn test_is_whole_number() {
    assert!(is_whole_number(3.0));
    assert!(!is_whole_number(3.5));
    assert!(is_whole_number(-4.0));
    assert!(is_whole_number(0.0));
    assert!(is_whole_number(-0.0));
    assert!(!is_whole_number(-0.25));
    assert!(is_whole_number((1u64 << 52) as f64));
}

#[test]
fn test_ceil() {
    assert_eq!(ceil(2.3), 3);
    assert_eq!(ceil(2.0), 2);
    assert_eq!(ceil(-2.3), -2);
    assert_eq!(ceil(-2.0), -2);
    assert_eq!(ceil(0.0), 0);
    assert_eq!(ceil(0.001), 1);
}

#[test]
fn test_floor() {
    assert_eq!(floor(2.7), 2);
    assert_eq!(floor(2.0), 2);
    assert_eq!(floor(-2.7), -3);
    assert_eq!(floor(-2.0), -2);
    assert_eq!(floor(0.0), 0);
    assert_eq!(floor(-0.001), -1);
}

#[test]
fn test_round() {
    assert_eq!(round(2.5), 3);
    assert_eq!(round(2.4), 2);
    assert_eq!(round(-2.5), -2);
    assert_eq!(round(-2.6), -3);
    assert_eq!(round(0.0), 0);
    assert_eq!(round(99.999), 100);
}
