//! Process-wide numeric constants. The non-normal values are built from
//! their fixed bit patterns at compile time, so no startup
//! initialization step exists.

use super::marshal::build_double;

/// Euler's number.
pub const E: f64 = 2.718281828459045;

/// Archimedes' constant.
pub const PI: f64 = 3.141592653589793;

/// A NaN with the sign bit and every exponent and mantissa bit set.
pub const NAN: f64 = build_double(0xffff_ffff, 0xffff_ffff);

/// Positive infinity: exponent all ones, mantissa zero, sign clear.
pub const POSITIVE_INFINITY: f64 = build_double(0x7ff0_0000, 0x0000_0000);

/// Negative infinity: exponent all ones, mantissa zero, sign set.
pub const NEGATIVE_INFINITY: f64 = build_double(0xfff0_0000, 0x0000_0000);

#[test]
fn test_non_normal_constants() {
    // NaN compares unequal to itself.
    assert!(NAN != NAN);
    assert!(NAN.is_nan());
    assert!(NAN.is_sign_negative());

    assert!(POSITIVE_INFINITY.is_infinite());
    assert!(NEGATIVE_INFINITY.is_infinite());
    assert!(POSITIVE_INFINITY > f64::MAX);
    assert!(NEGATIVE_INFINITY < f64::MIN);
    assert_eq!(POSITIVE_INFINITY, f64::INFINITY);
    assert_eq!(NEGATIVE_INFINITY, f64::NEG_INFINITY);
}

#[test]
fn test_constant_bit_patterns() {
    use super::marshal::{double_high_bits, double_low_bits};

    assert_eq!(double_high_bits(POSITIVE_INFINITY), 0x7ff0_0000);
    assert_eq!(double_low_bits(POSITIVE_INFINITY), 0);
    assert_eq!(double_high_bits(NEGATIVE_INFINITY), 0xfff0_0000);
    assert_eq!(double_low_bits(NEGATIVE_INFINITY), 0);
    assert_eq!(double_high_bits(NAN), 0xffff_ffff);
    assert_eq!(double_low_bits(NAN), 0xffff_ffff);
}

#[test]
fn test_e_and_pi() {
    assert_eq!(E, core::f64::consts::E);
    assert_eq!(PI, core::f64::consts::PI);
}
