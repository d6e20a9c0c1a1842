//! This module contains the approximate math functions: the fast inverse
//! square root, the square root derived from it, digit-extraction
//! logarithms, and integer-exponent powers.

use super::consts::E;
use super::marshal::{build_float, float_bits};

/// Approximates `1 / sqrt(x)` with the magic-constant bit trick and one
/// Newton-Raphson refinement step. The relative error stays within about
/// 0.2% for normal positive inputs; the result is meaningless for
/// `x <= 0`.
// https://en.wikipedia.org/wiki/Fast_inverse_square_root
pub fn inv_sqrt(x: f32) -> f32 {
    let bits = 0x5f37_59df_u32.wrapping_sub(float_bits(x) >> 1);
    let temp = build_float(bits);
    temp * (1.5 - 0.5 * x * temp * temp)
}

/// Approximates `sqrt(x)` as `x * inv_sqrt(x)`; same error bound and
/// domain restriction as [`inv_sqrt`].
pub fn fast_sqrt(x: f32) -> f32 {
    x * inv_sqrt(x)
}

/// Computes the logarithm of `x` in base `base` by digit extraction:
/// `x` is first normalized into `[1, base)` while the integer part of
/// the result is accumulated, then fractional bits are extracted by
/// repeated squaring until the bit weight drops to `epsilon`. Smaller
/// epsilon costs more iterations.
///
/// Returns `-1.0` when both `x < 1` and `base < 1` (unsupported domain
/// combination). Returns NaN for `x <= 0`, for `base <= 1` outside that
/// case, and for `epsilon <= 0`.
pub fn log(x: f32, base: f32, epsilon: f32) -> f32 {
    if x < 1.0 && base < 1.0 {
        return -1.0;
    }
    if x <= 0.0 || base <= 1.0 || epsilon <= 0.0 {
        return f32::NAN;
    }

    // Normalize x into [1, base), counting whole powers of the base.
    let mut x = x;
    let mut integer_part: i32 = 0;
    while x >= base {
        x /= base;
        integer_part += 1;
    }
    while x < 1.0 {
        x *= base;
        integer_part -= 1;
    }

    // Extract the fractional bits. Squaring x doubles its exponent in
    // the target base, so after each squaring the bit at `partial` is
    // set exactly when x climbs past the base again.
    let mut fraction = 0.0f32;
    let mut partial = 0.5f32;
    while partial > epsilon {
        x *= x;
        if x >= base {
            x /= base;
            fraction += partial;
        }
        partial *= 0.5;
    }

    integer_part as f32 + fraction
}

const LOG_EPSILON: f32 = 1.0e-13;

/// Natural logarithm of `x`.
pub fn ln(x: f32) -> f32 {
    log(x, E as f32, LOG_EPSILON)
}

/// Base-2 logarithm of `x`.
pub fn log2(x: f32) -> f32 {
    log(x, 2.0, LOG_EPSILON)
}

/// Base-10 logarithm of `x`.
pub fn log10(x: f32) -> f32 {
    log(x, 10.0, LOG_EPSILON)
}

/// Returns `x` raised to the power of `n`, computed by squaring. Each
/// bit of `n` stands for a power-of-two exponent, and the matching
/// squarings of `x` are multiplied into the result. Negative exponents
/// are rejected and return NaN.
pub fn powi(x: f32, n: i32) -> f32 {
    if n < 0 {
        return f32::NAN;
    }

    let mut result = 1.0f32;
    let mut base = x;
    let mut exp = n;
    while exp > 0 {
        if exp & 1 == 1 {
            result *= base;
            exp -= 1;
        }
        base *= base;
        exp /= 2;
    }
    result
}

#[cfg(feature = "std")]
#[test]
fn test_inv_sqrt() {
    for x in [0.01f32, 0.25, 0.5, 1.0, 2.0, 4.0, 100.0, 10000.0, 1.0e6] {
        let exact = 1.0 / x.sqrt();
        let approx = inv_sqrt(x);
        let rel = ((approx - exact) / exact).abs();
        assert!(rel < 0.002, "inv_sqrt({}) off by {}", x, rel);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_fast_sqrt() {
    for x in [0.01f32, 0.25, 0.5, 1.0, 2.0, 4.0, 100.0, 10000.0, 1.0e6] {
        let exact = x.sqrt();
        let approx = fast_sqrt(x);
        let rel = ((approx - exact) / exact).abs();
        assert!(rel < 0.002, "fast_sqrt({}) off by {}", x, rel);
    }
}

#[cfg(feature = "std")]
#[test]
fn test_inv_sqrt_random() {
    use super::utils::Lfsr;
    let mut lfsr = Lfsr::new();

    // Positive normal values with exponents spread around 1.0.
    for _ in 0..1000 {
        let mantissa = lfsr.get32() & 0x007f_ffff;
        let exponent = 96 + (lfsr.get32() % 64);
        let x = build_float((exponent << 23) | mantissa);
        let exact = 1.0 / x.sqrt();
        let rel = ((inv_sqrt(x) - exact) / exact).abs();
        assert!(rel < 0.002, "inv_sqrt({}) off by {}", x, rel);
    }
}

#[test]
fn test_log_exact_powers() {
    assert_eq!(log(8.0, 2.0, 1.0e-13), 3.0);
    assert_eq!(log(1024.0, 2.0, 1.0e-13), 10.0);
    assert_eq!(log(1.0, 2.0, 1.0e-13), 0.0);
    assert_eq!(log(0.25, 2.0, 1.0e-13), -2.0);
    assert_eq!(log(1000.0, 10.0, 1.0e-13), 3.0);
}

#[test]
fn test_log_domain_refusal() {
    // Both operands below one is the documented sentinel case.
    assert_eq!(log(0.5, 0.5, 1.0e-13), -1.0);
    assert_eq!(log(0.99, 0.01, 1.0e-13), -1.0);

    assert!(log(-1.0, 2.0, 1.0e-13).is_nan());
    assert!(log(0.0, 2.0, 1.0e-13).is_nan());
    assert!(log(8.0, 1.0, 1.0e-13).is_nan());
    assert!(log(8.0, 0.5, 1.0e-13).is_nan());
    assert!(log(8.0, 2.0, 0.0).is_nan());
    assert!(log(8.0, 2.0, -1.0).is_nan());
}

#[cfg(feature = "std")]
#[test]
fn test_log_fractional() {
    for (x, base) in [
        (5.0f32, 2.0f32),
        (7.3, 2.0),
        (123.456, 10.0),
        (2.5, 10.0),
        (19.0, 3.0),
        (0.3, 2.0),
    ] {
        let expected = (x as f64).log(base as f64) as f32;
        let got = log(x, base, 1.0e-13);
        assert!(
            (got - expected).abs() < 1.0e-3,
            "log({}, {}) = {} expected {}",
            x,
            base,
            got,
            expected
        );
    }
}

#[cfg(feature = "std")]
#[test]
fn test_log_wrappers() {
    assert_eq!(ln(E as f32), 1.0);
    assert_eq!(log2(1024.0), 10.0);
    assert_eq!(log10(1000.0), 3.0);
    assert!((ln(10.0) - core::f32::consts::LN_10).abs() < 1.0e-3);
    assert!((log2(10.0) - core::f32::consts::LOG2_10).abs() < 1.0e-3);
}

#[test]
fn test_powi() {
    assert_eq!(powi(2.0, 0), 1.0);
    assert_eq!(powi(2.0, 1), 2.0);
    assert_eq!(powi(2.0, 3), 8.0);
    assert_eq!(powi(2.0, 10), 1024.0);
    assert_eq!(powi(-3.0, 3), -27.0);
    assert_eq!(powi(-3.0, 2), 9.0);
    assert_eq!(powi(1.5, 2), 2.25);
    assert_eq!(powi(0.0, 5), 0.0);
    // Anything to the power of zero is one.
    assert_eq!(powi(0.0, 0), 1.0);
    assert_eq!(powi(f32::INFINITY, 0), 1.0);
}

#[test]
fn test_powi_matches_operator_order() {
    // The loop multiplies squared factors together, so the result must
    // match the same sequence of native multiplications exactly.
    let x = 0.3f32;
    assert_eq!(powi(x, 3), x * (x * x));
}

#[test]
fn test_powi_negative_exponent() {
    assert!(powi(2.0, -1).is_nan());
    assert!(powi(2.0, i32::MIN).is_nan());
}
