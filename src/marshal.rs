//! This module converts between native floating-point values and their
//! raw IEEE-754 bit patterns. Doubles are handled as two 32-bit words in
//! big-endian order: the high word holds the sign, the 11-bit exponent
//! and the top 20 mantissa bits, and the low word holds the remaining 32
//! mantissa bits.

use super::codec::{be_bytes_from_bits, bits_from_be_bytes};

/// Returns the IEEE-754 bit pattern of the single-precision value `x`.
// https://en.wikipedia.org/wiki/IEEE_754
pub const fn float_bits(x: f32) -> u32 {
    bits_from_be_bytes(x.to_be_bytes())
}

/// Returns the raw bit pattern of the signed 32-bit integer `x`.
pub const fn bits_from_i32(x: i32) -> u32 {
    bits_from_be_bytes(x.to_be_bytes())
}

/// Returns the high 32 bits of the double-precision value `x`.
pub const fn double_high_bits(x: f64) -> u32 {
    let b = x.to_be_bytes();
    bits_from_be_bytes([b[0], b[1], b[2], b[3]])
}

/// Returns the low 32 bits of the double-precision value `x`.
pub const fn double_low_bits(x: f64) -> u32 {
    let b = x.to_be_bytes();
    bits_from_be_bytes([b[4], b[5], b[6], b[7]])
}

/// Constructs the single-precision value whose IEEE-754 encoding is
/// `bits`. Inverse of [`float_bits`] for every non-NaN pattern.
pub const fn build_float(bits: u32) -> f32 {
    f32::from_be_bytes(be_bytes_from_bits(bits))
}

/// Constructs a double-precision value from the two 32-bit halves of its
/// IEEE-754 encoding.
pub const fn build_double(high: u32, low: u32) -> f64 {
    let h = be_bytes_from_bits(high);
    let l = be_bytes_from_bits(low);
    f64::from_be_bytes([h[0], h[1], h[2], h[3], l[0], l[1], l[2], l[3]])
}

#[test]
fn test_float_bits_known_values() {
    assert_eq!(float_bits(0.0), 0x0000_0000);
    assert_eq!(float_bits(-0.0), 0x8000_0000);
    assert_eq!(float_bits(1.0), 0x3f80_0000);
    assert_eq!(float_bits(-2.0), 0xc000_0000);
    assert_eq!(float_bits(f32::INFINITY), 0x7f80_0000);
    assert_eq!(float_bits(f32::NEG_INFINITY), 0xff80_0000);
}

#[test]
fn test_bits_from_i32() {
    assert_eq!(bits_from_i32(0), 0);
    assert_eq!(bits_from_i32(1), 1);
    assert_eq!(bits_from_i32(-1), 0xffff_ffff);
    assert_eq!(bits_from_i32(i32::MIN), 0x8000_0000);
    assert_eq!(bits_from_i32(i32::MAX), 0x7fff_ffff);
}

#[test]
fn test_double_word_split() {
    assert_eq!(double_high_bits(1.0), 0x3ff0_0000);
    assert_eq!(double_low_bits(1.0), 0x0000_0000);
    assert_eq!(double_high_bits(-2.0), 0xc000_0000);
    assert_eq!(double_high_bits(f64::INFINITY), 0x7ff0_0000);
    assert_eq!(double_low_bits(f64::INFINITY), 0x0000_0000);

    // The smallest positive value lives entirely in the low word.
    let tiny = f64::from_bits(1);
    assert_eq!(double_high_bits(tiny), 0);
    assert_eq!(double_low_bits(tiny), 1);
}

#[test]
fn test_float_round_trip() {
    use super::utils::Lfsr;
    let mut lfsr = Lfsr::new();

    for _ in 0..10000 {
        let x = build_float(lfsr.get32());
        // NaN payloads are not compared bit-for-bit.
        if x.is_nan() {
            assert!(build_float(float_bits(x)).is_nan());
            continue;
        }
        assert_eq!(float_bits(build_float(float_bits(x))), float_bits(x));
        assert_eq!(build_float(float_bits(x)), x);
    }
}

#[test]
fn test_double_round_trip() {
    use super::utils::Lfsr;
    let mut lfsr = Lfsr::new();

    for _ in 0..10000 {
        let x = build_double(lfsr.get32(), lfsr.get32());
        if x.is_nan() {
            let y = build_double(double_high_bits(x), double_low_bits(x));
            assert!(y.is_nan());
            continue;
        }
        let y = build_double(double_high_bits(x), double_low_bits(x));
        assert_eq!(x.to_bits(), y.to_bits());
    }
}

#[test]
fn test_double_round_trip_special() {
    use super::utils::special_test_values;

    for v in special_test_values() {
        let y = build_double(double_high_bits(v), double_low_bits(v));
        assert_eq!(v.is_nan(), y.is_nan());
        assert!(v.is_nan() || v.to_bits() == y.to_bits());
    }
}
