//! This module implements single-bit logical shifts over a double's
//! 64-bit encoding held as two 32-bit words.

use super::marshal::{build_double, double_high_bits, double_low_bits};

/// A double-precision value's IEEE-754 encoding as a (high, low) pair of
/// 32-bit words. The two words form one 64-bit field and must always be
/// manipulated together; the carry between them is handled by [`shr1`]
/// and [`shl1`].
///
/// [`shr1`]: DoubleWords::shr1
/// [`shl1`]: DoubleWords::shl1
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoubleWords {
    pub high: u32,
    pub low: u32,
}

impl DoubleWords {
    pub const fn new(high: u32, low: u32) -> Self {
        DoubleWords { high, low }
    }

    /// Splits the encoding of `x` into its two words.
    pub const fn from_f64(x: f64) -> Self {
        DoubleWords {
            high: double_high_bits(x),
            low: double_low_bits(x),
        }
    }

    /// Reassembles the pair into a double. The result is only meaningful
    /// if the pair holds a valid encoding.
    pub const fn to_f64(self) -> f64 {
        build_double(self.high, self.low)
    }

    /// Logical right shift of the 64-bit field by one bit. Bit 0 of the
    /// high word carries into bit 31 of the low word; bit 0 of the low
    /// word is lost.
    pub const fn shr1(self) -> Self {
        DoubleWords {
            high: self.high >> 1,
            low: (self.low >> 1) | ((self.high & 1) << 31),
        }
    }

    /// Logical left shift by one bit. The sign bit of the high word is
    /// masked off before the shift, so the original sign bit is lost
    /// rather than preserved; the value is treated as a 63-bit magnitude
    /// field. Bit 31 of the low word carries into bit 0 of the high
    /// word.
    pub const fn shl1(self) -> Self {
        DoubleWords {
            high: ((self.high & 0x7fff_ffff) << 1)
                | ((self.low & 0x8000_0000) >> 31),
            low: (self.low & 0x7fff_ffff) << 1,
        }
    }
}

#[test]
fn test_shr1_carry() {
    // Bit 0 of the high word must land in bit 31 of the low word.
    let w = DoubleWords::new(0x0000_0001, 0x8000_0000);
    assert_eq!(w.shr1(), DoubleWords::new(0, 0xc000_0000));

    let w = DoubleWords::new(0xffff_ffff, 0xffff_ffff);
    assert_eq!(w.shr1(), DoubleWords::new(0x7fff_ffff, 0xffff_ffff));

    let w = DoubleWords::new(0x8000_0000, 0x0000_0001);
    assert_eq!(w.shr1(), DoubleWords::new(0x4000_0000, 0));
}

#[test]
fn test_shl1_carry_and_sign() {
    // Bit 31 of the low word must land in bit 0 of the high word, and
    // the sign bit of the high word must be discarded.
    let w = DoubleWords::new(0x8000_0001, 0x8000_0000);
    assert_eq!(w.shl1(), DoubleWords::new(0x0000_0003, 0));

    let w = DoubleWords::new(0x4000_0000, 0);
    assert_eq!(w.shl1(), DoubleWords::new(0x8000_0000, 0));

    let w = DoubleWords::new(0, 0x7fff_ffff);
    assert_eq!(w.shl1(), DoubleWords::new(0, 0xffff_fffe));
}

#[test]
fn test_shift_round_trips() {
    use super::utils::Lfsr;
    let mut lfsr = Lfsr::new();

    for _ in 0..10000 {
        let bits = lfsr.get64();
        let w = DoubleWords::new((bits >> 32) as u32, bits as u32);

        // Left then right restores everything but the discarded sign
        // bit.
        let lr = w.shl1().shr1();
        assert_eq!(lr.high, w.high & 0x7fff_ffff);
        assert_eq!(lr.low, w.low);

        // Right then left restores everything but bit 0.
        let rl = w.shr1().shl1();
        assert_eq!(rl.high, w.high);
        assert_eq!(rl.low, w.low & 0xffff_fffe);
    }
}

#[test]
fn test_words_f64_round_trip() {
    use super::utils::special_test_values;

    for v in special_test_values() {
        let w = DoubleWords::from_f64(v);
        let y = w.to_f64();
        assert_eq!(v.is_nan(), y.is_nan());
        assert!(v.is_nan() || v.to_bits() == y.to_bits());
    }
}
