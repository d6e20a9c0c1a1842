//! This file contains test helpers: a deterministic pseudorandom bit
//! generator and a table of edge-case values.

/// Returns a list of interesting values that the round-trip tests use to
/// catch edge cases.
#[allow(dead_code)]
pub fn special_test_values() -> [f64; 16] {
    [
        -f64::NAN,
        f64::NAN,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::EPSILON,
        f64::MIN,
        f64::MAX,
        f64::MIN_POSITIVE,
        core::f64::consts::PI,
        core::f64::consts::E,
        0.0,
        -0.0,
        1.0,
        -1.0,
        0.1,
        -123456789.875,
    ]
}

// Linear-feedback shift register. We use this as a random number
// generator for tests because it is deterministic and dependency-free.
#[allow(dead_code)]
pub struct Lfsr {
    state: u32,
}

#[allow(dead_code)]
impl Lfsr {
    pub fn new() -> Lfsr {
        Lfsr { state: 0x2468_ace1 }
    }

    fn step(&mut self) {
        let a = (self.state >> 24) & 1;
        let b = (self.state >> 23) & 1;
        let c = (self.state >> 22) & 1;
        let d = (self.state >> 17) & 1;
        let n = a ^ b ^ c ^ d ^ 1;
        self.state <<= 1;
        self.state |= n;
    }

    /// Returns the next pseudorandom 32-bit pattern.
    pub fn get32(&mut self) -> u32 {
        let mut res: u32 = 0;
        for _ in 0..32 {
            self.step();
            res <<= 1;
            res ^= self.state & 0x1;
        }
        res
    }

    /// Returns the next pseudorandom 64-bit pattern.
    pub fn get64(&mut self) -> u64 {
        ((self.get32() as u64) << 32) | self.get32() as u64
    }
}

#[test]
fn test_lfsr_balance() {
    let mut lfsr = Lfsr::new();

    // Count the number of bits, and the number of 1s.
    let mut bits = 0;
    let mut ones = 0;

    for _ in 0..10000 {
        let mut u = lfsr.get32();
        for _ in 0..32 {
            bits += 1;
            ones += u & 1;
            u >>= 1;
        }
    }
    // Make sure that we have around 50% ones and 50% zeros.
    assert!((ones as f64) < (0.55 * bits as f64));
    assert!((ones as f64) > (0.45 * bits as f64));
}

#[test]
fn test_lfsr_no_short_cycle() {
    let mut lfsr = Lfsr::new();
    let first = lfsr.get32();
    let second = lfsr.get32();

    // Make sure that the sequence doesn't repeat itself too frequently.
    for _ in 0..30000 {
        assert_ne!(first, lfsr.get32());
        assert_ne!(second, lfsr.get32());
    }
}
