//! This module contains the big-endian byte/bit codec that the rest of
//! the crate is built on.

/// Assembles a `u32` bit pattern from four big-endian bytes. The byte at
/// index 0 is the most significant.
pub const fn bits_from_be_bytes(raw: [u8; 4]) -> u32 {
    ((raw[0] as u32) << 24)
        | ((raw[1] as u32) << 16)
        | ((raw[2] as u32) << 8)
        | (raw[3] as u32)
}

/// Emits the four big-endian bytes of a `u32` bit pattern, the inverse
/// of [`bits_from_be_bytes`].
pub const fn be_bytes_from_bits(bits: u32) -> [u8; 4] {
    [
        (bits >> 24) as u8,
        (bits >> 16) as u8,
        (bits >> 8) as u8,
        bits as u8,
    ]
}

#[test]
fn test_bits_from_be_bytes() {
    assert_eq!(bits_from_be_bytes([0, 0, 0, 0]), 0);
    assert_eq!(bits_from_be_bytes([0, 0, 0, 1]), 1);
    assert_eq!(bits_from_be_bytes([1, 0, 0, 0]), 0x0100_0000);
    assert_eq!(bits_from_be_bytes([0xde, 0xad, 0xbe, 0xef]), 0xdead_beef);
    assert_eq!(bits_from_be_bytes([0xff, 0xff, 0xff, 0xff]), u32::MAX);
}

#[test]
fn test_be_bytes_from_bits() {
    assert_eq!(be_bytes_from_bits(0x3f80_0000), [0x3f, 0x80, 0, 0]);
    assert_eq!(be_bytes_from_bits(0x0000_00ff), [0, 0, 0, 0xff]);
    // Match the standard library's notion of big-endian.
    assert_eq!(be_bytes_from_bits(0x1234_5678), 0x1234_5678u32.to_be_bytes());
}

#[test]
fn test_codec_round_trip() {
    use super::utils::Lfsr;
    let mut lfsr = Lfsr::new();

    for _ in 0..10000 {
        let bits = lfsr.get32();
        assert_eq!(bits_from_be_bytes(be_bytes_from_bits(bits)), bits);
    }
}
