//! Bit-level IEEE-754 marshalling and fast approximate math built only
//! on primitive arithmetic and bit operations.

mod approx;
mod codec;
mod consts;
mod marshal;
#[cfg(feature = "python")]
mod py;
mod round;
mod utils;
mod words;

pub use self::approx::{fast_sqrt, inv_sqrt, ln, log, log10, log2, powi};
pub use self::codec::{be_bytes_from_bits, bits_from_be_bytes};
pub use self::consts::{E, NAN, NEGATIVE_INFINITY, PI, POSITIVE_INFINITY};
pub use self::marshal::{
    bits_from_i32, build_double, build_float, double_high_bits,
    double_low_bits, float_bits,
};
pub use self::round::{ceil, floor, is_whole_number, round};
pub use self::words::DoubleWords;
