//! Python bindings for the public surface, exposed as flat functions.

use crate::words::DoubleWords;
use pyo3::prelude::*;

/// Returns the IEEE-754 bit pattern of a single-precision value.
#[pyfunction]
fn float_bits(x: f32) -> u32 {
    crate::float_bits(x)
}

/// Returns the raw bit pattern of a signed 32-bit integer.
#[pyfunction]
fn bits_from_i32(x: i32) -> u32 {
    crate::bits_from_i32(x)
}

/// Returns the high 32 bits of a double's IEEE-754 encoding.
#[pyfunction]
fn double_high_bits(x: f64) -> u32 {
    crate::double_high_bits(x)
}

/// Returns the low 32 bits of a double's IEEE-754 encoding.
#[pyfunction]
fn double_low_bits(x: f64) -> u32 {
    crate::double_low_bits(x)
}

/// Constructs the single-precision value encoded by `bits`.
#[pyfunction]
fn build_float(bits: u32) -> f32 {
    crate::build_float(bits)
}

/// Constructs a double from the two 32-bit halves of its encoding.
#[pyfunction]
fn build_double(high: u32, low: u32) -> f64 {
    crate::build_double(high, low)
}

/// Logical right shift by one bit over a double's (high, low) words.
#[pyfunction]
fn shift_double_right1(high: u32, low: u32) -> (u32, u32) {
    let w = DoubleWords::new(high, low).shr1();
    (w.high, w.low)
}

/// Logical left shift by one bit over a double's (high, low) words. The
/// sign bit is discarded.
#[pyfunction]
fn shift_double_left1(high: u32, low: u32) -> (u32, u32) {
    let w = DoubleWords::new(high, low).shl1();
    (w.high, w.low)
}

/// Returns true if the value has no fractional part.
#[pyfunction]
fn is_whole_number(a: f64) -> bool {
    crate::is_whole_number(a)
}

/// Rounds up to an integer (truncating toward zero for negatives).
#[pyfunction]
fn ceil(a: f64) -> i64 {
    crate::ceil(a)
}

/// Rounds down to an integer (truncating toward zero for positives).
#[pyfunction]
fn floor(a: f64) -> i64 {
    crate::floor(a)
}

/// Rounds to the nearest integer, ties rounding up.
#[pyfunction]
fn round(a: f64) -> i64 {
    crate::round(a)
}

/// Fast approximate inverse square root.
#[pyfunction]
fn inv_sqrt(x: f32) -> f32 {
    crate::inv_sqrt(x)
}

/// Fast approximate square root.
#[pyfunction]
fn fast_sqrt(x: f32) -> f32 {
    crate::fast_sqrt(x)
}

/// Logarithm of `x` in base `base`, extracted digit by digit down to
/// `epsilon` precision.
#[pyfunction]
fn log(x: f32, base: f32, epsilon: f32) -> f32 {
    crate::log(x, base, epsilon)
}

/// Natural logarithm.
#[pyfunction]
fn ln(x: f32) -> f32 {
    crate::ln(x)
}

/// Base-2 logarithm.
#[pyfunction]
fn log2(x: f32) -> f32 {
    crate::log2(x)
}

/// Base-10 logarithm.
#[pyfunction]
fn log10(x: f32) -> f32 {
    crate::log10(x)
}

/// Integer-exponent power by squaring. Negative exponents return NaN.
#[pyfunction]
fn powi(x: f32, n: i32) -> f32 {
    crate::powi(x, n)
}

#[pymodule]
fn bitmath(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(float_bits, m)?)?;
    m.add_function(wrap_pyfunction!(bits_from_i32, m)?)?;
    m.add_function(wrap_pyfunction!(double_high_bits, m)?)?;
    m.add_function(wrap_pyfunction!(double_low_bits, m)?)?;
    m.add_function(wrap_pyfunction!(build_float, m)?)?;
    m.add_function(wrap_pyfunction!(build_double, m)?)?;
    m.add_function(wrap_pyfunction!(shift_double_right1, m)?)?;
    m.add_function(wrap_pyfunction!(shift_double_left1, m)?)?;
    m.add_function(wrap_pyfunction!(is_whole_number, m)?)?;
    m.add_function(wrap_pyfunction!(ceil, m)?)?;
    m.add_function(wrap_pyfunction!(floor, m)?)?;
    m.add_function(wrap_pyfunction!(round, m)?)?;
    m.add_function(wrap_pyfunction!(inv_sqrt, m)?)?;
    m.add_function(wrap_pyfunction!(fast_sqrt, m)?)?;
    m.add_function(wrap_pyfunction!(log, m)?)?;
    m.add_function(wrap_pyfunction!(ln, m)?)?;
    m.add_function(wrap_pyfunction!(log2, m)?)?;
    m.add_function(wrap_pyfunction!(log10, m)?)?;
    m.add_function(wrap_pyfunction!(powi, m)?)?;

    m.add("E", crate::E)?;
    m.add("PI", crate::PI)?;
    m.add("NAN", crate::NAN)?;
    m.add("POSITIVE_INFINITY", crate::POSITIVE_INFINITY)?;
    m.add("NEGATIVE_INFINITY", crate::NEGATIVE_INFINITY)?;
    Ok(())
}
