//! Adaptive precision for floating point attribute values
//!
//! A value stored as `3.14` usually comes back from binary floating point as
//! `3.1399999999999999023...`. Printing it with a fixed precision either
//! truncates genuine decimals or exposes that tail. Instead we count how many
//! fractional digits the value "means" and print exactly that many.
//!
//! The count walks the fractional part one decimal digit at a time and stops
//! when what remains is below [`PRECISION`], or when it is within
//! [`PRECISION`] of rounding up to the next digit.
//!
//! # Known limitation
//!
//! Values with long runs of 9s or 0s close to the digit cap land on the wrong
//! side of the tolerance. `42.9999999` reports 9 digits (`42.999999900`) and
//! `42.999999999` reports 1 digit (`43.0`). Clients have seen this output for
//! years, so it is kept as is and pinned by the tests below.

/// Tolerance absorbing binary representation error
pub const PRECISION: f64 = 0.000_000_01;

/// Maximum number of fractional digits ever printed
pub const PRECISION_DIGITS: usize = 9;

/// Number of fractional digits needed to print `value` without spurious
/// trailing digits, capped at [`PRECISION_DIGITS`]
///
/// Non-finite values need no digits.
pub fn digits_needed(value: f64) -> usize {
    let mut digits = 0;
    let mut decimal_part = value.fract().abs();

    while decimal_part > PRECISION {
        digits += 1;
        decimal_part = (decimal_part * 10.0).fract();
        // Rounding up at this digit: 0.99999999.. is the next digit, not more 9s
        if (1.0 - decimal_part).abs() < PRECISION {
            break;
        }
        if digits == PRECISION_DIGITS {
            break;
        }
    }

    digits
}

/// Fixed-point rendering of `value` with exactly `digits` fractional digits
///
/// Never uses exponent notation. NaN and infinities have no JSON number form
/// and render as `null`.
pub fn format_float(value: f64, digits: usize) -> String {
    if !value.is_finite() {
        return "null".to_string();
    }
    format!("{:.*}", digits, value)
}

/// [`format_float`] with [`digits_needed`] digits
pub fn encode_float(value: f64) -> String {
    format_float(value, digits_needed(value))
}
