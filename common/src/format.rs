//! Fixed-precision number formatting without `alloc`.
//!
//! `core::fmt` on embedded targets pulls in the float formatting machinery and
//! its rounding is round-half-even. The monitor wants round-half-away-from-zero
//! at a per-parameter precision, so values are scaled to an integer first and
//! printed as `integer.fraction`.

#[cfg(not(test))]
use micromath::F32Ext;

use core::fmt::Write;

use heapless::String;

/// Highest supported `decimal_places`.
pub const MAX_DECIMAL_PLACES: u8 = 4;

/// Capacity of a formatted value, sign and point included.
pub const VALUE_TEXT_LEN: usize = 16;

/// Text shown instead of a value that cannot be formatted.
pub const INVALID_VALUE_TEXT: &str = "ERR";

const POW10: [u32; MAX_DECIMAL_PLACES as usize + 1] = [1, 10, 100, 1_000, 10_000];

/// Format `value` with exactly `decimal_places` digits after the point.
///
/// Rounds half away from zero: `23.4567` at 2 places is `"23.46"`,
/// `-0.5` at 0 places is `"-1"`. Non-finite values format as
/// [`INVALID_VALUE_TEXT`], and so do values whose text would not fit in
/// [`VALUE_TEXT_LEN`]. Precision above [`MAX_DECIMAL_PLACES`] is clamped.
pub fn format_value(
    value: f32,
    decimal_places: u8,
) -> String<VALUE_TEXT_LEN> {
    let mut out: String<VALUE_TEXT_LEN> = String::new();
    if !value.is_finite() {
        let _ = out.push_str(INVALID_VALUE_TEXT);
        return out;
    }

    let places = decimal_places.min(MAX_DECIMAL_PLACES) as usize;
    let scale = POW10[places];
    // Float to int casts saturate at u64::MAX
    let scaled = (value.abs() * scale as f32).round() as u64;
    let integer = scaled / u64::from(scale);
    let fraction = scaled % u64::from(scale);

    // A value that rounds to zero prints without a sign
    let negative = value < 0.0 && scaled != 0;
    let point = usize::from(places > 0);
    let len = usize::from(negative) + digit_count(integer) + point + places;
    if len > VALUE_TEXT_LEN {
        let _ = out.push_str(INVALID_VALUE_TEXT);
        return out;
    }

    if negative {
        let _ = out.push('-');
    }
    let _ = write!(out, "{integer}");
    if places > 0 {
        let _ = write!(out, ".{fraction:0places$}");
    }
    out
}

/// Number of decimal digits in `n`.
const fn digit_count(mut n: u64) -> usize {
    let mut digits = 1;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits
}

// =============================================================================
// Unit Tests
// =============================================================================
