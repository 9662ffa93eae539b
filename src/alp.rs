//! ALP (Adaptive Lossless floating-Point) transform.
//!
//! Converts f64 arrays to i64 arrays by scaling with a shared power of ten,
//! chosen so that `round(v * 10^exp) / 10^exp == v` bit-exactly for every
//! sample. Values that are decimal at heart (prices, sensor readings,
//! percentages) become plain integers; everything downstream then works in
//! integer space.
//!
//! Values with no exact decimal representation at any supported exponent
//! fall back to exponent 0, which truncates fractional parts on decode.
//! Callers needing a strict guarantee should check for that outcome.

use crate::error::AlpineError;

/// Largest supported decimal exponent. `10^17` is the last power of ten
/// exactly representable in f64 below `2^63`.
pub const MAX_EXPONENT: u8 = 17;

const POW10: [f64; 18] = [
    1e0, 1e1, 1e2, 1e3, 1e4, 1e5, 1e6, 1e7, 1e8, 1e9, 1e10, 1e11, 1e12, 1e13, 1e14, 1e15, 1e16,
    1e17,
];

/// Scale `values` to integers using `10^exp_hint`, or auto-detect the
/// exponent when `exp_hint` is negative.
///
/// Returns the scaled integers and the exponent actually used. Fails with
/// [`AlpineError::EmptyInput`] on empty input and
/// [`AlpineError::ExponentOutOfRange`] when an explicit hint exceeds
/// [`MAX_EXPONENT`]. Rounding is half-away-from-zero.
pub fn encode(values: &[f64], exp_hint: i32) -> Result<(Vec<i64>, u8), AlpineError> {
    if values.is_empty() {
        return Err(AlpineError::EmptyInput);
    }

    let exp = if exp_hint < 0 {
        detect_exponent(values)
    } else if exp_hint > MAX_EXPONENT as i32 {
        return Err(AlpineError::ExponentOutOfRange(exp_hint));
    } else {
        exp_hint as u8
    };

    let multiplier = POW10[exp as usize];
    let scaled = values
        .iter()
        .map(|&v| (v * multiplier).round() as i64)
        .collect();

    Ok((scaled, exp))
}

/// Invert [`encode`]: divide each scaled integer by `10^exp`.
///
/// An exponent beyond [`MAX_EXPONENT`] yields an empty result; header
/// validation upstream is the real gate, this is only a backstop.
pub fn decode(scaled: &[i64], exp: u8) -> Vec<f64> {
    if exp > MAX_EXPONENT {
        return Vec::new();
    }
    let multiplier = POW10[exp as usize];
    scaled.iter().map(|&s| s as f64 / multiplier).collect()
}

/// Probe exponents 1..=17 in order and return the first that scales every
/// value to an integer which divides back to the original bit pattern.
/// Returns 0 when no exponent qualifies.
fn detect_exponent(values: &[f64]) -> u8 {
    let limit = i64::MAX as f64;

    for p in 1..=MAX_EXPONENT {
        let multiplier = POW10[p as usize];
        let all_exact = values.iter().all(|&v| {
            let scaled = v * multiplier;
            if scaled > limit || scaled < -limit {
                return false;
            }
            let rounded = scaled.round();
            if (scaled - rounded).abs() >= 0.5 {
                return false;
            }
            rounded / multiplier == v
        });
        if all_exact {
            return p;
        }
    }

    0
}
