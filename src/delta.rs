//! Second-order predictive delta coding.
//!
//! Each value beyond the second is predicted by linear extrapolation from
//! its two predecessors, `predicted = 2·v[i-1] − v[i-2]`, and only the
//! residual `v[i] − predicted` is kept. Arithmetic progressions collapse to
//! all-zero residuals. The first two values are carried verbatim (they end
//! up in the header, not the payload).
//!
//! All arithmetic is two's-complement wrapping; the round trip reproduces
//! the exact bit patterns even when intermediate differences wrap.

use crate::error::AlpineError;

/// Encode `input` into residuals plus the two leading values.
///
/// Fails with [`AlpineError::TooFewSamples`] for fewer than two samples.
/// Exactly two samples yield an empty residual vector.
pub fn encode(input: &[i64]) -> Result<(Vec<i64>, i64, i64), AlpineError> {
    if input.len() < 2 {
        return Err(AlpineError::TooFewSamples(input.len()));
    }

    let first = input[0];
    let second = input[1];
    let residuals = input
        .windows(3)
        .map(|w| {
            let predicted = w[1].wrapping_add(w[1].wrapping_sub(w[0]));
            w[2].wrapping_sub(predicted)
        })
        .collect();

    Ok((residuals, first, second))
}

/// Invert [`encode`]: rebuild the original sequence from the residuals and
/// the two leading values. The output has length `residuals.len() + 2`.
pub fn decode(residuals: &[i64], first: i64, second: i64) -> Vec<i64> {
    let mut out = Vec::with_capacity(residuals.len() + 2);
    out.push(first);
    out.push(second);
    for (i, &r) in residuals.iter().enumerate() {
        let predicted = out[i + 1].wrapping_add(out[i + 1].wrapping_sub(out[i]));
        out.push(r.wrapping_add(predicted));
    }
    out
}
