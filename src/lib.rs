//! # alpine-rs
//!
//! Lossless compression for sequential numeric data — time series,
//! monotonic counters, sensor feeds — supporting both `f64` and `i64`
//! arrays.
//!
//! ## Overview
//!
//! Encoding runs a four-stage pipeline:
//!
//! 1. **ALP (Adaptive Lossless floating-Point)**: floats become integers by
//!    scaling with an auto-detected power of ten that round-trips every
//!    sample bit-exactly (skipped for integer input)
//! 2. **Predictive delta**: each value is replaced by its residual against a
//!    linear extrapolation of the two previous values, so trends collapse
//!    toward zero
//! 3. **ZigZag**: signed residuals fold into unsigned values, keeping small
//!    magnitudes small
//! 4. **Golomb-Rice**: residuals pack into unary-plus-binary codes, with the
//!    Rice parameter tuned from the residual statistics
//!
//! A fixed 24-byte header carries everything needed to invert the pipeline;
//! decoding is driven entirely by that header.
//!
//! ## Quick Start
//!
//! ```rust
//! use alpine_rs::{decode_float, encode_float, EncodeOptions};
//!
//! // Sample time-series data
//! let data = vec![10.5, 11.2, 12.8, 13.1, 14.5];
//!
//! // Encode with auto-detected parameters
//! let encoded = encode_float(&data, EncodeOptions::default()).unwrap();
//!
//! // Decode back to the exact original values
//! let decoded = decode_float(&encoded).unwrap();
//! assert_eq!(decoded, data);
//! ```
//!
//! Integer data skips the ALP stage:
//!
//! ```rust
//! use alpine_rs::{decode_int, encode_int, EncodeOptions};
//!
//! let timestamps = vec![1_700_000_000i64, 1_700_000_060, 1_700_000_120];
//! let encoded = encode_int(&timestamps, EncodeOptions::default()).unwrap();
//! assert_eq!(decode_int(&encoded).unwrap(), timestamps);
//! ```
//!
//! ## Choosing options
//!
//! Both knobs default to auto and rarely need touching:
//!
//! | Option | Auto behavior | Explicit |
//! |--------|--------------|----------|
//! | `rice_param` | Median absolute residual, rounded to a power of two, clamped to `[1, 64]` | Any value in `[1, 255]` |
//! | `alp_exp` | Smallest decimal exponent that round-trips every sample | `1..=17` |
//!
//! Wire-format introspection without decoding is available through
//! [`Header::unmarshal`].
//!
//! ## Compression performance
//!
//! Ratio depends on how predictable the data is:
//!
//! - **Linear runs** (constant stride): two bits per value and better
//! - **Smooth series** (small second differences): a few bits per value
//! - **Noisy or adversarial data**: little to no gain; Rice codes degrade
//!   gracefully but cannot beat entropy
//!
//! ## Limitations
//!
//! Values with no exact decimal representation at any exponent in `0..=17`
//! (for example pi, or anything above `~9.2e18`) fall back to exponent 0,
//! which truncates fractional parts on decode. Callers needing a strict
//! lossless guarantee for such data should detect the exponent-0 outcome in
//! the header. `NaN` and infinities take the same fallback and do not
//! survive the integer cast.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod alp;
mod bitpack;
mod codec;
pub mod delta;
mod error;
pub mod header;
pub mod rice;
pub mod zigzag;

pub use codec::{
    decode_float, decode_int, encode_float, encode_int, EncodeOptions, FloatEncoder, IntEncoder,
};
pub use error::AlpineError;
pub use header::{Header, Mode, HEADER_SIZE};
pub use rice::auto_rice_param;

/// Convenience type alias for Results with AlpineError.
pub type Result<T> = std::result::Result<T, AlpineError>;
