//! Error types for encoding/decoding operations.

use crate::header::Mode;
use thiserror::Error;

/// Errors that can occur while encoding or decoding.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AlpineError {
    /// The input data is empty.
    #[error("input data is empty")]
    EmptyInput,

    /// The input has fewer samples than the pipeline needs.
    #[error("input must have at least 2 elements, got {0}")]
    TooFewSamples(usize),

    /// An explicit ALP exponent outside the supported `0..=17` range.
    #[error("ALP exponent {0} out of range (must be 0..=17)")]
    ExponentOutOfRange(i32),

    /// A Rice parameter or value count that must be at least 1 was 0.
    #[error("invalid parameter: {0} (must be >= 1)")]
    InvalidParam(u32),

    /// The encoded buffer is shorter than the fixed header.
    #[error("data too short: need at least {needed} bytes, got {got}")]
    HeaderTooShort {
        /// Minimum number of bytes required.
        needed: usize,
        /// Number of bytes actually provided.
        got: usize,
    },

    /// Header validation failed.
    #[error("invalid header: {0}")]
    InvalidHeader(String),

    /// The mode byte disagrees with the requested decode flavor.
    #[error("expected mode {expected:?}, found mode byte {found}")]
    ModeMismatch {
        /// The mode the decoder was asked to produce.
        expected: Mode,
        /// The mode byte found in the header.
        found: u8,
    },

    /// The Rice decoder ran out of input bits.
    #[error("unexpected end of data")]
    UnexpectedEnd,
}
