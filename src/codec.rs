//! Top-level encode/decode orchestration.
//!
//! The encode path wires the stages in order — ALP scaling (floats only),
//! predictive delta, ZigZag, Golomb-Rice — and prefixes the 24-byte header;
//! the decode path runs the same stages in reverse, driven entirely by the
//! header fields. See the [`header`](crate::header) module for the wire
//! layout.
//!
//! Two-element inputs have no residuals, so their encoded form is exactly
//! the header: both original values travel in the `first`/`second` fields
//! and the payload is empty.

use crate::alp;
use crate::delta;
use crate::error::AlpineError;
use crate::header::{Header, Mode, HEADER_SIZE};
use crate::rice::{self, auto_rice_param, PackedData};
use crate::zigzag;

/// Options controlling an encode call.
///
/// Non-positive `rice_param` selects automatic parameter detection from the
/// delta residuals. Negative `alp_exp` selects automatic exponent detection;
/// note that `0` is also treated as "unset" and coerced to auto, so exponent
/// 0 cannot be requested explicitly — auto-detection simply lands on an
/// exact exponent for such data.
#[derive(Debug, Clone, Copy)]
pub struct EncodeOptions {
    /// Golomb-Rice parameter; `<= 0` means auto, positive values are clamped
    /// to `[1, 255]` so they fit the header byte.
    pub rice_param: i32,
    /// ALP decimal exponent (float encoder only); `< 0` means auto-detect,
    /// `1..=17` is used as-is.
    pub alp_exp: i32,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            rice_param: 0,
            alp_exp: -1,
        }
    }
}

/// Compress an f64 slice losslessly.
///
/// Runs ALP scaling, predictive delta, ZigZag, and Golomb-Rice coding, and
/// returns the header-prefixed byte stream. Inputs that have no exact
/// decimal representation at any exponent are scaled with exponent 0, which
/// drops fractional parts on decode; see the crate docs.
///
/// # Example
/// ```
/// use alpine_rs::{decode_float, encode_float, EncodeOptions};
///
/// let data = vec![10.5, 11.2, 12.8, 13.1, 14.5];
/// let encoded = encode_float(&data, EncodeOptions::default()).unwrap();
/// assert_eq!(decode_float(&encoded).unwrap(), data);
/// ```
pub fn encode_float(input: &[f64], opts: EncodeOptions) -> Result<Vec<u8>, AlpineError> {
    if input.len() < 2 {
        return Err(AlpineError::TooFewSamples(input.len()));
    }

    // 0 means "unset" here; explicit exponent 0 is not reachable through
    // this surface.
    let exp_hint = if opts.alp_exp == 0 { -1 } else { opts.alp_exp };

    let (scaled, exp) = alp::encode(input, exp_hint)?;
    let (residuals, first, second) = delta::encode(&scaled)?;
    let rice_param = resolve_rice_param(opts.rice_param, &residuals);
    let packed = pack_residuals(&residuals, rice_param)?;

    let header = Header {
        mode: Mode::Float.to_byte(),
        rice_param: rice_param as u8,
        alp_exp: exp,
        first,
        second,
        value_count: input.len() as u32,
    };

    Ok(assemble(&header, &packed))
}

/// Compress an i64 slice.
///
/// Same pipeline as [`encode_float`] minus the ALP stage; the input feeds
/// the predictive delta directly and the header records exponent 0.
///
/// # Example
/// ```
/// use alpine_rs::{decode_int, encode_int, EncodeOptions};
///
/// let data = vec![1_700_000_000i64, 1_700_000_060, 1_700_000_120];
/// let encoded = encode_int(&data, EncodeOptions::default()).unwrap();
/// assert_eq!(decode_int(&encoded).unwrap(), data);
/// ```
pub fn encode_int(input: &[i64], opts: EncodeOptions) -> Result<Vec<u8>, AlpineError> {
    if input.len() < 2 {
        return Err(AlpineError::TooFewSamples(input.len()));
    }

    let (residuals, first, second) = delta::encode(input)?;
    let rice_param = resolve_rice_param(opts.rice_param, &residuals);
    let packed = pack_residuals(&residuals, rice_param)?;

    let header = Header {
        mode: Mode::Int.to_byte(),
        rice_param: rice_param as u8,
        alp_exp: 0,
        first,
        second,
        value_count: input.len() as u32,
    };

    Ok(assemble(&header, &packed))
}

/// Decompress a buffer produced by [`encode_float`].
pub fn decode_float(encoded: &[u8]) -> Result<Vec<f64>, AlpineError> {
    let header = checked_header(encoded, Mode::Float)?;
    let scaled = unpack_to_scaled(encoded, &header)?;
    Ok(alp::decode(&scaled, header.alp_exp))
}

/// Decompress a buffer produced by [`encode_int`].
pub fn decode_int(encoded: &[u8]) -> Result<Vec<i64>, AlpineError> {
    let header = checked_header(encoded, Mode::Int)?;
    unpack_to_scaled(encoded, &header)
}

/// Pick the effective Rice parameter for an encode call.
fn resolve_rice_param(hint: i32, residuals: &[i64]) -> u32 {
    if hint <= 0 {
        auto_rice_param(residuals)
    } else {
        hint.clamp(1, 255) as u32
    }
}

/// ZigZag and Rice-encode the residuals; empty residuals produce an empty
/// payload.
fn pack_residuals(residuals: &[i64], rice_param: u32) -> Result<PackedData, AlpineError> {
    if residuals.is_empty() {
        return Ok(PackedData::default());
    }
    let zigzagged = zigzag::encode(residuals)?;
    rice::encode(&zigzagged, rice_param)
}

fn assemble(header: &Header, packed: &PackedData) -> Vec<u8> {
    let mut output = Vec::with_capacity(HEADER_SIZE + packed.data.len());
    output.extend_from_slice(&header.marshal());
    output.extend_from_slice(&packed.data);
    output
}

/// Parse, validate, and mode-check the header of an encoded buffer.
fn checked_header(encoded: &[u8], expected: Mode) -> Result<Header, AlpineError> {
    let header = Header::unmarshal(encoded)?;
    header.validate()?;
    if header.mode != expected.to_byte() {
        return Err(AlpineError::ModeMismatch {
            expected,
            found: header.mode,
        });
    }
    Ok(header)
}

/// Rice-decode, un-ZigZag, and delta-decode the payload into the scaled
/// integer sequence.
fn unpack_to_scaled(encoded: &[u8], header: &Header) -> Result<Vec<i64>, AlpineError> {
    let payload = &encoded[HEADER_SIZE..];
    let delta_count = header.value_count as usize - 2;

    let residuals = if delta_count > 0 {
        let zigzagged = rice::decode(payload, delta_count, header.rice_param as u32)?;
        zigzag::decode(&zigzagged)?
    } else {
        Vec::new()
    };

    Ok(delta::decode(&residuals, header.first, header.second))
}

/// Fluent builder over [`encode_float`].
///
/// ```
/// use alpine_rs::FloatEncoder;
///
/// let data = vec![10.5, 11.2, 12.8];
/// let encoded = FloatEncoder::new(&data).precision(1).rice_param(4).encode().unwrap();
/// assert_eq!(alpine_rs::decode_float(&encoded).unwrap(), data);
/// ```
#[derive(Debug, Clone)]
pub struct FloatEncoder<'a> {
    data: &'a [f64],
    opts: EncodeOptions,
}

impl<'a> FloatEncoder<'a> {
    /// Create a builder for `data` with both parameters set to auto.
    pub fn new(data: &'a [f64]) -> Self {
        FloatEncoder {
            data,
            opts: EncodeOptions::default(),
        }
    }

    /// Set an explicit Golomb-Rice parameter; `<= 0` restores auto.
    pub fn rice_param(mut self, param: i32) -> Self {
        self.opts.rice_param = param;
        self
    }

    /// Set an explicit ALP exponent; `<= 0` restores auto-detection (see
    /// [`EncodeOptions::alp_exp`]).
    pub fn precision(mut self, exp: i32) -> Self {
        self.opts.alp_exp = exp;
        self
    }

    /// Run the pipeline and return the encoded bytes.
    pub fn encode(self) -> Result<Vec<u8>, AlpineError> {
        encode_float(self.data, self.opts)
    }
}

/// Fluent builder over [`encode_int`].
#[derive(Debug, Clone)]
pub struct IntEncoder<'a> {
    data: &'a [i64],
    opts: EncodeOptions,
}

impl<'a> IntEncoder<'a> {
    /// Create a builder for `data` with the Rice parameter set to auto.
    pub fn new(data: &'a [i64]) -> Self {
        IntEncoder {
            data,
            opts: EncodeOptions::default(),
        }
    }

    /// Set an explicit Golomb-Rice parameter; `<= 0` restores auto.
    pub fn rice_param(mut self, param: i32) -> Self {
        self.opts.rice_param = param;
        self
    }

    /// Run the pipeline and return the encoded bytes.
    pub fn encode(self) -> Result<Vec<u8>, AlpineError> {
        encode_int(self.data, self.opts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn opts(rice_param: i32, alp_exp: i32) -> EncodeOptions {
        EncodeOptions {
            rice_param,
            alp_exp,
        }
    }

    #[test]
    fn test_float_roundtrip_linear() {
        let input = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let encoded = encode_float(&input, EncodeOptions::default()).unwrap();

        // Linear data: residuals [0,0,0], auto rice 1, payload 3 bits.
        assert_eq!(encoded.len(), 25);
        let header = Header::unmarshal(&encoded).unwrap();
        assert_eq!(header.mode, Mode::Float.to_byte());
        assert_eq!(header.rice_param, 1);
        assert_eq!(header.alp_exp, 1);
        assert_eq!(header.first, 10);
        assert_eq!(header.second, 20);
        assert_eq!(header.value_count, 5);
        assert_eq!(encoded[HEADER_SIZE], 0b1110_0000);

        assert_eq!(decode_float(&encoded).unwrap(), input);
    }

    #[test]
    fn test_int_roundtrip_linear() {
        let input = vec![10i64, 15, 20, 25, 30];
        let encoded = encode_int(&input, EncodeOptions::default()).unwrap();

        // Auto rice comes from the residuals [0,0,0], so the payload has the
        // same one-byte shape as the float case.
        assert_eq!(encoded.len(), 25);
        let header = Header::unmarshal(&encoded).unwrap();
        assert_eq!(header.mode, Mode::Int.to_byte());
        assert_eq!(header.rice_param, 1);
        assert_eq!(header.alp_exp, 0);

        assert_eq!(decode_int(&encoded).unwrap(), input);
    }

    #[test]
    fn test_float_roundtrip_decimals() {
        let input = vec![3.14159, 2.71828, 1.41421, 1.73205];
        let encoded = encode_float(&input, opts(8, -1)).unwrap();
        assert_eq!(decode_float(&encoded).unwrap(), input);
    }

    #[test]
    fn test_float_explicit_precision() {
        let input = vec![1.25, 2.5, 3.75, 5.0];
        let encoded = encode_float(&input, opts(0, 2)).unwrap();
        let header = Header::unmarshal(&encoded).unwrap();
        assert_eq!(header.alp_exp, 2);
        assert_eq!(decode_float(&encoded).unwrap(), input);
    }

    #[test]
    fn test_float_precision_zero_means_auto() {
        let input = vec![4.0, 5.0, 6.0];
        let encoded = encode_float(&input, opts(0, 0)).unwrap();
        // Detection runs and lands on exponent 1 for integral data.
        assert_eq!(Header::unmarshal(&encoded).unwrap().alp_exp, 1);
        assert_eq!(decode_float(&encoded).unwrap(), input);
    }

    #[test]
    fn test_explicit_rice_param_recorded() {
        let input = vec![10i64, 20, 35, 50, 70];
        let encoded = encode_int(&input, opts(16, 0)).unwrap();
        assert_eq!(Header::unmarshal(&encoded).unwrap().rice_param, 16);
        assert_eq!(decode_int(&encoded).unwrap(), input);
    }

    #[test]
    fn test_rice_hint_clamped_to_header_range() {
        let input = vec![1i64, 2, 3];
        let encoded = encode_int(&input, opts(1000, 0)).unwrap();
        assert_eq!(Header::unmarshal(&encoded).unwrap().rice_param, 255);
        assert_eq!(decode_int(&encoded).unwrap(), input);
    }

    #[test]
    fn test_two_elements_header_only() {
        let floats = encode_float(&[1.5, 99.25], EncodeOptions::default()).unwrap();
        assert_eq!(floats.len(), HEADER_SIZE);
        assert_eq!(decode_float(&floats).unwrap(), vec![1.5, 99.25]);

        let ints = encode_int(&[i64::MIN, i64::MAX], EncodeOptions::default()).unwrap();
        assert_eq!(ints.len(), HEADER_SIZE);
        assert_eq!(decode_int(&ints).unwrap(), vec![i64::MIN, i64::MAX]);
    }

    #[test]
    fn test_too_few_samples() {
        assert_eq!(
            encode_float(&[], EncodeOptions::default()),
            Err(AlpineError::TooFewSamples(0))
        );
        assert_eq!(
            encode_float(&[1.0], EncodeOptions::default()),
            Err(AlpineError::TooFewSamples(1))
        );
        assert_eq!(
            encode_int(&[7], EncodeOptions::default()),
            Err(AlpineError::TooFewSamples(1))
        );
    }

    #[test]
    fn test_exponent_out_of_range_propagates() {
        assert_eq!(
            encode_float(&[1.0, 2.0], opts(0, 18)),
            Err(AlpineError::ExponentOutOfRange(18))
        );
    }

    #[test]
    fn test_mode_mismatch() {
        let from_int = encode_int(&[1i64, 2, 3], EncodeOptions::default()).unwrap();
        assert_eq!(
            decode_float(&from_int),
            Err(AlpineError::ModeMismatch {
                expected: Mode::Float,
                found: Mode::Int.to_byte(),
            })
        );

        let from_float = encode_float(&[1.0, 2.0, 3.0], EncodeOptions::default()).unwrap();
        assert_eq!(
            decode_int(&from_float),
            Err(AlpineError::ModeMismatch {
                expected: Mode::Int,
                found: Mode::Float.to_byte(),
            })
        );
    }

    #[test]
    fn test_decode_unknown_mode_byte() {
        let mut encoded = encode_int(&[1i64, 2, 3], EncodeOptions::default()).unwrap();
        encoded[0] = 7;
        assert_eq!(
            decode_int(&encoded),
            Err(AlpineError::ModeMismatch {
                expected: Mode::Int,
                found: 7,
            })
        );
    }

    #[test]
    fn test_decode_too_short() {
        assert_eq!(
            decode_float(&[0u8; 10]),
            Err(AlpineError::HeaderTooShort { needed: 24, got: 10 })
        );
        assert_eq!(
            decode_int(&[]),
            Err(AlpineError::HeaderTooShort { needed: 24, got: 0 })
        );
    }

    #[test]
    fn test_decode_corrupt_header() {
        let mut encoded = encode_int(&[5i64, 6, 7], EncodeOptions::default()).unwrap();

        let mut zero_rice = encoded.clone();
        zero_rice[1] = 0;
        assert!(matches!(
            decode_int(&zero_rice),
            Err(AlpineError::InvalidHeader(_))
        ));

        // value_count < 2
        encoded[20..24].copy_from_slice(&1u32.to_be_bytes());
        assert!(matches!(
            decode_int(&encoded),
            Err(AlpineError::InvalidHeader(_))
        ));
    }

    #[test]
    fn test_decode_truncated_payload() {
        let input: Vec<i64> = (0..64).map(|i| i * i).collect();
        let encoded = encode_int(&input, EncodeOptions::default()).unwrap();
        let truncated = &encoded[..encoded.len() - 1];
        assert_eq!(decode_int(truncated), Err(AlpineError::UnexpectedEnd));
    }

    #[test]
    fn test_int_negative_walk() {
        let input = vec![-1000i64, -800, -650, -700, -400, 0, 350];
        let encoded = encode_int(&input, EncodeOptions::default()).unwrap();
        assert_eq!(decode_int(&encoded).unwrap(), input);
    }

    #[test]
    fn test_float_builder() {
        let data = vec![10.5, 11.2, 12.8, 13.1, 14.5];
        let encoded = FloatEncoder::new(&data).encode().unwrap();
        assert_eq!(decode_float(&encoded).unwrap(), data);

        let explicit = FloatEncoder::new(&data)
            .rice_param(8)
            .precision(1)
            .encode()
            .unwrap();
        let header = Header::unmarshal(&explicit).unwrap();
        assert_eq!(header.rice_param, 8);
        assert_eq!(header.alp_exp, 1);
        assert_eq!(decode_float(&explicit).unwrap(), data);
    }

    #[test]
    fn test_int_builder() {
        let data = vec![100i64, 105, 109, 120, 118];
        let encoded = IntEncoder::new(&data).rice_param(2).encode().unwrap();
        assert_eq!(Header::unmarshal(&encoded).unwrap().rice_param, 2);
        assert_eq!(decode_int(&encoded).unwrap(), data);
    }

    #[test]
    fn test_constant_sequences() {
        let floats = vec![7.25; 100];
        let encoded = encode_float(&floats, EncodeOptions::default()).unwrap();
        assert_eq!(decode_float(&encoded).unwrap(), floats);

        let ints = vec![i64::MIN; 50];
        let encoded = encode_int(&ints, EncodeOptions::default()).unwrap();
        assert_eq!(decode_int(&encoded).unwrap(), ints);
    }

    #[test]
    fn test_payload_ignores_trailing_garbage() {
        let input = vec![1i64, 2, 3, 4, 5];
        let mut encoded = encode_int(&input, EncodeOptions::default()).unwrap();
        encoded.push(0xFF);
        assert_eq!(decode_int(&encoded).unwrap(), input);
    }
}
