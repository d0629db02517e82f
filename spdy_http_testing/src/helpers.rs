//! Decoder fixtures and drivers.

use rstest::fixture;
use spdy_http::{
    DEFAULT_MAX_CONTENT_LENGTH,
    DecodeError,
    DecodeOutput,
    DecoderConfig,
    SpdyFrame,
    SpdyHttpDecoder,
    StreamTable,
};

fn decoder_for(version: u8) -> SpdyHttpDecoder {
    SpdyHttpDecoder::new(DecoderConfig::new(version, DEFAULT_MAX_CONTENT_LENGTH))
        .expect("default limits are valid")
}

/// SPDY/2 decoder with the default content limit.
#[fixture]
#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
pub fn spdy2_decoder() -> SpdyHttpDecoder { decoder_for(2) }

/// SPDY/3 decoder with the default content limit.
#[fixture]
#[allow(
    unused_braces,
    reason = "rustc false positive for single line rstest fixtures"
)]
pub fn spdy3_decoder() -> SpdyHttpDecoder { decoder_for(3) }

/// Feed `frames` to `decoder` and return everything it produced.
///
/// # Errors
///
/// Propagates the first [`DecodeError`] raised by the decoder.
pub fn decode_frames<T, I>(
    decoder: &mut SpdyHttpDecoder<T>,
    frames: I,
) -> Result<DecodeOutput, DecodeError>
where
    T: StreamTable,
    I: IntoIterator<Item = SpdyFrame>,
{
    let mut out = DecodeOutput::new();
    decoder.decode_all(frames, &mut out)?;
    Ok(out)
}
