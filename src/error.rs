//! Canonical error types for the crate.
//!
//! [`ConfigError`] covers construction-time validation and [`DecodeError`]
//! covers the single runtime failure the decoder reports to its caller.
//! [`TableFull`] never leaves the decoder; it becomes a `REFUSED_STREAM`
//! reset.
//! Header translation failures are answered on the wire and never surface
//! here; see [`TranslationError`](crate::translate::TranslationError).

use std::num::NonZeroUsize;

use thiserror::Error;

use crate::frame::{SPDY_MAX_VERSION, SPDY_MIN_VERSION, StreamId};

/// Invalid decoder configuration.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// The requested SPDY revision is not supported.
    #[error(
        "unsupported version: {version} (expected {min}..={max})",
        min = SPDY_MIN_VERSION,
        max = SPDY_MAX_VERSION
    )]
    UnsupportedVersion {
        /// Revision that was requested.
        version: u8,
    },
    /// `max_content_length` must be a positive integer.
    #[error("max_content_length must be a positive integer, got 0")]
    ZeroMaxContentLength,
}

/// A bounded [`StreamTable`](crate::stream_table::StreamTable) refused a new
/// stream.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("stream table full: {max_streams} streams pending")]
pub struct TableFull {
    /// Stream that was refused.
    pub stream_id: StreamId,
    /// Configured bound.
    pub max_streams: NonZeroUsize,
}

/// Failure reported by [`SpdyHttpDecoder::decode`](crate::decoder::SpdyHttpDecoder::decode).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    /// A data frame would push a stream's body past the configured limit.
    ///
    /// The stream's pending message has already been discarded.
    #[error("HTTP content length exceeded {limit} bytes.")]
    ContentTooLarge {
        /// Stream whose body overflowed.
        stream_id: StreamId,
        /// Body size the frame would have produced.
        attempted: usize,
        /// Configured maximum content length.
        limit: NonZeroUsize,
    },
}
