#![doc(html_root_url = "https://docs.rs/spdy_http/latest")]
//! Public API for the `spdy_http` library.
//!
//! This crate turns parsed SPDY/2 and SPDY/3 frames into complete HTTP/1.x
//! request and response messages, one message per stream. Frame parsing and
//! header-block decompression happen upstream; HTTP serialisation happens
//! downstream.

pub mod config;
pub mod decoder;
pub mod error;
pub mod extension;
pub mod frame;
pub mod headers;
pub mod http;
pub mod pseudo;
pub mod stream_table;
pub mod test_helpers;
pub mod translate;

pub use config::{DEFAULT_MAX_CONTENT_LENGTH, DecoderConfig, ValidatedConfig};
pub use decoder::{DecodeOutput, Inbound, SpdyHttpDecoder};
pub use error::{ConfigError, DecodeError, TableFull};
pub use frame::{SpdyFrame, SpdyVersion, StreamId, StreamStatus};
pub use headers::Headers;
pub use http::{FullHttpRequest, FullHttpResponse, HttpMessage};
pub use stream_table::{BoundedStreamTable, StreamTable};
pub use translate::TranslationError;
