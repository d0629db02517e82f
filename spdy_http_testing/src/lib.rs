//! Utilities for driving a [`SpdyHttpDecoder`](spdy_http::SpdyHttpDecoder)
//! in tests.
//!
//! Frame builders come from `spdy_http::test_helpers`; this crate adds
//! decoder fixtures, a one-call driver and shared log capture.
//!
//! ```rust
//! use spdy_http::frame::SpdyVersion;
//! use spdy_http_testing::{decode_frames, request_headers, spdy3_decoder, syn_stream};
//!
//! let out = decode_frames(
//!     &mut spdy3_decoder(),
//!     [syn_stream(1, request_headers(SpdyVersion::V3, "GET", "/"), true)],
//! )
//! .expect("request decodes");
//! assert_eq!(out.messages().count(), 1);
//! ```

pub mod helpers;
pub mod logging;

pub use helpers::{decode_frames, spdy2_decoder, spdy3_decoder};
pub use logging::{LoggerHandle, logger};
pub use spdy_http::test_helpers::{
    data,
    headers,
    pushed_headers,
    pushed_stream,
    request_headers,
    response_headers,
    rst_stream,
    syn_reply,
    syn_stream,
};
