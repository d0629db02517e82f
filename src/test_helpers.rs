#![cfg(any(test, feature = "test-helpers"))]
//! Frame builders shared by unit and integration tests.
//!
//! The builders produce well-formed header blocks for the requested protocol
//! revision so tests only spell out the part they are exercising.

use bytes::Bytes;

use crate::{
    frame::{
        DataFrame,
        HeaderBlock,
        HeadersFrame,
        RstStreamFrame,
        SpdyFrame,
        SpdyVersion,
        StreamId,
        StreamStatus,
        SynReplyFrame,
        SynStreamFrame,
    },
    pseudo::PseudoHeader,
};

/// Complete request pseudo-headers for `version`.
///
/// SPDY/3 blocks include `:host: example.com`.
#[must_use]
pub fn request_headers(version: SpdyVersion, method: &str, path: &str) -> HeaderBlock {
    let mut block = HeaderBlock::new();
    PseudoHeader::Method.set(version, &mut block, method);
    PseudoHeader::Url.set(version, &mut block, path);
    PseudoHeader::Version.set(version, &mut block, "HTTP/1.1");
    PseudoHeader::Scheme.set(version, &mut block, "https");
    if version.has_colon_pseudo_headers() {
        PseudoHeader::Host.set(version, &mut block, "example.com");
    }
    block
}

/// Response pseudo-headers for `version` with `HTTP/1.1`.
#[must_use]
pub fn response_headers(version: SpdyVersion, status: &str) -> HeaderBlock {
    let mut block = HeaderBlock::new();
    PseudoHeader::Status.set(version, &mut block, status);
    PseudoHeader::Version.set(version, &mut block, "HTTP/1.1");
    block
}

/// Response pseudo-headers plus the url of a pushed resource.
#[must_use]
pub fn pushed_headers(version: SpdyVersion, status: &str, url: &str) -> HeaderBlock {
    let mut block = response_headers(version, status);
    PseudoHeader::Url.set(version, &mut block, url);
    block
}

/// Client-initiated `SYN_STREAM`.
#[must_use]
pub fn syn_stream(id: u32, headers: HeaderBlock, is_last: bool) -> SpdyFrame {
    pushed_stream(id, 0, 0, headers, is_last)
}

/// `SYN_STREAM` with an explicit associated stream and priority.
#[must_use]
pub fn pushed_stream(
    id: u32,
    associated: u32,
    priority: u8,
    headers: HeaderBlock,
    is_last: bool,
) -> SpdyFrame {
    let mut frame = SynStreamFrame::new(StreamId::new(id), StreamId::new(associated), priority);
    frame.headers = headers;
    frame.is_last = is_last;
    frame.into()
}

#[must_use]
pub fn syn_reply(id: u32, headers: HeaderBlock, is_last: bool) -> SpdyFrame {
    let mut frame = SynReplyFrame::new(StreamId::new(id));
    frame.headers = headers;
    frame.is_last = is_last;
    frame.into()
}

#[must_use]
pub fn headers(id: u32, pairs: &[(&str, &str)], is_last: bool) -> SpdyFrame {
    let mut frame = HeadersFrame::new(StreamId::new(id));
    frame.headers = pairs.iter().copied().collect();
    frame.is_last = is_last;
    frame.into()
}

#[must_use]
pub fn data(id: u32, payload: &[u8], is_last: bool) -> SpdyFrame {
    DataFrame::new(StreamId::new(id), Bytes::copy_from_slice(payload), is_last).into()
}

#[must_use]
pub fn rst_stream(id: u32, status: StreamStatus) -> SpdyFrame {
    RstStreamFrame::new(StreamId::new(id), status).into()
}

