//! Header translation between SPDY header blocks and HTTP/1.x messages.
//!
//! The translator consumes a frame's header block, lifts the pseudo-headers
//! into an HTTP start line and copies every remaining pair verbatim, in order
//! and with duplicates. Headers that lose their meaning once a body has been
//! fully reassembled on a multiplexed session are dropped.

use thiserror::Error;

use crate::{
    frame::{HeaderBlock, SpdyVersion},
    http::{FullHttpRequest, FullHttpResponse, HttpMessage, names},
    pseudo::{self, PseudoHeader},
};

/// Reason a header block could not be turned into an HTTP message.
///
/// The decoder answers these on the wire (bad-request reply or
/// `PROTOCOL_ERROR` reset); they never abort decoding.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TranslationError {
    /// A required pseudo-header is absent.
    #[error("missing pseudo-header {name}")]
    MissingPseudoHeader {
        /// Header name for the session's protocol revision.
        name: &'static str,
    },
    /// The method pseudo-header is not a valid token.
    #[error("invalid method: {value:?}")]
    InvalidMethod { value: String },
    /// The request target is empty or contains whitespace.
    #[error("invalid request target: {value:?}")]
    InvalidUri { value: String },
    /// The version pseudo-header is not `NAME/major.minor`.
    #[error("invalid HTTP version: {value:?}")]
    InvalidVersion { value: String },
    /// The status pseudo-header is not a three-digit code.
    #[error("invalid status: {value:?}")]
    InvalidStatus { value: String },
}

/// Build a request from a client-initiated `SYN_STREAM` header block.
///
/// Requires the method, url, scheme and version pseudo-headers, plus `:host`
/// on SPDY/3, which becomes the HTTP `Host` header.
///
/// # Errors
///
/// Returns a [`TranslationError`] when a required pseudo-header is missing or
/// malformed.
///
/// # Examples
///
/// ```
/// use spdy_http::{frame::{HeaderBlock, SpdyVersion}, translate::create_http_request};
///
/// let block = HeaderBlock::from_iter([
///     (":method", "GET"),
///     (":path", "/index.html"),
///     (":scheme", "https"),
///     (":version", "HTTP/1.1"),
///     (":host", "example.com"),
///     ("accept", "*/*"),
/// ]);
/// let message = create_http_request(SpdyVersion::V3, block).expect("valid request");
/// let request = message.as_request().expect("request");
/// assert_eq!(request.uri(), "/index.html");
/// assert_eq!(request.headers().get("host"), Some("example.com"));
/// ```
pub fn create_http_request(
    version: SpdyVersion,
    mut block: HeaderBlock,
) -> Result<HttpMessage, TranslationError> {
    let method = pseudo::method(version, &block)?;
    let uri = PseudoHeader::Url.require(version, &block)?;
    if uri.is_empty() || uri.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(TranslationError::InvalidUri {
            value: uri.to_owned(),
        });
    }
    let uri = uri.to_owned();
    let http_version = pseudo::http_version(version, &block)?;
    PseudoHeader::Scheme.require(version, &block)?;
    let host = if version.has_colon_pseudo_headers() {
        Some(PseudoHeader::Host.require(version, &block)?.to_owned())
    } else {
        None
    };

    for header in [
        PseudoHeader::Method,
        PseudoHeader::Url,
        PseudoHeader::Version,
        PseudoHeader::Scheme,
    ] {
        header.remove(version, &mut block);
    }

    let mut message = HttpMessage::from(FullHttpRequest::new(http_version, method, uri));
    if let Some(host) = host {
        PseudoHeader::Host.remove(version, &mut block);
        message.set_host(host);
    }
    message.headers_mut().extend(block);

    // Connection management belongs to the SPDY session, not the message.
    message.set_keep_alive(true);
    message.headers_mut().remove(names::TRANSFER_ENCODING);

    Ok(message)
}

/// Build a response from a `SYN_REPLY` or server-initiated `SYN_STREAM`
/// header block.
///
/// Requires the status and version pseudo-headers. Every other pair,
/// including any url or scheme pseudo-header of a pushed stream, is copied
/// through unchanged.
///
/// # Errors
///
/// Returns a [`TranslationError`] when a required pseudo-header is missing or
/// malformed.
pub fn create_http_response(
    version: SpdyVersion,
    mut block: HeaderBlock,
) -> Result<HttpMessage, TranslationError> {
    let status = pseudo::status(version, &block)?;
    let http_version = pseudo::http_version(version, &block)?;
    PseudoHeader::Status.remove(version, &mut block);
    PseudoHeader::Version.remove(version, &mut block);

    let mut message = HttpMessage::from(FullHttpResponse::new(http_version, status));
    message.headers_mut().extend(block);

    message.set_keep_alive(true);
    let headers = message.headers_mut();
    headers.remove(names::TRANSFER_ENCODING);
    headers.remove(names::TRAILER);

    Ok(message)
}

#[cfg(test)]
mod tests;
