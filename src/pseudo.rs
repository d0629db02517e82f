//! Version-gated access to SPDY pseudo-headers.
//!
//! SPDY carries the HTTP start line inside the header block. SPDY/2 uses bare
//! names (`method`, `url`, ...) while SPDY/3 prefixes them with a colon and
//! renames `url` to `:path`. SPDY/3 also moves the HTTP `Host` header into a
//! `:host` pseudo-header.

use crate::{
    frame::{HeaderBlock, SpdyVersion},
    http::{HttpVersion, Method, Status},
    translate::TranslationError,
};

/// Start-line component carried as a pseudo-header.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PseudoHeader {
    Method,
    Url,
    Scheme,
    Version,
    Status,
    Host,
}

impl PseudoHeader {
    /// Header name used for this component by `version`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdy_http::{frame::SpdyVersion, pseudo::PseudoHeader};
    ///
    /// assert_eq!(PseudoHeader::Url.name(SpdyVersion::V2), "url");
    /// assert_eq!(PseudoHeader::Url.name(SpdyVersion::V3), ":path");
    /// ```
    #[must_use]
    pub const fn name(self, version: SpdyVersion) -> &'static str {
        if version.has_colon_pseudo_headers() {
            match self {
                Self::Method => ":method",
                Self::Url => ":path",
                Self::Scheme => ":scheme",
                Self::Version => ":version",
                Self::Status => ":status",
                Self::Host => ":host",
            }
        } else {
            match self {
                Self::Method => "method",
                Self::Url => "url",
                Self::Scheme => "scheme",
                Self::Version => "version",
                Self::Status => "status",
                Self::Host => "host",
            }
        }
    }

    /// First value of this pseudo-header in `block`.
    #[must_use]
    pub fn get(self, version: SpdyVersion, block: &HeaderBlock) -> Option<&str> {
        block.get(self.name(version))
    }

    /// First value of this pseudo-header, or a translation error naming it.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::MissingPseudoHeader`] when absent.
    pub fn require(
        self,
        version: SpdyVersion,
        block: &HeaderBlock,
    ) -> Result<&str, TranslationError> {
        self.get(version, block)
            .ok_or(TranslationError::MissingPseudoHeader {
                name: self.name(version),
            })
    }

    /// Replace this pseudo-header's value.
    pub fn set(self, version: SpdyVersion, block: &mut HeaderBlock, value: impl Into<String>) {
        block.set(self.name(version), value);
    }

    /// Remove this pseudo-header, returning whether it was present.
    pub fn remove(self, version: SpdyVersion, block: &mut HeaderBlock) -> bool {
        block.remove(self.name(version))
    }
}

/// Parse the request method.
///
/// # Errors
///
/// Returns an error when the header is missing or not a valid method token.
pub fn method(version: SpdyVersion, block: &HeaderBlock) -> Result<Method, TranslationError> {
    Method::parse(PseudoHeader::Method.require(version, block)?)
}

/// Parse the protocol version.
///
/// # Errors
///
/// Returns an error when the header is missing or malformed.
pub fn http_version(
    version: SpdyVersion,
    block: &HeaderBlock,
) -> Result<HttpVersion, TranslationError> {
    HttpVersion::parse(PseudoHeader::Version.require(version, block)?)
}

/// Parse the response status.
///
/// # Errors
///
/// Returns an error when the header is missing or malformed.
pub fn status(version: SpdyVersion, block: &HeaderBlock) -> Result<Status, TranslationError> {
    Status::parse(PseudoHeader::Status.require(version, block)?)
}

/// Request target (`url` in SPDY/2, `:path` in SPDY/3).
#[must_use]
pub fn url(version: SpdyVersion, block: &HeaderBlock) -> Option<&str> {
    PseudoHeader::Url.get(version, block)
}

/// Write the response status line.
pub fn set_status(version: SpdyVersion, block: &mut HeaderBlock, status: &Status) {
    PseudoHeader::Status.set(version, block, status.to_string());
}

/// Write the protocol version.
pub fn set_http_version(version: SpdyVersion, block: &mut HeaderBlock, http: &HttpVersion) {
    PseudoHeader::Version.set(version, block, http.to_string());
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(SpdyVersion::V2, "method", "url", "host")]
    #[case(SpdyVersion::V3, ":method", ":path", ":host")]
    fn names_follow_protocol_revision(
        #[case] version: SpdyVersion,
        #[case] method: &str,
        #[case] url: &str,
        #[case] host: &str,
    ) {
        assert_eq!(PseudoHeader::Method.name(version), method);
        assert_eq!(PseudoHeader::Url.name(version), url);
        assert_eq!(PseudoHeader::Host.name(version), host);
    }

    #[test]
    fn require_names_the_missing_header() {
        let block = HeaderBlock::new();
        assert_eq!(
            PseudoHeader::Status.require(SpdyVersion::V3, &block),
            Err(TranslationError::MissingPseudoHeader { name: ":status" })
        );
    }

    #[test]
    fn setters_write_start_line_components() {
        let mut block = HeaderBlock::new();
        set_status(SpdyVersion::V2, &mut block, &Status::bad_request());
        set_http_version(SpdyVersion::V2, &mut block, &HttpVersion::http_1_0());
        assert_eq!(block.get("status"), Some("400 Bad Request"));
        assert_eq!(block.get("version"), Some("HTTP/1.0"));
        assert_eq!(status(SpdyVersion::V2, &block), Ok(Status::bad_request()));
        assert_eq!(http_version(SpdyVersion::V2, &block), Ok(HttpVersion::http_1_0()));
    }

    #[test]
    fn method_lookup_ignores_other_revision_names() {
        let block = HeaderBlock::from_iter([("method", "GET")]);
        assert!(method(SpdyVersion::V2, &block).is_ok());
        assert!(method(SpdyVersion::V3, &block).is_err());
    }
}
