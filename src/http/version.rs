//! HTTP protocol versions as they appear on a start line.

use std::fmt;

use crate::translate::TranslationError;

/// Protocol name and version, e.g. `HTTP/1.1`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct HttpVersion {
    protocol: String,
    major: u8,
    minor: u8,
}

impl HttpVersion {
    /// `HTTP/1.0`, the oldest version the gateway speaks.
    #[must_use]
    pub fn http_1_0() -> Self { Self::new("HTTP", 1, 0) }

    /// `HTTP/1.1`
    #[must_use]
    pub fn http_1_1() -> Self { Self::new("HTTP", 1, 1) }

    fn new(protocol: &str, major: u8, minor: u8) -> Self {
        Self {
            protocol: protocol.to_owned(),
            major,
            minor,
        }
    }

    /// Parse `NAME/major.minor`. The protocol name is upper-cased.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidVersion`] when `text` does not have
    /// that shape.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdy_http::http::HttpVersion;
    ///
    /// assert_eq!(HttpVersion::parse("http/1.1").unwrap(), HttpVersion::http_1_1());
    /// assert!(HttpVersion::parse("HTTP/1").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, TranslationError> {
        let invalid = || TranslationError::InvalidVersion {
            value: text.to_owned(),
        };
        let trimmed = text.trim();
        let (protocol, numbers) = trimmed.split_once('/').ok_or_else(invalid)?;
        if protocol.is_empty() || protocol.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(invalid());
        }
        let (major, minor) = numbers.split_once('.').ok_or_else(invalid)?;
        let major = parse_digits(major).ok_or_else(invalid)?;
        let minor = parse_digits(minor).ok_or_else(invalid)?;
        Ok(Self {
            protocol: protocol.to_ascii_uppercase(),
            major,
            minor,
        })
    }

    #[must_use]
    pub fn protocol(&self) -> &str { &self.protocol }

    #[must_use]
    pub const fn major(&self) -> u8 { self.major }

    #[must_use]
    pub const fn minor(&self) -> u8 { self.minor }

    /// Whether connections stay open unless a message says otherwise.
    ///
    /// Only `HTTP/1.0` defaults to closing.
    #[must_use]
    pub fn is_keep_alive_default(&self) -> bool {
        !(self.protocol == "HTTP" && self.major == 1 && self.minor == 0)
    }
}

fn parse_digits(text: &str) -> Option<u8> {
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse().ok()
}

impl fmt::Display for HttpVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}.{}", self.protocol, self.major, self.minor)
    }
}
