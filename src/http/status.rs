//! HTTP response status lines.

use std::fmt;

use crate::translate::TranslationError;

/// Status code plus reason phrase.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Status {
    code: u16,
    reason: String,
}

impl Status {
    /// Status with the canonical reason phrase for `code`.
    #[must_use]
    pub fn from_code(code: u16) -> Self {
        Self {
            code,
            reason: canonical_reason(code).to_owned(),
        }
    }

    /// `200 OK`
    #[must_use]
    pub fn ok() -> Self { Self::from_code(200) }

    /// `400 Bad Request`
    #[must_use]
    pub fn bad_request() -> Self { Self::from_code(400) }

    /// Parse `"<code>"` or `"<code> <reason>"`.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidStatus`] unless the code is three
    /// ASCII digits in `100..=999`.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdy_http::http::Status;
    ///
    /// let status = Status::parse("404 Gone Fishing").unwrap();
    /// assert_eq!(status.code(), 404);
    /// assert_eq!(status.reason(), "Gone Fishing");
    /// assert_eq!(Status::parse("200").unwrap(), Status::ok());
    /// assert!(Status::parse("abc").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, TranslationError> {
        let invalid = || TranslationError::InvalidStatus {
            value: text.to_owned(),
        };
        let trimmed = text.trim();
        let (code, reason) = match trimmed.split_once(' ') {
            Some((code, reason)) => (code, Some(reason)),
            None => (trimmed, None),
        };
        if code.len() != 3 || !code.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        let code: u16 = code.parse().map_err(|_| invalid())?;
        if code < 100 {
            return Err(invalid());
        }
        Ok(match reason {
            Some(reason) => Self {
                code,
                reason: reason.to_owned(),
            },
            None => Self::from_code(code),
        })
    }

    #[must_use]
    pub const fn code(&self) -> u16 { self.code }

    #[must_use]
    pub fn reason(&self) -> &str { &self.reason }
}

fn canonical_reason(code: u16) -> &'static str {
    match code {
        100 => "Continue",
        101 => "Switching Protocols",
        102 => "Processing",
        200 => "OK",
        201 => "Created",
        202 => "Accepted",
        203 => "Non-Authoritative Information",
        204 => "No Content",
        205 => "Reset Content",
        206 => "Partial Content",
        207 => "Multi-Status",
        300 => "Multiple Choices",
        301 => "Moved Permanently",
        302 => "Found",
        303 => "See Other",
        304 => "Not Modified",
        305 => "Use Proxy",
        307 => "Temporary Redirect",
        400 => "Bad Request",
        401 => "Unauthorized",
        402 => "Payment Required",
        403 => "Forbidden",
        404 => "Not Found",
        405 => "Method Not Allowed",
        406 => "Not Acceptable",
        407 => "Proxy Authentication Required",
        408 => "Request Timeout",
        409 => "Conflict",
        410 => "Gone",
        411 => "Length Required",
        412 => "Precondition Failed",
        413 => "Request Entity Too Large",
        414 => "Request-URI Too Long",
        415 => "Unsupported Media Type",
        416 => "Requested Range Not Satisfiable",
        417 => "Expectation Failed",
        422 => "Unprocessable Entity",
        423 => "Locked",
        424 => "Failed Dependency",
        426 => "Upgrade Required",
        500 => "Internal Server Error",
        501 => "Not Implemented",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        504 => "Gateway Timeout",
        505 => "HTTP Version Not Supported",
        506 => "Variant Also Negotiates",
        507 => "Insufficient Storage",
        510 => "Not Extended",
        100..=199 => "Informational",
        200..=299 => "Successful",
        300..=399 => "Redirection",
        400..=499 => "Client Error",
        500..=599 => "Server Error",
        _ => "Unknown Status",
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.code, self.reason)
    }
}
