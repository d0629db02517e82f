//! HTTP request methods.

use std::fmt;

use crate::translate::TranslationError;

/// HTTP request method.
///
/// Well-known methods get their own variant; any other valid token is kept
/// verbatim as [`Method::Extension`].
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Options,
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
    Trace,
    Connect,
    Extension(String),
}

impl Method {
    /// Parse a method token. Matching of well-known methods is case-sensitive.
    ///
    /// # Errors
    ///
    /// Returns [`TranslationError::InvalidMethod`] when the token is empty or
    /// contains whitespace or control characters.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdy_http::http::Method;
    ///
    /// assert_eq!(Method::parse("GET").unwrap(), Method::Get);
    /// assert_eq!(Method::parse("PURGE").unwrap().as_str(), "PURGE");
    /// assert!(Method::parse("GE T").is_err());
    /// ```
    pub fn parse(text: &str) -> Result<Self, TranslationError> {
        let token = text.trim();
        if token.is_empty() || token.chars().any(|c| c.is_whitespace() || c.is_control()) {
            return Err(TranslationError::InvalidMethod {
                value: text.to_owned(),
            });
        }
        Ok(match token {
            "OPTIONS" => Self::Options,
            "GET" => Self::Get,
            "HEAD" => Self::Head,
            "POST" => Self::Post,
            "PUT" => Self::Put,
            "PATCH" => Self::Patch,
            "DELETE" => Self::Delete,
            "TRACE" => Self::Trace,
            "CONNECT" => Self::Connect,
            other => Self::Extension(other.to_owned()),
        })
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Options => "OPTIONS",
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
            Self::Trace => "TRACE",
            Self::Connect => "CONNECT",
            Self::Extension(name) => name,
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}
