//! Supported SPDY protocol revisions.

use derive_more::Display;

use crate::error::ConfigError;

/// Oldest protocol revision the decoder understands.
pub const SPDY_MIN_VERSION: u8 = 2;
/// Newest protocol revision the decoder understands.
pub const SPDY_MAX_VERSION: u8 = 3;

/// A validated SPDY protocol revision.
///
/// # Examples
///
/// ```
/// use spdy_http::frame::SpdyVersion;
/// assert!(SpdyVersion::new(3).is_ok());
/// assert!(SpdyVersion::new(4).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[display("{_0}")]
pub struct SpdyVersion(u8);

impl SpdyVersion {
    pub const V2: Self = Self(2);
    pub const V3: Self = Self(3);

    /// Validate a raw protocol revision.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedVersion`] when `version` lies outside
    /// [`SPDY_MIN_VERSION`]..=[`SPDY_MAX_VERSION`].
    pub const fn new(version: u8) -> Result<Self, ConfigError> {
        if version < SPDY_MIN_VERSION || version > SPDY_MAX_VERSION {
            return Err(ConfigError::UnsupportedVersion { version });
        }
        Ok(Self(version))
    }

    /// Raw revision number.
    #[must_use]
    pub const fn get(self) -> u8 { self.0 }

    /// Whether pseudo-headers use the colon-prefixed names introduced in
    /// SPDY/3 (including the dedicated `:host` header).
    #[must_use]
    pub const fn has_colon_pseudo_headers(self) -> bool { self.0 >= 3 }
}

impl TryFrom<u8> for SpdyVersion {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, Self::Error> { Self::new(value) }
}
