//! Decoder configuration.
//!
//! [`DecoderConfig`] is the raw, deserialisable form; [`ValidatedConfig`] is
//! what the decoder holds once the values have been checked.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::{error::ConfigError, frame::SpdyVersion};

/// Maximum body size used when none is configured (1 MiB).
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 1024 * 1024;

/// Construction-time settings for [`SpdyHttpDecoder`](crate::decoder::SpdyHttpDecoder).
///
/// Missing fields fall back to [`DecoderConfig::default`] when deserialised.
///
/// # Examples
///
/// ```
/// use spdy_http::config::DecoderConfig;
///
/// let config = DecoderConfig::new(3, 8192);
/// let validated = config.validate().expect("valid configuration");
/// assert_eq!(validated.max_content_length().get(), 8192);
/// assert!(DecoderConfig::new(3, 0).validate().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecoderConfig {
    /// SPDY revision spoken on the session.
    pub protocol_version: u8,
    /// Largest body, in bytes, that a single stream may accumulate.
    pub max_content_length: usize,
}

impl DecoderConfig {
    #[must_use]
    pub const fn new(protocol_version: u8, max_content_length: usize) -> Self {
        Self {
            protocol_version,
            max_content_length,
        }
    }

    /// Check the settings.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnsupportedVersion`] for a revision outside the
    /// supported range and [`ConfigError::ZeroMaxContentLength`] when the
    /// content limit is zero.
    pub fn validate(&self) -> Result<ValidatedConfig, ConfigError> {
        let version = SpdyVersion::new(self.protocol_version)?;
        let max_content_length =
            NonZeroUsize::new(self.max_content_length).ok_or(ConfigError::ZeroMaxContentLength)?;
        Ok(ValidatedConfig {
            version,
            max_content_length,
        })
    }
}

impl Default for DecoderConfig {
    fn default() -> Self { Self::new(SpdyVersion::V3.get(), DEFAULT_MAX_CONTENT_LENGTH) }
}

/// Configuration whose values have been checked.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ValidatedConfig {
    version: SpdyVersion,
    max_content_length: NonZeroUsize,
}

impl ValidatedConfig {
    #[must_use]
    pub const fn version(&self) -> SpdyVersion { self.version }

    #[must_use]
    pub const fn max_content_length(&self) -> NonZeroUsize { self.max_content_length }
}

impl TryFrom<DecoderConfig> for ValidatedConfig {
    type Error = ConfigError;

    fn try_from(config: DecoderConfig) -> Result<Self, Self::Error> { config.validate() }
}

#[cfg(test)]
mod tests;
