//! Tests for decoder configuration validation.

use rstest::rstest;
use serde::{
    Deserialize,
    de::value::{Error as ValueError, MapDeserializer},
};

use super::{DEFAULT_MAX_CONTENT_LENGTH, DecoderConfig};
use crate::{error::ConfigError, frame::SpdyVersion};

#[rstest]
#[case::spdy2(2, 1)]
#[case::spdy3(3, usize::MAX)]
fn valid_configurations_are_accepted(#[case] version: u8, #[case] max: usize) {
    let validated = DecoderConfig::new(version, max)
        .validate()
        .expect("configuration should validate");
    assert_eq!(validated.version().get(), version);
    assert_eq!(validated.max_content_length().get(), max);
}

#[rstest]
#[case::below_min(1, 16, ConfigError::UnsupportedVersion { version: 1 })]
#[case::above_max(4, 16, ConfigError::UnsupportedVersion { version: 4 })]
#[case::zero_limit(3, 0, ConfigError::ZeroMaxContentLength)]
fn invalid_configurations_are_rejected(
    #[case] version: u8,
    #[case] max: usize,
    #[case] expected: ConfigError,
) {
    assert_eq!(DecoderConfig::new(version, max).validate(), Err(expected));
}

#[test]
fn default_is_spdy3_with_one_mebibyte_limit() {
    let config = DecoderConfig::default();
    assert_eq!(config.protocol_version, SpdyVersion::V3.get());
    assert_eq!(config.max_content_length, DEFAULT_MAX_CONTENT_LENGTH);
}

#[test]
fn deserialises_with_defaults_for_missing_fields() {
    let entries = vec![("max_content_length", 4096_u64)];
    let deserializer = MapDeserializer::<_, ValueError>::new(entries.into_iter());
    let config = DecoderConfig::deserialize(deserializer).expect("deserialise config");
    assert_eq!(config, DecoderConfig::new(3, 4096));
}

#[test]
fn unsupported_version_message_names_the_range() {
    let err = DecoderConfig::new(9, 1).validate().expect_err("version 9 rejected");
    assert_eq!(err.to_string(), "unsupported version: 9 (expected 2..=3)");
}
