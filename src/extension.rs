//! `X-SPDY-*` side-channel headers.
//!
//! HTTP/1.x has no slot for SPDY stream metadata, so the decoder records it in
//! extension headers on the produced message. Downstream handlers read them
//! back with the getters here, for example to route a response to the stream
//! that carried its request.

use crate::{frame::StreamId, http::HttpHeaders};

/// Header names.
pub mod names {
    pub const STREAM_ID: &str = "X-SPDY-Stream-ID";
    pub const ASSOCIATED_TO_STREAM_ID: &str = "X-SPDY-Associated-To-Stream-ID";
    pub const PRIORITY: &str = "X-SPDY-Priority";
    pub const URL: &str = "X-SPDY-URL";
}

pub fn set_stream_id(headers: &mut HttpHeaders, id: StreamId) {
    headers.set(names::STREAM_ID, id.to_string());
}

/// Stream the message travelled on, if recorded and numeric.
#[must_use]
pub fn stream_id(headers: &HttpHeaders) -> Option<StreamId> {
    parse_header(headers, names::STREAM_ID).map(StreamId::new)
}

pub fn set_associated_to_stream_id(headers: &mut HttpHeaders, id: StreamId) {
    headers.set(names::ASSOCIATED_TO_STREAM_ID, id.to_string());
}

/// Originating stream of a pushed response; zero when not recorded.
#[must_use]
pub fn associated_to_stream_id(headers: &HttpHeaders) -> StreamId {
    parse_header(headers, names::ASSOCIATED_TO_STREAM_ID).map_or(StreamId::ZERO, StreamId::new)
}

pub fn set_priority(headers: &mut HttpHeaders, priority: u8) {
    headers.set(names::PRIORITY, priority.to_string());
}

/// Stream priority; zero (highest) when not recorded.
#[must_use]
pub fn priority(headers: &HttpHeaders) -> u8 { parse_header(headers, names::PRIORITY).unwrap_or(0) }

pub fn set_url(headers: &mut HttpHeaders, url: impl Into<String>) {
    headers.set(names::URL, url.into());
}

#[must_use]
pub fn url(headers: &HttpHeaders) -> Option<&str> { headers.get(names::URL) }

fn parse_header<T: std::str::FromStr>(headers: &HttpHeaders, name: &str) -> Option<T> {
    headers.get(name).and_then(|value| value.trim().parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metadata_round_trips() {
        let mut headers = HttpHeaders::new();
        set_stream_id(&mut headers, StreamId::new(2));
        set_associated_to_stream_id(&mut headers, StreamId::new(1));
        set_priority(&mut headers, 3);
        set_url(&mut headers, "https://example.com/style.css");

        assert_eq!(stream_id(&headers), Some(StreamId::new(2)));
        assert_eq!(associated_to_stream_id(&headers), StreamId::new(1));
        assert_eq!(priority(&headers), 3);
        assert_eq!(url(&headers), Some("https://example.com/style.css"));
        assert_eq!(headers.len(), 4);
    }

    #[test]
    fn absent_metadata_uses_defaults() {
        let headers = HttpHeaders::from_iter([("x-spdy-stream-id", "not a number")]);
        assert_eq!(stream_id(&headers), None);
        assert_eq!(associated_to_stream_id(&headers), StreamId::ZERO);
        assert_eq!(priority(&headers), 0);
    }
}
