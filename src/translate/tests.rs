//! Unit tests for header translation.

use rstest::{fixture, rstest};

use super::*;
use crate::http::{HttpVersion, Method, Status};

#[fixture]
fn spdy3_request() -> HeaderBlock {
    HeaderBlock::from_iter([
        (":method", "POST"),
        (":path", "/upload"),
        (":scheme", "https"),
        (":version", "HTTP/1.1"),
        (":host", "example.com"),
        ("accept", "text/plain"),
        ("cookie", "a=1"),
        ("cookie", "b=2"),
        ("transfer-encoding", "chunked"),
        ("connection", "close"),
    ])
}

#[fixture]
fn spdy2_response() -> HeaderBlock {
    HeaderBlock::from_iter([
        ("status", "200 OK"),
        ("version", "HTTP/1.1"),
        ("content-type", "text/html"),
        ("set-cookie", "a=1"),
        ("set-cookie", "b=2"),
        ("transfer-encoding", "chunked"),
        ("trailer", "x-checksum"),
    ])
}

#[rstest]
fn request_lifts_start_line_and_host(spdy3_request: HeaderBlock) {
    let message = create_http_request(SpdyVersion::V3, spdy3_request).expect("valid request");
    let request = message.as_request().expect("request role");
    assert_eq!(request.method(), &Method::Post);
    assert_eq!(request.uri(), "/upload");
    assert_eq!(request.version(), &HttpVersion::http_1_1());

    let pairs: Vec<_> = request.headers().iter().collect();
    assert_eq!(
        pairs,
        [
            ("Host", "example.com"),
            ("accept", "text/plain"),
            ("cookie", "a=1"),
            ("cookie", "b=2"),
        ]
    );
}

#[rstest]
#[case::method(":method")]
#[case::path(":path")]
#[case::scheme(":scheme")]
#[case::version(":version")]
#[case::host(":host")]
fn request_requires_each_pseudo_header(mut spdy3_request: HeaderBlock, #[case] name: &str) {
    spdy3_request.remove(name);
    let err = create_http_request(SpdyVersion::V3, spdy3_request).expect_err("must fail");
    assert!(matches!(err, TranslationError::MissingPseudoHeader { name: missing } if missing == name));
}

#[rstest]
#[case::method(":method", "GE T")]
#[case::path(":path", "/a b")]
#[case::version(":version", "HTTP/one")]
fn request_rejects_malformed_start_line(
    mut spdy3_request: HeaderBlock,
    #[case] name: &str,
    #[case] value: &str,
) {
    spdy3_request.set(name, value);
    assert!(create_http_request(SpdyVersion::V3, spdy3_request).is_err());
}

#[test]
fn spdy2_request_keeps_plain_host_header_and_needs_no_pseudo_host() {
    let block = HeaderBlock::from_iter([
        ("method", "GET"),
        ("url", "/x"),
        ("version", "HTTP/1.0"),
        ("scheme", "http"),
        ("host", "example.org"),
    ]);
    let message = create_http_request(SpdyVersion::V2, block).expect("valid request");
    let pairs: Vec<_> = message.headers().iter().collect();
    assert_eq!(
        pairs,
        [("host", "example.org"), ("Connection", "keep-alive")]
    );
}

#[rstest]
fn response_lifts_status_and_strips_hop_headers(spdy2_response: HeaderBlock) {
    let message = create_http_response(SpdyVersion::V2, spdy2_response).expect("valid response");
    let response = message.as_response().expect("response role");
    assert_eq!(response.status(), &Status::ok());
    let pairs: Vec<_> = response.headers().iter().collect();
    assert_eq!(
        pairs,
        [
            ("content-type", "text/html"),
            ("set-cookie", "a=1"),
            ("set-cookie", "b=2"),
        ]
    );
}

#[rstest]
#[case::status("status")]
#[case::version("version")]
fn response_requires_status_and_version(mut spdy2_response: HeaderBlock, #[case] name: &str) {
    spdy2_response.remove(name);
    let err = create_http_response(SpdyVersion::V2, spdy2_response).expect_err("must fail");
    assert!(matches!(err, TranslationError::MissingPseudoHeader { name: missing } if missing == name));
}

#[test]
fn response_on_http_1_0_is_forced_to_keep_alive() {
    let block = HeaderBlock::from_iter([(":status", "204"), (":version", "HTTP/1.0")]);
    let message = create_http_response(SpdyVersion::V3, block).expect("valid response");
    assert_eq!(message.headers().get("connection"), Some("keep-alive"));
    assert!(message.is_keep_alive());
}

#[test]
fn pushed_response_keeps_url_pseudo_header() {
    let block = HeaderBlock::from_iter([
        (":status", "200 OK"),
        (":version", "HTTP/1.1"),
        (":path", "https://example.com/app.js"),
    ]);
    let message = create_http_response(SpdyVersion::V3, block).expect("valid response");
    assert_eq!(message.headers().get(":path"), Some("https://example.com/app.js"));
}
