//! Diagnostics emitted while decoding.

use log::Level;
use rstest::rstest;
use serial_test::serial;
use spdy_http::{SpdyHttpDecoder, frame::SpdyVersion};
use spdy_http_testing::{
    LoggerHandle,
    data,
    decode_frames,
    logger,
    pushed_stream,
    request_headers,
    response_headers,
    spdy3_decoder,
    syn_reply,
    syn_stream,
};

#[rstest]
#[serial(logging)]
fn rejected_reply_is_logged_as_warning(
    mut logger: LoggerHandle,
    mut spdy3_decoder: SpdyHttpDecoder,
) {
    let mut block = response_headers(SpdyVersion::V3, "200 OK");
    block.remove(":status");
    decode_frames(&mut spdy3_decoder, [syn_reply(7, block, false)]).expect("decode");

    let warnings = logger.drain_level(Level::Warn);
    assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
    assert!(warnings[0].contains("stream_id=7"));
    assert!(warnings[0].contains(":status"));
}

#[rstest]
#[serial(logging)]
fn pushed_stream_without_association_is_logged(
    mut logger: LoggerHandle,
    mut spdy3_decoder: SpdyHttpDecoder,
) {
    decode_frames(
        &mut spdy3_decoder,
        [pushed_stream(2, 0, 0, response_headers(SpdyVersion::V3, "200"), true)],
    )
    .expect("decode");

    let warnings = logger.drain_level(Level::Warn);
    assert_eq!(
        warnings,
        [
            "pushed stream without associated stream: stream_id=2",
            "pushed stream without url: stream_id=2",
        ]
    );
}

#[rstest]
#[serial(logging)]
fn oversized_body_is_logged_before_failing(mut logger: LoggerHandle) {
    let mut decoder =
        SpdyHttpDecoder::new(spdy_http::DecoderConfig::new(3, 4)).expect("valid config");
    let result = decode_frames(
        &mut decoder,
        [
            syn_stream(1, request_headers(SpdyVersion::V3, "POST", "/"), false),
            data(1, b"too long", true),
        ],
    );
    assert!(result.is_err());

    let warnings = logger.drain_level(Level::Warn);
    assert_eq!(warnings.len(), 1, "warnings: {warnings:?}");
    assert!(warnings[0].starts_with("discarding oversized message: stream_id=1"));
}

#[rstest]
#[serial(logging)]
fn close_reports_abandoned_streams(mut logger: LoggerHandle, mut spdy3_decoder: SpdyHttpDecoder) {
    decode_frames(
        &mut spdy3_decoder,
        [syn_stream(3, request_headers(SpdyVersion::V3, "POST", "/"), false)],
    )
    .expect("decode");
    logger.clear();

    spdy3_decoder.close();

    let debug = logger.drain_level(Level::Debug);
    assert_eq!(debug.len(), 1, "debug records: {debug:?}");
    assert!(debug[0].starts_with("dropping pending streams on close: count=1"));
}
