//! SPDY-to-HTTP stream reassembly.
//!
//! [`SpdyHttpDecoder`] consumes parsed SPDY frames one at a time and turns
//! each stream into exactly one complete HTTP message. HTTP requests and
//! responses map one-to-one onto SPDY streams:
//!
//! - a client-initiated `SYN_STREAM` opens a request,
//! - a `SYN_REPLY` opens the response to such a request,
//! - a server-initiated `SYN_STREAM` opens a pushed response.
//!
//! `HEADERS` and data frames extend the pending message and the first frame
//! carrying the terminal flag completes it. Malformed header blocks are
//! answered with control frames for the peer; only an oversized body aborts
//! decoding.
//!
//! The decoder is synchronous and owns its [`StreamTable`]; use one instance
//! per session.

mod output;

use std::{collections::HashMap, num::NonZeroUsize};

use log::{debug, warn};

pub use self::output::{DecodeOutput, Inbound};
use crate::{
    config::{DecoderConfig, ValidatedConfig},
    error::{ConfigError, DecodeError},
    extension,
    frame::{
        DataFrame,
        HeadersFrame,
        RstStreamFrame,
        SpdyFrame,
        SpdyVersion,
        StreamId,
        StreamStatus,
        SynReplyFrame,
        SynStreamFrame,
    },
    http::{HttpMessage, HttpVersion, Status},
    pseudo,
    stream_table::StreamTable,
    translate::{create_http_request, create_http_response},
};

/// Reassembles SPDY streams into full HTTP messages.
///
/// # Examples
///
/// ```
/// use spdy_http::{
///     config::DecoderConfig,
///     decoder::{DecodeOutput, SpdyHttpDecoder},
///     frame::{DataFrame, SpdyFrame, StreamId, SynStreamFrame},
/// };
///
/// let mut decoder = SpdyHttpDecoder::new(DecoderConfig::new(3, 1024)).expect("valid config");
/// let mut out = DecodeOutput::new();
///
/// let mut syn = SynStreamFrame::new(StreamId::new(1), StreamId::ZERO, 0);
/// for (name, value) in [
///     (":method", "POST"),
///     (":path", "/submit"),
///     (":scheme", "https"),
///     (":version", "HTTP/1.1"),
///     (":host", "example.com"),
/// ] {
///     syn.headers.add(name, value);
/// }
/// decoder.decode(syn.into(), &mut out).expect("syn stream");
/// assert!(out.is_empty());
///
/// let data = DataFrame::new(StreamId::new(1), &b"hello"[..], true);
/// decoder.decode(data.into(), &mut out).expect("data");
///
/// let message = out.messages().next().expect("complete request");
/// assert_eq!(message.content(), b"hello");
/// assert_eq!(message.content_length(), Some(5));
/// ```
#[derive(Debug)]
pub struct SpdyHttpDecoder<T = HashMap<StreamId, HttpMessage>> {
    version: SpdyVersion,
    max_content_length: NonZeroUsize,
    messages: T,
}

impl SpdyHttpDecoder {
    /// Create a decoder backed by an in-memory hash map.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the protocol version is unsupported or
    /// the maximum content length is zero.
    pub fn new(config: DecoderConfig) -> Result<Self, ConfigError> {
        Self::with_table(config, HashMap::new())
    }
}

impl<T: StreamTable> SpdyHttpDecoder<T> {
    /// Create a decoder that keeps pending messages in `table`.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the protocol version is unsupported or
    /// the maximum content length is zero.
    pub fn with_table(config: DecoderConfig, table: T) -> Result<Self, ConfigError> {
        Ok(Self::from_validated(config.validate()?, table))
    }

    /// Create a decoder from an already validated configuration.
    #[must_use]
    pub fn from_validated(config: ValidatedConfig, table: T) -> Self {
        Self {
            version: config.version(),
            max_content_length: config.max_content_length(),
            messages: table,
        }
    }

    #[must_use]
    pub const fn protocol_version(&self) -> SpdyVersion { self.version }

    #[must_use]
    pub const fn max_content_length(&self) -> NonZeroUsize { self.max_content_length }

    /// Number of streams with a message still awaiting its terminal frame.
    #[must_use]
    pub fn pending_streams(&self) -> usize { self.messages.len() }

    /// Whether `id` has a message awaiting its terminal frame.
    #[must_use]
    pub fn is_pending(&self, id: StreamId) -> bool { self.messages.get(id).is_some() }

    /// Borrow the backing table.
    #[must_use]
    pub fn table(&self) -> &T { &self.messages }

    #[must_use]
    pub fn into_table(self) -> T { self.messages }

    /// Process one frame.
    ///
    /// Completed messages and pass-through frames are appended to
    /// `out.inbound()`; control frames for the peer to `out.outbound()`.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::ContentTooLarge`] when a data frame would grow
    /// a stream's body past the configured maximum. The stream's pending
    /// message is discarded before the error is returned.
    pub fn decode(&mut self, frame: SpdyFrame, out: &mut DecodeOutput) -> Result<(), DecodeError> {
        match frame {
            SpdyFrame::SynStream(frame) if frame.stream_id.is_server_id() => {
                self.on_pushed_stream(frame, out);
            }
            SpdyFrame::SynStream(frame) => self.on_request_stream(frame, out),
            SpdyFrame::SynReply(frame) => self.on_syn_reply(frame, out),
            SpdyFrame::Headers(frame) => self.on_headers(frame, out),
            SpdyFrame::Data(frame) => return self.on_data(frame, out),
            SpdyFrame::RstStream(frame) => self.on_rst_stream(frame),
            other => out.push_passthrough(other),
        }
        Ok(())
    }

    /// Process frames in order, stopping at the first error.
    ///
    /// # Errors
    ///
    /// Propagates the first [`DecodeError`] returned by [`decode`](Self::decode);
    /// frames after the failing one are not consumed.
    pub fn decode_all<I>(&mut self, frames: I, out: &mut DecodeOutput) -> Result<(), DecodeError>
    where
        I: IntoIterator<Item = SpdyFrame>,
    {
        frames
            .into_iter()
            .try_for_each(|frame| self.decode(frame, out))
    }

    /// Drop every pending message, returning the abandoned stream ids.
    ///
    /// Call when the session closes; streams without a terminal frame are
    /// otherwise only reclaimed by `RST_STREAM`.
    pub fn close(&mut self) -> Vec<StreamId> {
        let abandoned = self.messages.drain_ids();
        if !abandoned.is_empty() {
            debug!(
                "dropping pending streams on close: count={}, stream_ids={abandoned:?}",
                abandoned.len()
            );
        }
        abandoned
    }

    fn on_pushed_stream(&mut self, frame: SynStreamFrame, out: &mut DecodeOutput) {
        let SynStreamFrame {
            stream_id,
            associated_to_stream_id,
            priority,
            headers,
            is_last,
            ..
        } = frame;

        // A pushed stream must name the client stream it belongs to.
        if associated_to_stream_id.is_zero() {
            warn!("pushed stream without associated stream: stream_id={stream_id}");
            reset(out, stream_id, StreamStatus::INVALID_STREAM);
        }

        let Some(url) = pseudo::url(self.version, &headers).map(str::to_owned) else {
            warn!("pushed stream without url: stream_id={stream_id}");
            reset(out, stream_id, StreamStatus::PROTOCOL_ERROR);
            return;
        };

        let mut message = match create_http_response(self.version, headers) {
            Ok(message) => message,
            Err(err) => {
                warn!("rejecting pushed stream: stream_id={stream_id}, error={err}");
                reset(out, stream_id, StreamStatus::PROTOCOL_ERROR);
                return;
            }
        };

        let headers = message.headers_mut();
        extension::set_stream_id(headers, stream_id);
        extension::set_associated_to_stream_id(headers, associated_to_stream_id);
        extension::set_priority(headers, priority);
        extension::set_url(headers, url);

        if is_last {
            message.set_content_length(0);
            emit(stream_id, message, out);
        } else {
            self.store(stream_id, message, out);
        }
    }

    fn on_request_stream(&mut self, frame: SynStreamFrame, out: &mut DecodeOutput) {
        let stream_id = frame.stream_id;
        match create_http_request(self.version, frame.headers) {
            Ok(mut message) => {
                extension::set_stream_id(message.headers_mut(), stream_id);
                if frame.is_last {
                    emit(stream_id, message, out);
                } else {
                    self.store(stream_id, message, out);
                }
            }
            Err(err) => {
                warn!("answering malformed request with 400: stream_id={stream_id}, error={err}");
                out.push_control(self.bad_request_reply(stream_id));
            }
        }
    }

    fn on_syn_reply(&mut self, frame: SynReplyFrame, out: &mut DecodeOutput) {
        let stream_id = frame.stream_id;
        match create_http_response(self.version, frame.headers) {
            Ok(mut message) => {
                extension::set_stream_id(message.headers_mut(), stream_id);
                if frame.is_last {
                    message.set_content_length(0);
                    emit(stream_id, message, out);
                } else {
                    self.store(stream_id, message, out);
                }
            }
            Err(err) => {
                warn!("rejecting reply: stream_id={stream_id}, error={err}");
                reset(out, stream_id, StreamStatus::PROTOCOL_ERROR);
            }
        }
    }

    fn on_headers(&mut self, frame: HeadersFrame, out: &mut DecodeOutput) {
        let stream_id = frame.stream_id;
        let Some(message) = self.messages.get_mut(stream_id) else {
            debug!("discarding HEADERS for unknown stream: stream_id={stream_id}");
            return;
        };
        message.headers_mut().extend(frame.headers);
        if frame.is_last {
            self.finish(stream_id, out);
        }
    }

    fn on_data(&mut self, frame: DataFrame, out: &mut DecodeOutput) -> Result<(), DecodeError> {
        let stream_id = frame.stream_id;
        let limit = self.max_content_length;
        let Some(message) = self.messages.get_mut(stream_id) else {
            debug!("discarding DATA for unknown stream: stream_id={stream_id}");
            return Ok(());
        };

        let accumulated = message.content().len();
        if let Err(err) = check_content_length(limit, stream_id, accumulated, frame.data.len()) {
            self.messages.remove(stream_id);
            warn!("discarding oversized message: stream_id={stream_id}, error={err}");
            return Err(err);
        }
        message.content_mut().extend_from_slice(&frame.data);

        if frame.is_last {
            self.finish(stream_id, out);
        }
        Ok(())
    }

    fn on_rst_stream(&mut self, frame: RstStreamFrame) {
        if self.messages.remove(frame.stream_id).is_some() {
            debug!(
                "discarding pending message for reset stream: stream_id={}, status={}",
                frame.stream_id, frame.status
            );
        }
    }

    /// Fix the body length of a pending message and emit it.
    fn finish(&mut self, stream_id: StreamId, out: &mut DecodeOutput) {
        if let Some(mut message) = self.messages.remove(stream_id) {
            let length = message.content().len();
            message.set_content_length(length);
            emit(stream_id, message, out);
        }
    }

    fn store(&mut self, stream_id: StreamId, message: HttpMessage, out: &mut DecodeOutput) {
        match self.messages.put(stream_id, message) {
            Ok(Some(_)) => debug!("replaced pending message: stream_id={stream_id}"),
            Ok(None) => {}
            Err(err) => {
                warn!("refusing stream: stream_id={stream_id}, error={err}");
                reset(out, stream_id, StreamStatus::REFUSED_STREAM);
            }
        }
    }

    fn bad_request_reply(&self, stream_id: StreamId) -> SynReplyFrame {
        let mut reply = SynReplyFrame::new(stream_id);
        reply.is_last = true;
        pseudo::set_status(self.version, &mut reply.headers, &Status::bad_request());
        pseudo::set_http_version(self.version, &mut reply.headers, &HttpVersion::http_1_0());
        reply
    }
}

fn emit(stream_id: StreamId, message: HttpMessage, out: &mut DecodeOutput) {
    debug!(
        "emitting message: stream_id={stream_id}, request={}, content_length={}",
        message.is_request(),
        message.content().len()
    );
    out.push_message(message);
}

fn reset(out: &mut DecodeOutput, stream_id: StreamId, status: StreamStatus) {
    out.push_control(RstStreamFrame::new(stream_id, status));
}

/// Check whether `incoming` more bytes keep a body within `limit`.
fn check_content_length(
    limit: NonZeroUsize,
    stream_id: StreamId,
    accumulated: usize,
    incoming: usize,
) -> Result<(), DecodeError> {
    let attempted = accumulated.saturating_add(incoming);
    if attempted > limit.get() {
        return Err(DecodeError::ContentTooLarge {
            stream_id,
            attempted,
            limit,
        });
    }
    Ok(())
}
