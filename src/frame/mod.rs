//! Structured SPDY frame values.
//!
//! The binary wire codec lives outside this crate; frames reach the decoder
//! already parsed into the types below and control frames produced by the
//! decoder leave as the same types for the encoder to serialise.

mod id;
mod status;
mod version;

use bytes::Bytes;

pub use id::StreamId;
pub use status::StreamStatus;
pub use version::{SPDY_MAX_VERSION, SPDY_MIN_VERSION, SpdyVersion};

/// Header block carried by `SYN_STREAM`, `SYN_REPLY` and `HEADERS` frames.
pub type HeaderBlock = crate::headers::Headers;

/// `SYN_STREAM`: opens a stream and carries its request (or pushed
/// response) headers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynStreamFrame {
    pub stream_id: StreamId,
    /// Originating client stream for server-pushed streams, zero otherwise.
    pub associated_to_stream_id: StreamId,
    pub priority: u8,
    pub headers: HeaderBlock,
    pub is_last: bool,
}

impl SynStreamFrame {
    /// Create an empty, non-terminal `SYN_STREAM`.
    #[must_use]
    pub fn new(stream_id: StreamId, associated_to_stream_id: StreamId, priority: u8) -> Self {
        Self {
            stream_id,
            associated_to_stream_id,
            priority,
            headers: HeaderBlock::new(),
            is_last: false,
        }
    }
}

/// `SYN_REPLY`: the response headers for a client-initiated stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SynReplyFrame {
    pub stream_id: StreamId,
    pub headers: HeaderBlock,
    pub is_last: bool,
}

impl SynReplyFrame {
    /// Create an empty, non-terminal `SYN_REPLY`.
    #[must_use]
    pub fn new(stream_id: StreamId) -> Self {
        Self {
            stream_id,
            headers: HeaderBlock::new(),
            is_last: false,
        }
    }
}

/// `HEADERS`: additional headers for an open stream.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeadersFrame {
    pub stream_id: StreamId,
    pub headers: HeaderBlock,
    pub is_last: bool,
}

impl HeadersFrame {
    /// Create an empty, non-terminal `HEADERS` frame.
    #[must_use]
    pub fn new(stream_id: StreamId) -> Self {
        Self {
            stream_id,
            headers: HeaderBlock::new(),
            is_last: false,
        }
    }
}

/// Data frame carrying a chunk of a stream's body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataFrame {
    pub stream_id: StreamId,
    pub data: Bytes,
    pub is_last: bool,
}

impl DataFrame {
    /// Create a data frame.
    #[must_use]
    pub fn new(stream_id: StreamId, data: impl Into<Bytes>, is_last: bool) -> Self {
        Self {
            stream_id,
            data: data.into(),
            is_last,
        }
    }
}

/// `RST_STREAM`: aborts a stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RstStreamFrame {
    pub stream_id: StreamId,
    pub status: StreamStatus,
}

impl RstStreamFrame {
    #[must_use]
    pub const fn new(stream_id: StreamId, status: StreamStatus) -> Self {
        Self { stream_id, status }
    }
}

/// `SETTINGS`: session parameters as `(id, value)` pairs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SettingsFrame {
    pub clear_previously_persisted: bool,
    pub settings: Vec<(u32, u32)>,
}

/// `PING`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PingFrame {
    pub id: u32,
}

/// `GOAWAY`: the peer will open no further streams.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoAwayFrame {
    pub last_good_stream_id: StreamId,
    pub status: u32,
}

/// `WINDOW_UPDATE`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowUpdateFrame {
    pub stream_id: StreamId,
    pub delta_window_size: u32,
}

/// Every frame kind the decoder may be handed.
///
/// Only the stream-bearing kinds are interpreted; session-level kinds are
/// forwarded unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SpdyFrame {
    SynStream(SynStreamFrame),
    SynReply(SynReplyFrame),
    Headers(HeadersFrame),
    Data(DataFrame),
    RstStream(RstStreamFrame),
    Settings(SettingsFrame),
    Ping(PingFrame),
    GoAway(GoAwayFrame),
    WindowUpdate(WindowUpdateFrame),
}

impl SpdyFrame {
    /// Stream addressed by this frame, if it is stream-scoped.
    #[must_use]
    pub fn stream_id(&self) -> Option<StreamId> {
        match self {
            Self::SynStream(f) => Some(f.stream_id),
            Self::SynReply(f) => Some(f.stream_id),
            Self::Headers(f) => Some(f.stream_id),
            Self::Data(f) => Some(f.stream_id),
            Self::RstStream(f) => Some(f.stream_id),
            Self::WindowUpdate(f) => Some(f.stream_id),
            Self::Settings(_) | Self::Ping(_) | Self::GoAway(_) => None,
        }
    }

    /// Whether the frame carries the terminal flag for its stream.
    #[must_use]
    pub fn is_last(&self) -> bool {
        match self {
            Self::SynStream(f) => f.is_last,
            Self::SynReply(f) => f.is_last,
            Self::Headers(f) => f.is_last,
            Self::Data(f) => f.is_last,
            _ => false,
        }
    }

    /// Short name used in diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::SynStream(_) => "SYN_STREAM",
            Self::SynReply(_) => "SYN_REPLY",
            Self::Headers(_) => "HEADERS",
            Self::Data(_) => "DATA",
            Self::RstStream(_) => "RST_STREAM",
            Self::Settings(_) => "SETTINGS",
            Self::Ping(_) => "PING",
            Self::GoAway(_) => "GOAWAY",
            Self::WindowUpdate(_) => "WINDOW_UPDATE",
        }
    }
}

impl From<SynStreamFrame> for SpdyFrame {
    fn from(frame: SynStreamFrame) -> Self { Self::SynStream(frame) }
}

impl From<SynReplyFrame> for SpdyFrame {
    fn from(frame: SynReplyFrame) -> Self { Self::SynReply(frame) }
}

impl From<HeadersFrame> for SpdyFrame {
    fn from(frame: HeadersFrame) -> Self { Self::Headers(frame) }
}

impl From<DataFrame> for SpdyFrame {
    fn from(frame: DataFrame) -> Self { Self::Data(frame) }
}

impl From<RstStreamFrame> for SpdyFrame {
    fn from(frame: RstStreamFrame) -> Self { Self::RstStream(frame) }
}
