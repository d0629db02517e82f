//! Sinks the decoder writes into.

use crate::{frame::SpdyFrame, http::HttpMessage};

/// Item handed to the next inbound pipeline stage.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Inbound {
    /// A complete HTTP message reassembled from one stream.
    Message(HttpMessage),
    /// A session-level frame the decoder does not interpret.
    Frame(SpdyFrame),
}

impl Inbound {
    #[must_use]
    pub fn as_message(&self) -> Option<&HttpMessage> {
        match self {
            Self::Message(message) => Some(message),
            Self::Frame(_) => None,
        }
    }

    #[must_use]
    pub fn into_message(self) -> Option<HttpMessage> {
        match self {
            Self::Message(message) => Some(message),
            Self::Frame(_) => None,
        }
    }
}

/// Everything produced while decoding one or more frames.
///
/// `inbound` flows towards the application; `outbound` holds control frames
/// addressed to the peer, to be passed to the frame encoder. Both keep the
/// order in which they were produced.
#[derive(Debug, Default)]
pub struct DecodeOutput {
    inbound: Vec<Inbound>,
    outbound: Vec<SpdyFrame>,
}

impl DecodeOutput {
    #[must_use]
    pub fn new() -> Self { Self::default() }

    pub(crate) fn push_message(&mut self, message: HttpMessage) {
        self.inbound.push(Inbound::Message(message));
    }

    pub(crate) fn push_passthrough(&mut self, frame: SpdyFrame) {
        self.inbound.push(Inbound::Frame(frame));
    }

    pub(crate) fn push_control(&mut self, frame: impl Into<SpdyFrame>) {
        self.outbound.push(frame.into());
    }

    #[must_use]
    pub fn inbound(&self) -> &[Inbound] { &self.inbound }

    #[must_use]
    pub fn outbound(&self) -> &[SpdyFrame] { &self.outbound }

    /// Completed messages produced so far, in emission order.
    pub fn messages(&self) -> impl Iterator<Item = &HttpMessage> {
        self.inbound.iter().filter_map(Inbound::as_message)
    }

    /// Take the inbound items, leaving the sink empty.
    pub fn take_inbound(&mut self) -> Vec<Inbound> { std::mem::take(&mut self.inbound) }

    /// Take the outbound control frames, leaving the sink empty.
    pub fn take_outbound(&mut self) -> Vec<SpdyFrame> { std::mem::take(&mut self.outbound) }

    #[must_use]
    pub fn is_empty(&self) -> bool { self.inbound.is_empty() && self.outbound.is_empty() }

    #[must_use]
    pub fn into_parts(self) -> (Vec<Inbound>, Vec<SpdyFrame>) { (self.inbound, self.outbound) }
}
