//! SPDY stream identifiers.
//!
//! Provides [`StreamId`], a 31-bit identifier whose parity tells which peer
//! opened the stream.

use derive_more::{Display, Into};

/// Mask applied to raw identifiers; the high bit is reserved on the wire.
const STREAM_ID_MASK: u32 = 0x7FFF_FFFF;

/// Identifier multiplexing one logical exchange over a SPDY session.
///
/// Client-initiated streams use odd identifiers and server-initiated (pushed)
/// streams use even identifiers.
///
/// # Examples
///
/// ```
/// use spdy_http::frame::StreamId;
/// let id = StreamId::new(0x8000_0003);
/// assert_eq!(id.get(), 3);
/// assert!(id.is_client_id());
/// assert!(StreamId::new(2).is_server_id());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display, Into)]
#[display("{_0}")]
pub struct StreamId(u32);

impl StreamId {
    /// The reserved zero identifier, used by pushed streams that reference no
    /// originating stream.
    pub const ZERO: Self = Self(0);

    /// Construct an identifier, discarding the reserved high bit.
    #[must_use]
    pub const fn new(value: u32) -> Self { Self(value & STREAM_ID_MASK) }

    /// Return the numeric identifier.
    #[must_use]
    pub const fn get(self) -> u32 { self.0 }

    /// Whether this is the reserved zero identifier.
    #[must_use]
    pub const fn is_zero(self) -> bool { self.0 == 0 }

    /// Whether the server opened this stream.
    #[must_use]
    pub const fn is_server_id(self) -> bool { self.0 % 2 == 0 }

    /// Whether the client opened this stream.
    #[must_use]
    pub const fn is_client_id(self) -> bool { !self.is_server_id() }
}

impl From<u32> for StreamId {
    fn from(value: u32) -> Self { Self::new(value) }
}
