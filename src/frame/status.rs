//! Status codes carried by `RST_STREAM` frames.

use std::fmt;

/// Reason a stream was reset.
///
/// Codes outside the well-known table are preserved so unknown resets from a
/// peer can be forwarded unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct StreamStatus(u32);

impl StreamStatus {
    pub const PROTOCOL_ERROR: Self = Self(1);
    pub const INVALID_STREAM: Self = Self(2);
    pub const REFUSED_STREAM: Self = Self(3);
    pub const UNSUPPORTED_VERSION: Self = Self(4);
    pub const CANCEL: Self = Self(5);
    pub const INTERNAL_ERROR: Self = Self(6);
    pub const FLOW_CONTROL_ERROR: Self = Self(7);
    pub const STREAM_IN_USE: Self = Self(8);
    pub const STREAM_ALREADY_CLOSED: Self = Self(9);
    pub const INVALID_CREDENTIALS: Self = Self(10);
    pub const FRAME_TOO_LARGE: Self = Self(11);

    /// Build a status from its wire code. Zero is not a valid status.
    ///
    /// # Examples
    ///
    /// ```
    /// use spdy_http::frame::StreamStatus;
    /// assert_eq!(StreamStatus::from_code(2), Some(StreamStatus::INVALID_STREAM));
    /// assert_eq!(StreamStatus::from_code(0), None);
    /// ```
    #[must_use]
    pub const fn from_code(code: u32) -> Option<Self> {
        if code == 0 { None } else { Some(Self(code)) }
    }

    /// Wire code of this status.
    #[must_use]
    pub const fn code(self) -> u32 { self.0 }

    /// Symbolic name, or `None` for codes outside the known table.
    #[must_use]
    pub const fn name(self) -> Option<&'static str> {
        match self.0 {
            1 => Some("PROTOCOL_ERROR"),
            2 => Some("INVALID_STREAM"),
            3 => Some("REFUSED_STREAM"),
            4 => Some("UNSUPPORTED_VERSION"),
            5 => Some("CANCEL"),
            6 => Some("INTERNAL_ERROR"),
            7 => Some("FLOW_CONTROL_ERROR"),
            8 => Some("STREAM_IN_USE"),
            9 => Some("STREAM_ALREADY_CLOSED"),
            10 => Some("INVALID_CREDENTIALS"),
            11 => Some("FRAME_TOO_LARGE"),
            _ => None,
        }
    }
}

impl fmt::Display for StreamStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => f.write_str(name),
            None => write!(f, "UNKNOWN ({})", self.0),
        }
    }
}
