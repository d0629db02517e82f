//! HTTP/1.x message values produced by the decoder.
//!
//! Only the in-memory model lives here; serialising messages to the HTTP/1.x
//! wire format is left to the next pipeline stage.

mod message;
mod method;
mod status;
mod version;

pub use message::{FullHttpRequest, FullHttpResponse, HttpMessage};
pub use method::Method;
pub use status::Status;
pub use version::HttpVersion;

/// Header set of an HTTP message.
pub type HttpHeaders = crate::headers::Headers;

/// Standard header names touched during translation.
pub mod names {
    pub const CONNECTION: &str = "Connection";
    pub const CONTENT_LENGTH: &str = "Content-Length";
    pub const HOST: &str = "Host";
    pub const TRAILER: &str = "Trailer";
    pub const TRANSFER_ENCODING: &str = "Transfer-Encoding";
}

/// Standard header values.
pub mod values {
    pub const CLOSE: &str = "close";
    pub const KEEP_ALIVE: &str = "keep-alive";
}
