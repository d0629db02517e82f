//! Full HTTP messages: start line, headers and a buffered body.

use bytes::BytesMut;

use super::{HttpHeaders, HttpVersion, Method, Status, names, values};

/// Request with its complete body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullHttpRequest {
    version: HttpVersion,
    method: Method,
    uri: String,
    headers: HttpHeaders,
    content: BytesMut,
}

impl FullHttpRequest {
    #[must_use]
    pub fn new(version: HttpVersion, method: Method, uri: impl Into<String>) -> Self {
        Self {
            version,
            method,
            uri: uri.into(),
            headers: HttpHeaders::new(),
            content: BytesMut::new(),
        }
    }

    #[must_use]
    pub fn method(&self) -> &Method { &self.method }

    #[must_use]
    pub fn uri(&self) -> &str { &self.uri }

    #[must_use]
    pub fn version(&self) -> &HttpVersion { &self.version }

    #[must_use]
    pub fn headers(&self) -> &HttpHeaders { &self.headers }

    pub fn headers_mut(&mut self) -> &mut HttpHeaders { &mut self.headers }

    #[must_use]
    pub fn content(&self) -> &[u8] { &self.content }

    pub fn content_mut(&mut self) -> &mut BytesMut { &mut self.content }
}

/// Response with its complete body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FullHttpResponse {
    version: HttpVersion,
    status: Status,
    headers: HttpHeaders,
    content: BytesMut,
}

impl FullHttpResponse {
    #[must_use]
    pub fn new(version: HttpVersion, status: Status) -> Self {
        Self {
            version,
            status,
            headers: HttpHeaders::new(),
            content: BytesMut::new(),
        }
    }

    #[must_use]
    pub fn status(&self) -> &Status { &self.status }

    #[must_use]
    pub fn version(&self) -> &HttpVersion { &self.version }

    #[must_use]
    pub fn headers(&self) -> &HttpHeaders { &self.headers }

    pub fn headers_mut(&mut self) -> &mut HttpHeaders { &mut self.headers }

    #[must_use]
    pub fn content(&self) -> &[u8] { &self.content }

    pub fn content_mut(&mut self) -> &mut BytesMut { &mut self.content }
}

/// A reconstructed message of either role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum HttpMessage {
    Request(FullHttpRequest),
    Response(FullHttpResponse),
}

impl HttpMessage {
    #[must_use]
    pub fn version(&self) -> &HttpVersion {
        match self {
            Self::Request(req) => req.version(),
            Self::Response(res) => res.version(),
        }
    }

    #[must_use]
    pub fn headers(&self) -> &HttpHeaders {
        match self {
            Self::Request(req) => req.headers(),
            Self::Response(res) => res.headers(),
        }
    }

    pub fn headers_mut(&mut self) -> &mut HttpHeaders {
        match self {
            Self::Request(req) => req.headers_mut(),
            Self::Response(res) => res.headers_mut(),
        }
    }

    #[must_use]
    pub fn content(&self) -> &[u8] {
        match self {
            Self::Request(req) => req.content(),
            Self::Response(res) => res.content(),
        }
    }

    pub fn content_mut(&mut self) -> &mut BytesMut {
        match self {
            Self::Request(req) => req.content_mut(),
            Self::Response(res) => res.content_mut(),
        }
    }

    #[must_use]
    pub const fn is_request(&self) -> bool { matches!(self, Self::Request(_)) }

    #[must_use]
    pub fn as_request(&self) -> Option<&FullHttpRequest> {
        match self {
            Self::Request(req) => Some(req),
            Self::Response(_) => None,
        }
    }

    #[must_use]
    pub fn as_response(&self) -> Option<&FullHttpResponse> {
        match self {
            Self::Response(res) => Some(res),
            Self::Request(_) => None,
        }
    }

    /// Mark the message as wanting a persistent (or closing) connection.
    ///
    /// Versions that persist by default carry no `Connection` header when
    /// keeping alive; `HTTP/1.0` carries `Connection: keep-alive`.
    pub fn set_keep_alive(&mut self, keep_alive: bool) {
        let persistent_by_default = self.version().is_keep_alive_default();
        let headers = self.headers_mut();
        match (persistent_by_default, keep_alive) {
            (true, true) | (false, false) => {
                headers.remove(names::CONNECTION);
            }
            (true, false) => headers.set(names::CONNECTION, values::CLOSE),
            (false, true) => headers.set(names::CONNECTION, values::KEEP_ALIVE),
        }
    }

    /// Whether the message asks for the connection to stay open.
    #[must_use]
    pub fn is_keep_alive(&self) -> bool {
        match self.headers().get(names::CONNECTION) {
            Some(value) if value.eq_ignore_ascii_case(values::CLOSE) => false,
            Some(value) if value.eq_ignore_ascii_case(values::KEEP_ALIVE) => true,
            _ => self.version().is_keep_alive_default(),
        }
    }

    /// Replace the `Content-Length` header.
    pub fn set_content_length(&mut self, length: usize) {
        self.headers_mut()
            .set(names::CONTENT_LENGTH, length.to_string());
    }

    /// Parsed `Content-Length`, if present and numeric.
    #[must_use]
    pub fn content_length(&self) -> Option<usize> {
        self.headers()
            .get(names::CONTENT_LENGTH)
            .and_then(|value| value.trim().parse().ok())
    }

    /// Replace the `Host` header.
    pub fn set_host(&mut self, host: impl Into<String>) {
        self.headers_mut().set(names::HOST, host.into());
    }
}

impl From<FullHttpRequest> for HttpMessage {
    fn from(req: FullHttpRequest) -> Self { Self::Request(req) }
}

impl From<FullHttpResponse> for HttpMessage {
    fn from(res: FullHttpResponse) -> Self { Self::Response(res) }
}
