use bytes::Bytes;

use super::Status;
use crate::body::Body;
use crate::headers::HeaderMap;

/// [`Response`][super::Response] construction options.
///
/// Every field not given keeps the response default. A raw `message` is parsed on construction
/// and overrides the fields it carries.
///
/// ```
/// use retort::response::{Config, Response};
///
/// let res = Response::from_config(
///     Config::new()
///         .protocol("HTTP/1.1")
///         .media_type("application/json")
///         .body(r#"{"ok":true}"#),
/// );
/// assert_eq!(res.media_type(), "application/json");
/// ```
#[derive(Clone, Debug, Default)]
pub struct Config {
    pub(crate) message: Option<Bytes>,
    pub(crate) protocol: Option<String>,
    pub(crate) status: Option<Status>,
    pub(crate) headers: Option<HeaderMap>,
    pub(crate) body: Option<Body>,
    pub(crate) media_type: Option<String>,
    pub(crate) encoding: Option<String>,
}

impl Config {
    /// Create empty config.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw response message to parse.
    pub fn message(mut self, message: impl Into<Bytes>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Protocol, e.g: `"HTTP/1.1"`.
    pub fn protocol(mut self, protocol: impl Into<String>) -> Self {
        self.protocol = Some(protocol.into());
        self
    }

    /// Initial status.
    pub fn status(mut self, status: impl Into<Status>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Initial headers.
    pub fn headers(mut self, headers: HeaderMap) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Initial body.
    pub fn body(mut self, body: impl Into<Body>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Media type, e.g: `"application/json"`.
    pub fn media_type(mut self, media_type: impl Into<String>) -> Self {
        self.media_type = Some(media_type.into());
        self
    }

    /// Character encoding, e.g: `"UTF-8"`.
    pub fn encoding(mut self, encoding: impl Into<String>) -> Self {
        self.encoding = Some(encoding.into());
        self
    }
}
