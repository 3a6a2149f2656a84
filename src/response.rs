//! HTTP Response.
//!
//! [`Response`] is built once from a [`Config`], optionally carrying a raw message. Construction
//! parses the message, decodes chunked transfer coding, then resolves the `Content-Type` and
//! decodes the body with a [`MediaCodec`]. After that, fields only change through the explicit
//! mutators.
//!
//! ```
//! use retort::Response;
//!
//! let res = Response::parse("HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\n\r\nhello");
//! assert_eq!(res.protocol(), "HTTP/1.1");
//! assert_eq!(res.status_line().unwrap(), "HTTP/1.1 200 OK");
//! assert_eq!(res.media_type(), "text/plain");
//! assert_eq!(res.body().as_str(), Some("hello"));
//! ```
use bytes::Bytes;

use crate::auth::{AuthCodec, Challenge, DigestAuth};
use crate::body::{Body, decode_chunked};
use crate::h1;
use crate::headers::HeaderMap;
use crate::headers::standard::{CONTENT_TYPE, TRANSFER_ENCODING, WWW_AUTHENTICATE};
use crate::http::StatusCode;
use crate::media::{ContentType, Media, MediaCodec};

mod config;
mod error;
pub mod write;

pub use config::Config;
pub use error::StatusError;


/// Default media type.
pub const DEFAULT_MEDIA_TYPE: &str = "text/html";

/// Default character encoding.
pub const DEFAULT_ENCODING: &str = "UTF-8";

// ===== Status =====

/// Response status code and message.
///
/// Either field may be unset after a failed [`Response::set_status`], or hold an unregistered
/// code after parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Status {
    pub code: Option<u32>,
    pub message: Option<String>,
}

impl Status {
    /// Status with neither code nor message.
    #[inline]
    pub const fn empty() -> Self {
        Self {
            code: None,
            message: None,
        }
    }

    /// Create status from raw parts.
    #[inline]
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            message: Some(message.into()),
        }
    }

    fn lookup(input: StatusInput<'_>) -> Self {
        let status = match input {
            StatusInput::Code(code) => StatusCode::from_u16(code),
            StatusInput::Phrase(phrase) => phrase
                .parse()
                .ok()
                .and_then(StatusCode::from_u16)
                .or_else(|| StatusCode::from_reason(phrase)),
        };
        status.map_or_else(Self::empty, Self::from)
    }
}

/// `200 OK`
impl Default for Status {
    #[inline]
    fn default() -> Self {
        StatusCode::OK.into()
    }
}

impl From<StatusCode> for Status {
    #[inline]
    fn from(status: StatusCode) -> Self {
        Self::new(u32::from(status.code()), status.reason())
    }
}

/// Argument of [`Response::set_status`], either a numeric code or a reason phrase.
///
/// A phrase made of digits is looked up as a code first.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusInput<'a> {
    Code(u16),
    Phrase(&'a str),
}

impl StatusInput<'_> {
    /// `0`, `""` and `"0"` do not reset the status.
    fn is_unset(&self) -> bool {
        matches!(self, Self::Code(0) | Self::Phrase("" | "0"))
    }
}

impl From<u16> for StatusInput<'_> {
    #[inline]
    fn from(code: u16) -> Self {
        Self::Code(code)
    }
}

impl<'a> From<&'a str> for StatusInput<'a> {
    #[inline]
    fn from(phrase: &'a str) -> Self {
        Self::Phrase(phrase)
    }
}

impl<'a> From<&'a String> for StatusInput<'a> {
    #[inline]
    fn from(phrase: &'a String) -> Self {
        Self::Phrase(phrase)
    }
}

impl From<StatusCode> for StatusInput<'_> {
    #[inline]
    fn from(status: StatusCode) -> Self {
        Self::Code(status.code())
    }
}

// ===== Response =====

/// HTTP Response.
#[derive(Clone, Debug, PartialEq)]
pub struct Response {
    protocol: String,
    status: Status,
    headers: HeaderMap,
    body: Body,
    media_type: String,
    encoding: String,
}

impl Default for Response {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl Response {
    /// Create response with default fields.
    ///
    /// Status is `200 OK`, media type is `text/html`, encoding is `UTF-8`, protocol is empty.
    pub fn new() -> Self {
        Self {
            protocol: String::new(),
            status: Status::default(),
            headers: HeaderMap::new(),
            body: Body::default(),
            media_type: DEFAULT_MEDIA_TYPE.to_owned(),
            encoding: DEFAULT_ENCODING.to_owned(),
        }
    }

    /// Parse raw response message with the standard [`Media`] codecs.
    #[inline]
    pub fn parse(message: impl Into<Bytes>) -> Self {
        Self::from_config(Config::new().message(message))
    }

    /// Create response from config with the standard [`Media`] codecs.
    #[inline]
    pub fn from_config(config: Config) -> Self {
        Self::from_config_with(config, Media::standard())
    }

    /// Create response from config, decoding the body with given `codec`.
    pub fn from_config_with<M: MediaCodec + ?Sized>(config: Config, codec: &M) -> Self {
        let Config {
            message,
            protocol,
            status,
            headers,
            body,
            media_type,
            encoding,
        } = config;

        let mut res = Self {
            protocol: protocol.unwrap_or_default(),
            status: status.unwrap_or_default(),
            headers: headers.unwrap_or_default(),
            body: body.unwrap_or_default(),
            media_type: media_type.unwrap_or_else(|| DEFAULT_MEDIA_TYPE.to_owned()),
            encoding: encoding.unwrap_or_else(|| DEFAULT_ENCODING.to_owned()),
        };

        if let Some(message) = message.filter(|m| !m.is_empty()) {
            res.apply_message(message);
        }
        res.decode_transfer();
        res.decode_content(codec);
        res
    }

    fn apply_message(&mut self, message: Bytes) {
        let h1::Message { status, headers, body } = h1::parse(message);
        self.headers.extend(headers);
        if let Some(line) = status {
            self.protocol = line.protocol();
            self.status = Status::new(line.code, line.reason);
        }
        self.body = Body::Raw(body);
    }

    fn decode_transfer(&mut self) {
        let Some(value) = self.headers.get(TRANSFER_ENCODING) else {
            return;
        };
        let coding = String::from_utf8_lossy(value.as_bytes());
        self.body = match std::mem::take(&mut self.body) {
            Body::Raw(bytes) => Body::Raw(decode_chunked(bytes, &coding)),
            decoded => decoded,
        };
    }

    fn decode_content<M: MediaCodec + ?Sized>(&mut self, codec: &M) {
        let Some(value) = self.headers.get(CONTENT_TYPE) else {
            return;
        };
        let value = String::from_utf8_lossy(value.as_bytes());
        let Some(ctype) = ContentType::resolve(&value) else {
            return;
        };
        self.media_type = ctype.media_type().to_owned();
        self.body = ctype.decode_body(codec, std::mem::take(&mut self.body));
        if let Some(charset) = ctype.charset() {
            self.encoding = charset.to_ascii_uppercase();
        }
    }
}

// ===== Status Accessors =====

impl Response {
    /// Returns the raw status fields.
    #[inline]
    pub fn status(&self) -> &Status {
        &self.status
    }

    /// Returns the status code if it is registered.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::Unknown`] if the code is unset or not registered.
    pub fn status_code(&self) -> Result<StatusCode, StatusError> {
        self.status
            .code
            .and_then(|code| u16::try_from(code).ok())
            .and_then(StatusCode::from_u16)
            .ok_or(StatusError::Unknown)
    }

    /// Returns the status message.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::Unknown`] if the code is unset or not registered, or
    /// [`StatusError::Missing`] if the message is unset.
    pub fn status_message(&self) -> Result<&str, StatusError> {
        self.status_code()?;
        self.status.message.as_deref().ok_or(StatusError::Missing)
    }

    /// Returns the full status line, e.g: `"HTTP/1.1 200 OK"`.
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::Unknown`] if the code is unset or not registered.
    pub fn status_line(&self) -> Result<String, StatusError> {
        let code = self.status_code()?;
        Ok(format!(
            "{} {} {}",
            self.protocol,
            code.code(),
            self.status.message.as_deref().unwrap_or_default(),
        ))
    }

    /// Set status by code or reason phrase.
    ///
    /// A registered code, or a phrase that is a registered code, sets the code with its canonical
    /// phrase. Otherwise a phrase matching a canonical phrase exactly sets the phrase with its
    /// code. Otherwise the status is left empty. `0`, `""` and `"0"` keep the current status.
    ///
    /// ```
    /// use retort::Response;
    ///
    /// let mut res = Response::new();
    /// assert_eq!(res.set_status(404).unwrap().code(), 404);
    /// assert_eq!(res.status_message(), Ok("Not Found"));
    /// assert_eq!(res.set_status("Gone").unwrap().code(), 410);
    /// assert!(res.set_status(999).is_err());
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`StatusError::Unknown`] if the resulting code is unset or not registered.
    pub fn set_status<'a>(
        &mut self,
        status: impl Into<StatusInput<'a>>,
    ) -> Result<StatusCode, StatusError> {
        let status = status.into();
        if !status.is_unset() {
            self.status = Status::lookup(status);
        }
        self.status_code()
    }
}

// ===== Field Accessors =====

impl Response {
    /// Returns the protocol, e.g: `"HTTP/1.1"`, empty if unknown.
    #[inline]
    pub fn protocol(&self) -> &str {
        &self.protocol
    }

    #[inline]
    pub fn set_protocol(&mut self, protocol: impl Into<String>) {
        self.protocol = protocol.into();
    }

    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[inline]
    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    #[inline]
    pub fn body(&self) -> &Body {
        &self.body
    }

    #[inline]
    pub fn body_mut(&mut self) -> &mut Body {
        &mut self.body
    }

    #[inline]
    pub fn set_body(&mut self, body: impl Into<Body>) {
        self.body = body.into();
    }

    #[inline]
    pub fn into_body(self) -> Body {
        self.body
    }

    /// Returns the media type, e.g: `"text/html"`.
    #[inline]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    #[inline]
    pub fn set_media_type(&mut self, media_type: impl Into<String>) {
        self.media_type = media_type.into();
    }

    /// Returns the character encoding, e.g: `"UTF-8"`.
    #[inline]
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    #[inline]
    pub fn set_encoding(&mut self, encoding: impl Into<String>) {
        self.encoding = encoding.into();
    }
}

// ===== Authentication =====

impl Response {
    /// Decode the `WWW-Authenticate` challenge with [`DigestAuth`].
    ///
    /// Returns empty challenge if the header is absent or empty.
    #[inline]
    pub fn digest(&self) -> Challenge {
        self.digest_with(&DigestAuth)
    }

    /// Decode the `WWW-Authenticate` challenge with given `codec`.
    ///
    /// Returns empty challenge if the header is absent or empty, otherwise returns the codec
    /// output as is.
    pub fn digest_with<A: AuthCodec + ?Sized>(&self, codec: &A) -> Challenge {
        match self.headers.get(WWW_AUTHENTICATE) {
            Some(value) if !value.is_empty() => {
                codec.decode(&String::from_utf8_lossy(value.as_bytes()))
            }
            _ => Challenge::new(),
        }
    }
}
