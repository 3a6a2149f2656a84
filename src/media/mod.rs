//! Media Type Codecs.
//!
//! - [`MediaCodec`] the trait used by the response to decode and encode its body
//! - [`Media`] a registry of codecs by media type, with JSON and form url encoded registered
//! - [`ContentType`] the `Content-Type` header value resolver
use std::sync::LazyLock;

use bytes::Bytes;
use serde_json::{Map, Value};

mod content_type;
pub mod error;

pub use content_type::{ContentType, is_empty_value};
pub use error::MediaError;


/// A codec that converts a body between its wire form and a structured [`Value`].
pub trait MediaCodec {
    /// Returns `true` if a codec exists for `media_type`.
    fn is_registered(&self, media_type: &str) -> bool;

    /// Decode `body` as `media_type`.
    ///
    /// # Errors
    ///
    /// Returns error if `media_type` is not registered or `body` is malformed.
    fn decode(&self, media_type: &str, body: &[u8]) -> Result<Value, MediaError>;

    /// Encode `value` as `media_type`.
    ///
    /// # Errors
    ///
    /// Returns error if `media_type` is not registered or cannot represent `value`.
    fn encode(&self, media_type: &str, value: &Value) -> Result<Bytes, MediaError>;
}

/// Function that decodes a body.
pub type DecodeFn = fn(&[u8]) -> Result<Value, MediaError>;

/// Function that encodes a value into a body.
pub type EncodeFn = fn(&Value) -> Result<Bytes, MediaError>;

#[derive(Clone)]
struct Handler {
    media_type: Box<str>,
    decode: DecodeFn,
    encode: EncodeFn,
}

/// Media codec registry.
///
/// Media type lookup is ASCII case-insensitive. A structured syntax suffix `+json` falls back to
/// the `application/json` codec.
#[derive(Clone)]
pub struct Media {
    handlers: Vec<Handler>,
}

impl Media {
    /// `application/json`
    pub const JSON: &'static str = "application/json";

    /// `application/x-www-form-urlencoded`
    pub const FORM: &'static str = "application/x-www-form-urlencoded";

    /// Create registry with no codec.
    #[inline]
    pub const fn empty() -> Self {
        Self { handlers: Vec::new() }
    }

    /// Create registry with JSON and form url encoded codecs.
    pub fn new() -> Self {
        let mut media = Self::empty();
        media
            .register(Self::JSON, decode_json, encode_json)
            .register(Self::FORM, decode_form, encode_form);
        media
    }

    /// Returns the shared registry created by [`Media::new`].
    pub fn standard() -> &'static Media {
        static STANDARD: LazyLock<Media> = LazyLock::new(Media::new);
        &STANDARD
    }

    /// Register codec for `media_type`, replacing existing one.
    pub fn register(&mut self, media_type: &str, decode: DecodeFn, encode: EncodeFn) -> &mut Self {
        let handler = Handler {
            media_type: media_type.to_ascii_lowercase().into(),
            decode,
            encode,
        };
        match self.handlers.iter_mut().find(|h| h.media_type == handler.media_type) {
            Some(existing) => *existing = handler,
            None => self.handlers.push(handler),
        }
        self
    }

    fn handler(&self, media_type: &str) -> Option<&Handler> {
        let find = |media_type: &str| {
            self.handlers
                .iter()
                .find(|h| h.media_type.eq_ignore_ascii_case(media_type))
        };
        find(media_type).or_else(|| {
            let suffix = media_type.len().checked_sub(5)?;
            match media_type.get(suffix..) {
                Some(json) if json.eq_ignore_ascii_case("+json") => find(Self::JSON),
                _ => None,
            }
        })
    }
}

impl Default for Media {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl MediaCodec for Media {
    #[inline]
    fn is_registered(&self, media_type: &str) -> bool {
        self.handler(media_type).is_some()
    }

    fn decode(&self, media_type: &str, body: &[u8]) -> Result<Value, MediaError> {
        match self.handler(media_type) {
            Some(handler) => (handler.decode)(body),
            None => Err(MediaError::Unregistered),
        }
    }

    fn encode(&self, media_type: &str, value: &Value) -> Result<Bytes, MediaError> {
        match self.handler(media_type) {
            Some(handler) => (handler.encode)(value),
            None => Err(MediaError::Unregistered),
        }
    }
}

impl std::fmt::Debug for Media {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Media")
            .field(&self.handlers.iter().map(|h| &*h.media_type).collect::<Vec<_>>())
            .finish()
    }
}

// ===== Codecs =====

/// Decode JSON body.
pub fn decode_json(body: &[u8]) -> Result<Value, MediaError> {
    Ok(serde_json::from_slice(body)?)
}

/// Encode value as JSON.
pub fn encode_json(value: &Value) -> Result<Bytes, MediaError> {
    Ok(Bytes::from(serde_json::to_vec(value)?))
}

/// Decode form url encoded body into an object of strings.
///
/// A repeated key keeps the last value.
pub fn decode_form(body: &[u8]) -> Result<Value, MediaError> {
    let pairs: Vec<(String, String)> = serde_urlencoded::from_bytes(body)?;
    let map: Map<String, Value> = pairs
        .into_iter()
        .map(|(key, value)| (key, Value::String(value)))
        .collect();
    Ok(Value::Object(map))
}

/// Encode an object as form url encoded.
///
/// Non string values are written in their JSON form, `null` as an empty value.
pub fn encode_form(value: &Value) -> Result<Bytes, MediaError> {
    let Value::Object(map) = value else {
        return Err(MediaError::Unsupported);
    };
    let pairs: Vec<(&str, String)> = map
        .iter()
        .map(|(key, value)| {
            let value = match value {
                Value::String(s) => s.clone(),
                Value::Null => String::new(),
                other => other.to_string(),
            };
            (key.as_str(), value)
        })
        .collect();
    Ok(Bytes::from(serde_urlencoded::to_string(pairs)?))
}
