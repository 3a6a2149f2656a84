//! HTTP Response Body.
//!
//! - [`Body`] the payload, either raw bytes or a decoded structured value
//! - [`ChunkedDecoder`] the chunked transfer coding decoder
mod chunked;
pub mod error;

pub use chunked::{ChunkedDecoder, decode_chunked, is_chunked};
pub use error::ChunkedError;

use bytes::Bytes;
use serde_json::Value;

#[cfg(test)]
mod test;

/// Response payload.
///
/// The body starts as raw bytes, and is replaced by a [`Value`] when the media codec decodes it.
#[derive(Clone, Debug, PartialEq)]
pub enum Body {
    /// Raw payload, possibly after chunked decoding.
    Raw(Bytes),
    /// Payload decoded by a media codec.
    Decoded(Value),
}

impl Default for Body {
    #[inline]
    fn default() -> Self {
        Self::Raw(Bytes::new())
    }
}

impl Body {
    /// Returns the raw payload, or `None` if the body has been decoded.
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Raw(bytes) => Some(bytes),
            Self::Decoded(_) => None,
        }
    }

    /// Returns the raw payload as `str` if it is valid UTF-8.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        std::str::from_utf8(self.as_bytes()?).ok()
    }

    /// Returns the decoded value, or `None` if the body is raw.
    #[inline]
    pub fn as_decoded(&self) -> Option<&Value> {
        match self {
            Self::Raw(_) => None,
            Self::Decoded(value) => Some(value),
        }
    }

    /// Returns `true` if the body is raw.
    #[inline]
    pub fn is_raw(&self) -> bool {
        matches!(self, Self::Raw(_))
    }

    /// Returns `true` if the raw payload is empty, or the decoded value is `null`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Raw(bytes) => bytes.is_empty(),
            Self::Decoded(value) => value.is_null(),
        }
    }
}

impl From<Bytes> for Body {
    #[inline]
    fn from(value: Bytes) -> Self {
        Self::Raw(value)
    }
}

impl From<&'static str> for Body {
    #[inline]
    fn from(value: &'static str) -> Self {
        Self::Raw(Bytes::from_static(value.as_bytes()))
    }
}

impl From<String> for Body {
    #[inline]
    fn from(value: String) -> Self {
        Self::Raw(Bytes::from(value))
    }
}

impl From<Vec<u8>> for Body {
    #[inline]
    fn from(value: Vec<u8>) -> Self {
        Self::Raw(Bytes::from(value))
    }
}

impl From<Value> for Body {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Decoded(value)
    }
}
