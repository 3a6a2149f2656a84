use bytes::Bytes;

use crate::headers::error::HeaderError;
use crate::matches;

/// HTTP Header Value.
///
/// Value may contain `obs-text`, use [`to_str`][HeaderValue::to_str] to check for valid UTF-8.
#[derive(Clone, PartialEq, Eq)]
pub struct HeaderValue {
    bytes: Bytes,
}

impl HeaderValue {
    /// Parse header value from static bytes.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header value.
    #[inline]
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        match validate_header_value(bytes) {
            Ok(()) => Self {
                bytes: Bytes::from_static(bytes),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header value from [`Bytes`].
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header value.
    #[inline]
    pub fn from_bytes<B: Into<Bytes>>(value: B) -> Result<Self, HeaderError> {
        let bytes = value.into();
        validate_header_value(&bytes)?;
        Ok(Self { bytes })
    }

    /// Parse header value by copying from slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header value.
    #[inline]
    pub fn from_slice<A: AsRef<[u8]>>(value: A) -> Result<Self, HeaderError> {
        let bytes = value.as_ref();
        validate_header_value(bytes)?;
        Ok(Self {
            bytes: Bytes::copy_from_slice(bytes),
        })
    }

    /// Header value as received in a message, without validation.
    #[inline]
    pub(crate) fn from_received(value: &[u8]) -> Self {
        Self {
            bytes: Bytes::copy_from_slice(value),
        }
    }

    /// Returns header value as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns header value as `str`.
    ///
    /// # Errors
    ///
    /// Returns error if the value contains non UTF-8 `obs-text`.
    #[inline]
    pub fn to_str(&self) -> Result<&str, HeaderError> {
        std::str::from_utf8(&self.bytes).map_err(|_| HeaderError::NotUtf8)
    }

    /// Returns `true` if the value has zero length.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

// ===== Parsing =====

const MAX_HEADER_VALUE_LEN: usize = 1 << 13;  // 8KB

/// Leading and trailing whitespace is rejected, the parser trims it before constructing value.
const fn validate_header_value(mut bytes: &[u8]) -> Result<(), HeaderError> {
    if let [b' ' | b'\t', ..] | [.., b' ' | b'\t'] = bytes {
        return Err(HeaderError::Invalid);
    }
    if bytes.len() > MAX_HEADER_VALUE_LEN {
        return Err(HeaderError::TooLong);
    }
    while let [byte, rest @ ..] = bytes {
        if !matches::is_header_value(*byte) {
            return Err(HeaderError::Invalid);
        }
        bytes = rest;
    }
    Ok(())
}

// ===== Traits =====

impl TryFrom<&str> for HeaderValue {
    type Error = HeaderError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_slice(value)
    }
}

impl TryFrom<String> for HeaderValue {
    type Error = HeaderError;

    #[inline]
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_bytes(value)
    }
}

impl PartialEq<str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<&str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl std::fmt::Debug for HeaderValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.to_str() {
            Ok(s) => f.debug_tuple("HeaderValue").field(&s).finish(),
            Err(_) => f.debug_tuple("HeaderValue").field(&self.bytes).finish(),
        }
    }
}
