use bytes::Bytes;

use crate::headers::error::HeaderError;
use crate::matches;

/// HTTP Header name.
///
/// # Case Preservation
///
/// The original case is kept for output, while equality and lookup are ASCII case-insensitive.
#[derive(Clone)]
pub struct HeaderName {
    /// always valid UTF-8
    bytes: Bytes,
}

impl HeaderName {
    /// Parse header name from static bytes.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header name.
    #[inline]
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        match validate_header_name(bytes) {
            Ok(()) => Self {
                bytes: Bytes::from_static(bytes),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header name from [`Bytes`].
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header name.
    #[inline]
    pub fn from_bytes<B: Into<Bytes>>(name: B) -> Result<Self, HeaderError> {
        let bytes = name.into();
        validate_header_name(&bytes)?;
        Ok(Self { bytes })
    }

    /// Parse header name by copying from slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header name.
    #[inline]
    pub fn from_slice<A: AsRef<[u8]>>(name: A) -> Result<Self, HeaderError> {
        let bytes = name.as_ref();
        validate_header_name(bytes)?;
        Ok(Self {
            bytes: Bytes::copy_from_slice(bytes),
        })
    }

    /// Header name as received in a message.
    ///
    /// Only requires a non-empty UTF-8 name, so fields that are not strictly valid still survive
    /// a parse and render round trip.
    pub(crate) fn from_received(name: &[u8]) -> Result<Self, HeaderError> {
        if name.is_empty() {
            return Err(HeaderError::Empty);
        }
        std::str::from_utf8(name).map_err(|_| HeaderError::NotUtf8)?;
        Ok(Self {
            bytes: Bytes::copy_from_slice(name),
        })
    }

    /// Extracts a string slice of the header name, in its original case.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: `bytes` is either `tchar` only, which is a subset of ASCII, or checked UTF-8
        unsafe { std::str::from_utf8_unchecked(&self.bytes) }
    }

    /// Checks that two header name are an ASCII case-insensitive match.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, name: &str) -> bool {
        self.bytes.eq_ignore_ascii_case(name.as_bytes())
    }
}

// ===== Parser =====

const MAX_HEADER_NAME_LEN: usize = 1024;  // 1KB

/// token       = 1*tchar
/// field-name  = token
const fn validate_header_name(mut bytes: &[u8]) -> Result<(), HeaderError> {
    if !matches!(bytes.len(), 1..=MAX_HEADER_NAME_LEN) {
        return Err(HeaderError::invalid_len(bytes.len()));
    }

    while let [byte, rest @ ..] = bytes {
        if matches::is_token(*byte) {
            bytes = rest;
        } else {
            return Err(HeaderError::Invalid)
        }
    }

    Ok(())
}

// ===== Lookup Key =====

/// A type that can be used to lookup a header in [`HeaderMap`].
///
/// [`HeaderMap`]: super::HeaderMap
pub trait AsHeaderName {
    /// Returns the name to compare against, case-insensitively.
    fn as_header_name(&self) -> &str;
}

impl AsHeaderName for HeaderName {
    #[inline]
    fn as_header_name(&self) -> &str {
        self.as_str()
    }
}

impl AsHeaderName for str {
    #[inline]
    fn as_header_name(&self) -> &str {
        self
    }
}

impl AsHeaderName for String {
    #[inline]
    fn as_header_name(&self) -> &str {
        self
    }
}

impl<K: AsHeaderName + ?Sized> AsHeaderName for &K {
    #[inline]
    fn as_header_name(&self) -> &str {
        K::as_header_name(self)
    }
}

// ===== Traits =====

impl TryFrom<&str> for HeaderName {
    type Error = HeaderError;

    #[inline]
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::from_slice(value)
    }
}

impl std::fmt::Display for HeaderName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::fmt::Debug for HeaderName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeaderName").field(&self.as_str()).finish()
    }
}

impl PartialEq for HeaderName {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bytes.eq_ignore_ascii_case(&other.bytes)
    }
}

impl Eq for HeaderName {}

impl PartialEq<str> for HeaderName {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

impl PartialEq<&str> for HeaderName {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        self.eq_ignore_ascii_case(other)
    }
}

// ===== Standard Headers =====

/// HTTP Standard Headers used by the response parser.
pub mod standard {
    use super::HeaderName;

    /// Indicates the media type of the resource.
    pub const CONTENT_TYPE: HeaderName = HeaderName::from_static(b"Content-Type");

    /// Specifies the form of encoding used to safely transfer the payload body to the user.
    pub const TRANSFER_ENCODING: HeaderName = HeaderName::from_static(b"Transfer-Encoding");

    /// Defines the authentication method that should be used to access a resource.
    pub const WWW_AUTHENTICATE: HeaderName = HeaderName::from_static(b"WWW-Authenticate");
}
