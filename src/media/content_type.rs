use serde_json::Value;

use crate::body::Body;
use crate::log::debug;
use crate::matches;

use super::MediaCodec;

/// Media type and charset extracted from a `Content-Type` header value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContentType<'a> {
    media_type: &'a str,
    charset: Option<&'a str>,
}

impl<'a> ContentType<'a> {
    /// Resolve `Content-Type` header value.
    ///
    /// The media type is the first run of ASCII letters, digits, `-`, `_`, `/` and `+`. Returns
    /// `None` if no such run exists.
    ///
    /// ```
    /// use retort::media::ContentType;
    ///
    /// let ctype = ContentType::resolve("text/html; charset=utf-8").unwrap();
    /// assert_eq!(ctype.media_type(), "text/html");
    /// assert_eq!(ctype.charset(), Some("utf-8"));
    /// ```
    pub fn resolve(value: &'a str) -> Option<Self> {
        let bytes = value.as_bytes();
        let start = bytes.iter().position(|&b| matches::is_media_type(b))?;
        let len = bytes[start..]
            .iter()
            .position(|&b| !matches::is_media_type(b))
            .unwrap_or(bytes.len() - start);

        // token bytes are ASCII, both ends are char boundaries
        let media_type = &value[start..start + len];
        let charset = find_charset(&value[start + len..]);

        Some(Self { media_type, charset })
    }

    /// Returns the media type, e.g: `"application/json"`.
    #[inline]
    pub fn media_type(&self) -> &'a str {
        self.media_type
    }

    /// Returns the `charset` parameter value as written, if any.
    #[inline]
    pub fn charset(&self) -> Option<&'a str> {
        self.charset
    }

    /// Decode `body` with the codec registered for this media type.
    ///
    /// Returns `body` unchanged if it is already decoded, if the media type is not registered, if
    /// decoding fails, or if the decoded value is empty (see [`is_empty_value`]).
    pub fn decode_body<M: MediaCodec + ?Sized>(&self, codec: &M, body: Body) -> Body {
        let bytes = match body {
            Body::Raw(bytes) => bytes,
            decoded => return decoded,
        };
        if !codec.is_registered(self.media_type) {
            return Body::Raw(bytes);
        }
        match codec.decode(self.media_type, &bytes) {
            Ok(value) if is_empty_value(&value) => {
                debug!("decoded {:?} body is empty, keeping raw body", self.media_type);
                Body::Raw(bytes)
            }
            Ok(value) => Body::Decoded(value),
            Err(err) => {
                debug!("failed to decode {:?} body, keeping raw body: {err}", self.media_type);
                Body::Raw(bytes)
            }
        }
    }
}

/// Returns `true` for `null`, `false`, zero, `""`, `"0"`, and an empty array or object.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty() || s == "0",
        Value::Array(items) => items.is_empty(),
        Value::Object(map) => map.is_empty(),
    }
}

/// Find `charset` in the parameters following the media type.
///
/// Parameter name is case-insensitive, whitespace around `;` and `=` is ignored, and a quoted
/// value is unquoted.
fn find_charset(params: &str) -> Option<&str> {
    params.split(';').skip(1).find_map(|param| {
        let (name, value) = param.split_once('=')?;
        if !name.trim().eq_ignore_ascii_case("charset") {
            return None;
        }
        let value = value.trim();
        let value = value
            .strip_prefix('"')
            .and_then(|v| v.strip_suffix('"'))
            .unwrap_or(value)
            .trim();
        (!value.is_empty()).then_some(value)
    })
}
