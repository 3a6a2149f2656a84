//! Response Serialization.
//!
//! ```text
//! <protocol> <code> <message> CRLF
//! (<name>: <value> CRLF)*
//! CRLF
//! <body>
//! ```
//!
//! A `Content-Type` field is emitted after the existing headers when the media type is not
//! `text/html` and no `Content-Type` header is present. Rendering never mutates the response.
use bytes::{BufMut, Bytes, BytesMut};

use crate::body::Body;
use crate::headers::standard::CONTENT_TYPE;
use crate::log::debug;
use crate::media::{Media, MediaCodec};
use crate::response::{DEFAULT_MEDIA_TYPE, Response};

/// Write response into `buf`, encoding a decoded body with `codec`.
pub fn write_response<M, B>(res: &Response, codec: &M, buf: &mut B)
where
    M: MediaCodec + ?Sized,
    B: BufMut,
{
    let status = res.status();

    buf.put_slice(res.protocol().as_bytes());
    buf.put_slice(b" ");
    if let Some(code) = status.code {
        buf.put_slice(itoa::Buffer::new().format(code).as_bytes());
    }
    buf.put_slice(b" ");
    if let Some(message) = &status.message {
        buf.put_slice(message.as_bytes());
    }
    buf.put_slice(b"\r\n");

    res.headers().write_to(buf);
    if res.media_type() != DEFAULT_MEDIA_TYPE && !res.headers().contains_key(CONTENT_TYPE) {
        buf.put_slice(CONTENT_TYPE.as_str().as_bytes());
        buf.put_slice(b": ");
        buf.put_slice(res.media_type().as_bytes());
        buf.put_slice(b"\r\n");
    }

    // an empty header section adds no line of its own, so the head still ends in one blank line
    buf.put_slice(b"\r\n");
    buf.put_slice(&encode_body(codec, res.media_type(), res.body()));
}

/// Returns the wire form of `body`.
///
/// A decoded body is encoded with the codec of `media_type`, falling back to JSON text.
pub fn encode_body<M: MediaCodec + ?Sized>(codec: &M, media_type: &str, body: &Body) -> Bytes {
    match body {
        Body::Raw(bytes) => bytes.clone(),
        Body::Decoded(value) => match codec.encode(media_type, value) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!("cannot encode body as {media_type:?}, writing json: {err}");
                Bytes::from(value.to_string())
            }
        },
    }
}

impl Response {
    /// Write response into `buf` with the standard [`Media`] codecs.
    #[inline]
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        write_response(self, Media::standard(), buf);
    }

    /// Render response into bytes with the standard [`Media`] codecs.
    #[inline]
    pub fn to_bytes(&self) -> Bytes {
        self.to_bytes_with(Media::standard())
    }

    /// Render response into bytes, encoding a decoded body with `codec`.
    pub fn to_bytes_with<M: MediaCodec + ?Sized>(&self, codec: &M) -> Bytes {
        let mut buf = BytesMut::with_capacity(128);
        write_response(self, codec, &mut buf);
        buf.freeze()
    }
}

/// Renders lossily as UTF-8.
impl std::fmt::Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&String::from_utf8_lossy(&self.to_bytes()))
    }
}
