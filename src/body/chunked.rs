use std::num::NonZeroU64;
use bytes::{Bytes, BytesMut};

use crate::body::error::ChunkedError;
use crate::log::warning;
use crate::matches;

/// 16 hex digits
const MAX_SIZE_DIGITS: usize = 16;

/// Chunked transfer coding decoder.
///
/// The decoder works on a complete body. Decoded data is appended to the output buffer as each
/// chunk is read, so on error the output contains everything decoded before the fault.
#[derive(Clone, Debug)]
pub struct ChunkedDecoder {
    phase: Phase,
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Phase {
    /// Expecting `chunk-size [ chunk-ext ] CRLF`.
    ReadLength,
    /// Expecting chunk data of given remaining length, followed by CRLF.
    ReadData(NonZeroU64),
    /// Last chunk found, skipping trailer fields until the empty line.
    ReadTrailer,
    Done,
}

impl Default for ChunkedDecoder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkedDecoder {
    /// Create new decoder, expecting the first chunk size line.
    #[inline]
    pub const fn new() -> Self {
        Self {
            phase: Phase::ReadLength,
        }
    }

    /// Returns `true` if the last chunk and the trailer section have been read.
    #[inline]
    pub fn is_done(&self) -> bool {
        matches!(self.phase, Phase::Done)
    }

    /// Decode `body`, appending chunk data into `output`.
    ///
    /// `body` is advanced past the consumed input. Anything after the trailer section is left in
    /// `body`.
    ///
    /// # Errors
    ///
    /// Returns error on malformed chunk framing. `output` still contains every chunk data decoded
    /// before the error, including a partial last chunk when the body is truncated, and `body`
    /// starts at the fault.
    pub fn decode(&mut self, body: &mut &[u8], output: &mut BytesMut) -> Result<(), ChunkedError> {
        loop {
            match self.phase {
                Phase::ReadLength => {
                    let input = *body;
                    let Some((line, rest)) = split_line(input) else {
                        // an unterminated size line is only truncated if it could still be one
                        if !input.is_empty() {
                            parse_chunk_size(input.strip_suffix(b"\r").unwrap_or(input))?;
                        }
                        return Err(ChunkedError::Truncated);
                    };
                    let size = parse_chunk_size(line)?;
                    *body = rest;
                    self.phase = match NonZeroU64::new(size) {
                        Some(size) => Phase::ReadData(size),
                        None => Phase::ReadTrailer,
                    };
                }
                Phase::ReadData(remaining) => {
                    let input = *body;
                    let remaining = remaining.get();
                    if (input.len() as u64) < remaining {
                        output.extend_from_slice(input);
                        *body = &[];
                        return Err(ChunkedError::Truncated);
                    }

                    #[allow(
                        clippy::cast_possible_truncation,
                        reason = "remaining <= body.len() which is usize"
                    )]
                    let (data, rest) = input.split_at(remaining as usize);
                    output.extend_from_slice(data);
                    *body = rest;

                    *body = match rest {
                        [b'\r', b'\n', rest @ ..] | [b'\n', rest @ ..] => rest,
                        [] | [b'\r'] => return Err(ChunkedError::Truncated),
                        _ => return Err(ChunkedError::InvalidSeparator),
                    };
                    self.phase = Phase::ReadLength;
                }
                Phase::ReadTrailer => {
                    // a missing final CRLF is tolerated
                    let Some((line, rest)) = split_line(*body) else {
                        *body = &[];
                        self.phase = Phase::Done;
                        continue;
                    };
                    *body = rest;
                    if line.is_empty() {
                        self.phase = Phase::Done;
                    }
                }
                Phase::Done => return Ok(()),
            }
        }
    }
}

/// Split at the first LF, the returned line excludes the line ending and a preceding CR.
fn split_line(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    let lf = bytes.iter().position(|&b| b == b'\n')?;
    let line = &bytes[..lf];
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    Some((line, &bytes[lf + 1..]))
}

/// chunk-size = 1*HEXDIG, optionally followed by whitespace or `;` chunk-ext
fn parse_chunk_size(line: &[u8]) -> Result<u64, ChunkedError> {
    let digits_len = line
        .iter()
        .position(|b| !b.is_ascii_hexdigit())
        .unwrap_or(line.len());

    match &line[digits_len..] {
        [] | [b';' | b' ' | b'\t', ..] => {}
        _ => return Err(ChunkedError::InvalidLength),
    }

    let digits = &line[..digits_len];
    if digits.is_empty() {
        return Err(ChunkedError::InvalidLength);
    }
    let digits = match digits.iter().position(|&b| b != b'0') {
        Some(nonzero) => &digits[nonzero..],
        None => return Ok(0),
    };
    if digits.len() > MAX_SIZE_DIGITS {
        return Err(ChunkedError::ChunkTooLarge);
    }

    let mut size = 0u64;
    for &digit in digits {
        let value = match digit {
            b'0'..=b'9' => digit - b'0',
            b'a'..=b'f' => digit - b'a' + 10,
            _ => digit - b'A' + 10,
        };
        size = (size << 4) | u64::from(value);
    }
    Ok(size)
}

/// Returns `true` if the `Transfer-Encoding` value contains `chunked`, ignoring case.
#[inline]
pub fn is_chunked(transfer_encoding: &str) -> bool {
    matches::contains_ignore_ascii_case(transfer_encoding.as_bytes(), b"chunked")
}

/// Decode a complete message body according to its `Transfer-Encoding` header value.
///
/// If the coding is not chunked, `body` is returned unchanged. Otherwise the concatenated chunk
/// data is returned with leading and trailing whitespace trimmed.
///
/// Malformed framing is not an error at this level. The data decoded before the fault is kept,
/// followed by the input from the fault onward as received. A truncated body keeps only the
/// decoded data.
///
/// ```
/// use bytes::Bytes;
///
/// let body = Bytes::from_static(b"4\r\nWiki\r\n5\r\npedia\r\n0\r\n\r\n");
/// assert_eq!(retort::body::decode_chunked(body, "chunked"), "Wikipedia");
///
/// let body = Bytes::from_static(b"already decoded");
/// assert_eq!(retort::body::decode_chunked(body, "chunked"), "already decoded");
/// ```
pub fn decode_chunked(body: Bytes, transfer_encoding: &str) -> Bytes {
    if !is_chunked(transfer_encoding) {
        return body;
    }

    let mut output = BytesMut::with_capacity(body.len());
    let mut rest = &body[..];
    match ChunkedDecoder::new().decode(&mut rest, &mut output) {
        Ok(()) | Err(ChunkedError::Truncated) => {}
        Err(err) => {
            warning!(
                "malformed chunked body, keeping {} decoded bytes and {} raw bytes: {err}",
                output.len(),
                rest.len(),
            );
            output.extend_from_slice(rest);
        }
    }

    let output = output.freeze();
    output.slice_ref(output.trim_ascii())
}
