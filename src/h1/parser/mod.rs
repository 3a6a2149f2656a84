//! HTTP/1.x Response Message Parser.
//!
//! [`parse`] works on a complete message. The head and the body are separated by the first empty
//! line, the first line of the head is the status line, and the rest are header fields.
//!
//! Parsing is lenient, it never fails. A message without a head is treated as body only, and a
//! status line that cannot be parsed is dropped while the header fields are still collected.
use bytes::Bytes;
use std::borrow::Cow;

use crate::headers::HeaderMap;
use crate::log::debug;

#[cfg(test)]
mod test;

const HEADER_END: &[u8] = b"\r\n\r\n";

const HTTP_PREFIX: &[u8] = b"HTTP/";

// ===== Status Line =====

/// Parsed response status line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusLine {
    /// Protocol version, e.g: `"1.1"`.
    pub version: String,
    /// Status code as written, not checked against known status codes.
    pub code: u32,
    /// Reason phrase, empty if absent.
    pub reason: String,
}

impl StatusLine {
    /// Returns the protocol, e.g: `"HTTP/1.1"`.
    #[inline]
    pub fn protocol(&self) -> String {
        format!("HTTP/{}", self.version)
    }
}

/// Parse status line.
///
/// Accepts `HTTP/<digits>.<digits> <code> <reason>`, where `HTTP` is case-insensitive, the
/// separators are any ASCII whitespace, and leading whitespace is allowed. The reason may be
/// empty but the separator after the code may not. Returns `None` if the line does not match or
/// the code does not fit in `u32`.
///
/// ```
/// use retort::h1::parser::parse_status_line;
///
/// let line = parse_status_line(b"HTTP/1.1 404 Not Found").unwrap();
/// assert_eq!(line.protocol(), "HTTP/1.1");
/// assert_eq!(line.code, 404);
/// assert_eq!(line.reason, "Not Found");
/// ```
pub fn parse_status_line(line: &[u8]) -> Option<StatusLine> {
    let line = line.trim_ascii_start();
    let (prefix, rest) = line.split_at_checked(HTTP_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(HTTP_PREFIX) {
        return None;
    }

    let (major, after) = split_digits(rest)?;
    let after = after.strip_prefix(b".")?;
    let (minor, after) = split_digits(after)?;
    let version = &rest[..major.len() + 1 + minor.len()];

    let after = split_whitespace(after)?;
    let (code, after) = split_digits(after)?;
    let reason = split_whitespace(after)?.trim_ascii_end();

    // digits are ASCII
    let code = std::str::from_utf8(code).ok()?.parse().ok()?;

    Some(StatusLine {
        version: String::from_utf8_lossy(version).into_owned(),
        code,
        reason: String::from_utf8_lossy(reason).into_owned(),
    })
}

fn split_digits(bytes: &[u8]) -> Option<(&[u8], &[u8])> {
    let len = bytes
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(bytes.len());
    match len {
        0 => None,
        len => Some(bytes.split_at(len)),
    }
}

fn split_whitespace(bytes: &[u8]) -> Option<&[u8]> {
    match bytes {
        [byte, ..] if byte.is_ascii_whitespace() => Some(bytes.trim_ascii_start()),
        _ => None,
    }
}

// ===== Message =====

/// Raw response split into status line, header fields, and body.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Message {
    /// Status line, `None` if absent or malformed.
    pub status: Option<StatusLine>,
    /// Header fields in arrival order.
    pub headers: HeaderMap,
    /// Message body, trimmed unless a status line was parsed.
    pub body: Bytes,
}

impl Message {
    fn body_only(raw: &Bytes) -> Self {
        Self {
            status: None,
            headers: HeaderMap::new(),
            body: trim(raw),
        }
    }
}

/// Parse complete response message.
///
/// 1. Split at the first CRLF CRLF. Without it, or with a whitespace only head, the whole trimmed
///    input is the body.
/// 2. Split the head into lines at LF, stray CR are removed.
/// 3. The first line is parsed as status line, the rest are appended as header fields.
/// 4. If the status line does not match, it is dropped and the body is trimmed.
pub fn parse(raw: Bytes) -> Message {
    let Some(end) = find_header_end(&raw) else {
        return Message::body_only(&raw);
    };

    let head = &raw[..end];
    if head.iter().all(u8::is_ascii_whitespace) {
        return Message::body_only(&raw.slice(end + HEADER_END.len()..));
    }

    let lines: Vec<Cow<'_, [u8]>> = head.split(|&b| b == b'\n').map(strip_cr).collect();
    let (first, fields) = match lines.split_first() {
        Some(ok) => ok,
        None => return Message::body_only(&raw),
    };

    let mut headers = HeaderMap::with_capacity(fields.len());
    headers.parse_lines(fields.iter().map(|line| &**line));

    let body = raw.slice(end + HEADER_END.len()..);
    let status = parse_status_line(first);

    match status {
        Some(status) => Message {
            status: Some(status),
            headers,
            body,
        },
        None => {
            debug!("dropping malformed status line: {:?}", String::from_utf8_lossy(first));
            Message {
                status: None,
                headers,
                body: trim(&body),
            }
        }
    }
}

fn find_header_end(bytes: &[u8]) -> Option<usize> {
    bytes
        .windows(HEADER_END.len())
        .position(|window| window == HEADER_END)
}

fn strip_cr(line: &[u8]) -> Cow<'_, [u8]> {
    if line.contains(&b'\r') {
        Cow::Owned(line.iter().copied().filter(|&b| b != b'\r').collect())
    } else {
        Cow::Borrowed(line)
    }
}

fn trim(bytes: &Bytes) -> Bytes {
    bytes.slice_ref(bytes.trim_ascii())
}
