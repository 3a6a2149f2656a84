use bytes::BufMut;

use super::{AsHeaderName, HeaderError, HeaderName, HeaderValue, iter::{GetAll, IntoIter, Iter}};
use crate::log::debug;

/// A single header name and value pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct HeaderField {
    pub(crate) name: HeaderName,
    pub(crate) value: HeaderValue,
}

/// HTTP Headers Multimap.
///
/// Fields are kept in insertion order. Lookup is ASCII case-insensitive while the original case
/// of the name is preserved for output.
///
/// Duplicate names are kept as separate fields, [`get`][HeaderMap::get] returns the first one,
/// [`get_all`][HeaderMap::get_all] returns every one in order.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct HeaderMap {
    fields: Vec<HeaderField>,
}

impl HeaderMap {
    /// Create new empty [`HeaderMap`].
    ///
    /// This function does not allocate.
    #[inline]
    pub const fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Create new empty [`HeaderMap`] with at least the specified capacity.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            fields: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of header fields, counting duplicates.
    #[inline]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if headers has no element.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub(crate) fn fields(&self) -> &[HeaderField] {
        &self.fields
    }
}

// ===== Lookup =====

impl HeaderMap {
    /// Returns `true` if the map contains a header value for given header name.
    #[inline]
    pub fn contains_key<K: AsHeaderName>(&self, name: K) -> bool {
        self.position(name.as_header_name()).is_some()
    }

    /// Returns a reference to the first header value corresponding to the given header name.
    ///
    /// ```rust
    /// use retort::headers::{standard::CONTENT_TYPE, HeaderMap, HeaderValue};
    ///
    /// let mut map = HeaderMap::new();
    /// map.insert(CONTENT_TYPE, HeaderValue::from_static(b"text/html"));
    /// assert_eq!(map.get("content-type").unwrap(), "text/html");
    /// ```
    #[inline]
    pub fn get<K: AsHeaderName>(&self, name: K) -> Option<&HeaderValue> {
        let index = self.position(name.as_header_name())?;
        Some(&self.fields[index].value)
    }

    /// Returns the first header value as `str` if present and valid UTF-8.
    #[inline]
    pub fn get_str<K: AsHeaderName>(&self, name: K) -> Option<&str> {
        self.get(name)?.to_str().ok()
    }

    /// Returns an iterator to all header values corresponding to the given header name.
    #[inline]
    pub fn get_all<K: AsHeaderName>(&self, name: K) -> GetAll<'_> {
        GetAll::new(self, name.as_header_name())
    }

    /// Returns an iterator over headers as name and value pair, in insertion order.
    #[inline]
    pub fn iter(&self) -> Iter<'_> {
        Iter::new(self)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name.eq_ignore_ascii_case(name))
    }
}

// ===== Mutation =====

impl HeaderMap {
    /// Insert a header, replacing every existing value with the same name.
    ///
    /// The replaced field keeps its position, the name is updated to the given case. Returns the
    /// previous first value, if any.
    pub fn insert(&mut self, name: HeaderName, value: HeaderValue) -> Option<HeaderValue> {
        let Some(index) = self.position(name.as_str()) else {
            self.fields.push(HeaderField { name, value });
            return None;
        };

        let mut current = 0;
        self.fields.retain(|field| {
            let keep = current <= index || !field.name.eq_ignore_ascii_case(name.as_str());
            current += 1;
            keep
        });

        let field = &mut self.fields[index];
        field.name = name;
        Some(std::mem::replace(&mut field.value, value))
    }

    /// Append a header, keeping existing values with the same name.
    #[inline]
    pub fn append(&mut self, name: HeaderName, value: HeaderValue) {
        self.fields.push(HeaderField { name, value });
    }

    /// Validate name and value, then [`insert`][HeaderMap::insert] them.
    ///
    /// # Errors
    ///
    /// Returns error if the name is not a valid token or the value contains invalid bytes.
    pub fn try_insert(&mut self, name: &str, value: &str) -> Result<Option<HeaderValue>, HeaderError> {
        let name = HeaderName::from_slice(name)?;
        let value = HeaderValue::from_slice(value)?;
        Ok(self.insert(name, value))
    }

    /// Remove every value with given header name, returns the first one.
    pub fn remove<K: AsHeaderName>(&mut self, name: K) -> Option<HeaderValue> {
        let name = name.as_header_name();
        let index = self.position(name)?;
        let first = self.fields.remove(index);
        self.fields.retain(|field| !field.name.eq_ignore_ascii_case(name));
        Some(first.value)
    }

    /// Clears the map, removing all fields.
    #[inline]
    pub fn clear(&mut self) {
        self.fields.clear();
    }
}

// ===== Wire Format =====

impl HeaderMap {
    /// Parse raw header lines, appending every field in order.
    ///
    /// Each line is split at the first `:`, the name and value are trimmed. Received fields are
    /// kept as written, without the length and character checks of [`HeaderName::from_slice`]
    /// and [`HeaderValue::from_slice`]. Lines without a colon, with an empty name, or with a
    /// name that is not UTF-8 are skipped.
    pub fn parse_lines<'a, I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = &'a [u8]>,
    {
        for line in lines {
            if line.trim_ascii().is_empty() {
                continue;
            }
            let Some(colon) = line.iter().position(|&b| b == b':') else {
                debug!("skipping header line without colon: {:?}", String::from_utf8_lossy(line));
                continue;
            };
            let (name, value) = (line[..colon].trim_ascii(), line[colon + 1..].trim_ascii());
            match HeaderName::from_received(name) {
                Ok(name) => self.append(name, HeaderValue::from_received(value)),
                Err(err) => {
                    debug!("skipping header line {:?}: {err}", String::from_utf8_lossy(line));
                }
            }
        }
    }

    /// Write every field as `Name: value` followed by CRLF.
    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        for field in &self.fields {
            buf.put_slice(field.name.as_str().as_bytes());
            buf.put_slice(b": ");
            buf.put_slice(field.value.as_bytes());
            buf.put_slice(b"\r\n");
        }
    }

    /// Render every field as `Name: value`, joined by CRLF.
    ///
    /// Non UTF-8 values are rendered lossily.
    pub fn render(&self) -> String {
        let mut lines = Vec::with_capacity(self.fields.len());
        for field in &self.fields {
            lines.push(format!(
                "{}: {}",
                field.name,
                String::from_utf8_lossy(field.value.as_bytes())
            ));
        }
        lines.join("\r\n")
    }
}

// ===== Traits =====

impl Extend<(HeaderName, HeaderValue)> for HeaderMap {
    fn extend<T: IntoIterator<Item = (HeaderName, HeaderValue)>>(&mut self, iter: T) {
        self.fields
            .extend(iter.into_iter().map(|(name, value)| HeaderField { name, value }));
    }
}

impl FromIterator<(HeaderName, HeaderValue)> for HeaderMap {
    fn from_iter<T: IntoIterator<Item = (HeaderName, HeaderValue)>>(iter: T) -> Self {
        let mut map = HeaderMap::new();
        map.extend(iter);
        map
    }
}

impl IntoIterator for HeaderMap {
    type Item = (HeaderName, HeaderValue);

    type IntoIter = IntoIter;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.fields)
    }
}

impl std::fmt::Debug for HeaderMap {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_map()
            .entries(self.fields.iter().map(|field| (&field.name, &field.value)))
            .finish()
    }
}
