//! `WWW-Authenticate` Challenge Decoding.
//!
//! - [`AuthCodec`] the trait used by the response to decode a challenge
//! - [`DigestAuth`] the default decoder for `Digest` and `Basic` challenges
//! - [`Challenge`] the decoded scheme and parameters
use crate::log::debug;
use crate::matches;

#[cfg(test)]
mod test;

/// Decoder of a `WWW-Authenticate` header value.
pub trait AuthCodec {
    /// Decode challenge from header value.
    fn decode(&self, header: &str) -> Challenge;
}

impl<F> AuthCodec for F
where
    F: Fn(&str) -> Challenge,
{
    #[inline]
    fn decode(&self, header: &str) -> Challenge {
        self(header)
    }
}

/// Default challenge decoder.
///
/// Accepts an optional leading scheme, followed by comma or whitespace separated `key=value` and
/// `key="value"` parameters. Quoted values may contain commas and backslash escapes. Decoding
/// stops at the first malformed parameter, keeping everything before it.
///
/// ```
/// use retort::auth::{AuthCodec, DigestAuth};
///
/// let challenge = DigestAuth.decode(r#"Digest realm="api", qop="auth,auth-int", nonce=abc"#);
/// assert_eq!(challenge.scheme(), Some("Digest"));
/// assert_eq!(challenge.get("realm"), Some("api"));
/// assert_eq!(challenge.get("qop"), Some("auth,auth-int"));
/// assert_eq!(challenge.get("nonce"), Some("abc"));
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DigestAuth;

impl AuthCodec for DigestAuth {
    fn decode(&self, header: &str) -> Challenge {
        parse_challenge(header)
    }
}

/// Decoded authentication challenge.
///
/// Parameters keep their arrival order, lookup is ASCII case-insensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Challenge {
    scheme: Option<String>,
    params: Vec<(String, String)>,
}

impl Challenge {
    /// Create empty challenge.
    #[inline]
    pub const fn new() -> Self {
        Self {
            scheme: None,
            params: Vec::new(),
        }
    }

    /// Returns the authentication scheme, e.g: `"Digest"`.
    #[inline]
    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    /// Set the authentication scheme.
    #[inline]
    pub fn set_scheme(&mut self, scheme: impl Into<String>) {
        self.scheme = Some(scheme.into());
    }

    /// Returns the parameter value with given key.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v.as_str())
    }

    /// Insert parameter, replacing the value of an existing key in place.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let (key, value) = (key.into(), value.into());
        match self.params.iter_mut().find(|(k, _)| k.eq_ignore_ascii_case(&key)) {
            Some(param) => param.1 = value,
            None => self.params.push((key, value)),
        }
    }

    /// Returns the number of parameters.
    #[inline]
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Returns `true` if there is no parameter and no scheme.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.scheme.is_none() && self.params.is_empty()
    }

    /// Returns an iterator over the parameters in arrival order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K, V> FromIterator<(K, V)> for Challenge
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut challenge = Self::new();
        for (key, value) in iter {
            challenge.insert(key, value);
        }
        challenge
    }
}

// ===== Parsing =====

fn token_len(input: &str) -> usize {
    input
        .bytes()
        .position(|b| !matches::is_token(b))
        .unwrap_or(input.len())
}

fn parse_challenge(header: &str) -> Challenge {
    let mut challenge = Challenge::new();
    let mut rest = header.trim_ascii_start();

    let len = token_len(rest);
    if len != 0 && !rest[len..].trim_ascii_start().starts_with('=') {
        challenge.scheme = Some(rest[..len].to_owned());
        rest = &rest[len..];
    }

    loop {
        rest = rest.trim_start_matches(|c: char| c == ',' || c.is_ascii_whitespace());
        if rest.is_empty() {
            break;
        }

        let len = token_len(rest);
        if len == 0 {
            debug!("stopping challenge parse at {rest:?}");
            break;
        }
        let key = &rest[..len];

        let Some(value) = rest[len..].trim_ascii_start().strip_prefix('=') else {
            debug!("challenge parameter {key:?} without value");
            break;
        };
        let value = value.trim_ascii_start();

        let (value, remain) = match value.strip_prefix('"') {
            Some(quoted) => match unquote(quoted) {
                Some(ok) => ok,
                None => {
                    debug!("unterminated quoted value for challenge parameter {key:?}");
                    break;
                }
            },
            None => {
                let end = value
                    .find(|c: char| c == ',' || c.is_ascii_whitespace())
                    .unwrap_or(value.len());
                (value[..end].to_owned(), &value[end..])
            }
        };

        challenge.insert(key, value);
        rest = remain;
    }

    challenge
}

/// Read a quoted string after the opening quote, returns the unescaped value and the input after
/// the closing quote.
fn unquote(input: &str) -> Option<(String, &str)> {
    let mut value = String::new();
    let mut chars = input.char_indices();
    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some((value, &input[i + 1..])),
            '\\' => value.push(chars.next()?.1),
            c => value.push(c),
        }
    }
    None
}
