/// An error that can occur while decoding or encoding a body with a media codec.
#[derive(Debug)]
pub enum MediaError {
    /// No codec registered for the media type.
    Unregistered,
    /// Value cannot be represented in the media type.
    Unsupported,
    /// JSON error.
    Json(serde_json::Error),
    /// Form url encoded deserialization error.
    FormDecode(serde_urlencoded::de::Error),
    /// Form url encoded serialization error.
    FormEncode(serde_urlencoded::ser::Error),
}

impl std::error::Error for MediaError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Unregistered | Self::Unsupported => None,
            Self::Json(err) => Some(err),
            Self::FormDecode(err) => Some(err),
            Self::FormEncode(err) => Some(err),
        }
    }
}

impl std::fmt::Display for MediaError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unregistered => f.write_str("unregistered media type"),
            Self::Unsupported => f.write_str("value not supported by media type"),
            Self::Json(err) => write!(f, "json: {err}"),
            Self::FormDecode(err) => write!(f, "form: {err}"),
            Self::FormEncode(err) => write!(f, "form: {err}"),
        }
    }
}

impl From<serde_json::Error> for MediaError {
    #[inline]
    fn from(v: serde_json::Error) -> Self {
        Self::Json(v)
    }
}

impl From<serde_urlencoded::de::Error> for MediaError {
    #[inline]
    fn from(v: serde_urlencoded::de::Error) -> Self {
        Self::FormDecode(v)
    }
}

impl From<serde_urlencoded::ser::Error> for MediaError {
    #[inline]
    fn from(v: serde_urlencoded::ser::Error) -> Self {
        Self::FormEncode(v)
    }
}
