/// An error that can occur when reading or setting the response status.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StatusError {
    /// Status code is unset or not a registered status code.
    Unknown,
    /// Status message is unset.
    Missing,
}

impl StatusError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::Unknown => "unknown status code",
            Self::Missing => "missing status message",
        }
    }
}

impl std::error::Error for StatusError {}

impl std::fmt::Display for StatusError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
