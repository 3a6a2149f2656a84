/// An error that can occur while decoding a chunked message body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ChunkedError {
    /// Chunk size line does not start with hexadecimal digits, or contains garbage after it.
    InvalidLength,
    /// Chunk size does not fit in 64 bits.
    ChunkTooLarge,
    /// Chunk data is not followed by CRLF.
    InvalidSeparator,
    /// Body ends before the last chunk.
    Truncated,
}

impl ChunkedError {
    pub(crate) const fn message(&self) -> &'static str {
        match self {
            Self::InvalidLength => "invalid chunk size",
            Self::ChunkTooLarge => "chunk too large",
            Self::InvalidSeparator => "chunk data not followed by crlf",
            Self::Truncated => "unexpected end of chunked body",
        }
    }
}

impl std::error::Error for ChunkedError {}

impl std::fmt::Display for ChunkedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
