use crate::model::FixedId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuillError {
    #[error("Truncated input at byte {offset}: needed {needed} byte(s), {available} available")]
    TruncatedInput {
        offset: usize,
        needed: usize,
        available: usize,
    },

    #[error("Negative length prefix {length} at byte {offset}")]
    NegativeLength { offset: usize, length: i16 },

    #[error("Invalid UTF-8 text at byte {offset}: {source}")]
    InvalidText {
        offset: usize,
        #[source]
        source: std::str::Utf8Error,
    },

    #[error("Malformed index: {0}")]
    MalformedIndex(String),

    #[error("Malformed page: {0}")]
    MalformedPage(String),

    #[error("Page {number} ({id}) is listed in the index but has no data")]
    MissingPage { number: usize, id: FixedId },

    #[error("Page {number}: {source}")]
    Page {
        number: usize,
        #[source]
        source: Box<QuillError>,
    },

    #[error("Encode error: {0}")]
    Encode(String),

    #[error("Archive error: {0}")]
    Archive(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl QuillError {
    /// Strips assembler annotations, returning the error raised by the decoder.
    pub fn root(&self) -> &QuillError {
        match self {
            QuillError::Page { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuillError>;
