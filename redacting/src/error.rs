//! Errors surfaced by rule construction and structured re-encoding.
//!
//! A payload that fails to parse as JSON is not an error: it is redacted as
//! plain text instead.

use thiserror::Error;

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A caller-supplied regular expression failed to compile.
    #[error("invalid pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// The redacted document could not be encoded.
    #[error("failed to serialize redacted document: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn invalid_pattern(pattern: &str, source: regex::Error) -> Self {
        Error::InvalidPattern {
            pattern: summarize_pattern(pattern),
            source,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Error::InvalidPattern { .. } => "invalid_pattern",
            Error::Serialize(_) => "serialize",
        }
    }
}

fn summarize_pattern(pattern: &str) -> String {
    const MAX_BYTES: usize = 200;
    if pattern.len() <= MAX_BYTES {
        return pattern.to_string();
    }
    let mut end = MAX_BYTES;
    while end > 0 && !pattern.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}…", &pattern[..end])
}
