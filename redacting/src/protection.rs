//! How a matched secret is protected.
//!
//! A protection is a pure byte transformation policy. It does not know about
//! patterns or document structure; [`crate::Secret`] pairs it with both.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A strategy for protecting the parts of a value that match a pattern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protection {
    /// Replace every character of each match with one copy of the replacement.
    #[serde(alias = "black_out")]
    BlackOut,
    /// Replace each match, whatever its length, with the replacement once.
    Censor,
    /// Replace the whole value with the replacement as soon as anything matches.
    Omit,
}

impl Protection {
    pub fn as_str(self) -> &'static str {
        match self {
            Protection::BlackOut => "blackout",
            Protection::Censor => "censor",
            Protection::Omit => "omit",
        }
    }
}

impl fmt::Display for Protection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
