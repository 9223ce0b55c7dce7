//! A single redaction rule: a compiled pattern plus how to protect its matches.

use std::borrow::Cow;

use regex::bytes::{Captures, NoExpand, Regex};

use crate::{Error, Protection, Result};

/// Defines which parts of a value must be redacted and how.
///
/// The pattern is compiled once, at construction, and matched against raw
/// bytes so that payloads which are not valid UTF-8 can still be redacted.
/// A `Secret` is immutable once built.
#[derive(Clone, Debug)]
pub struct Secret {
    pattern: Regex,
    protection: Protection,
    replacement: Vec<u8>,
}

impl Secret {
    /// Compiles `pattern` and pairs it with a protection and replacement payload.
    ///
    /// Fails with [`Error::InvalidPattern`] if the pattern does not compile.
    pub fn new<R>(pattern: &str, protection: Protection, replacement: R) -> Result<Self>
    where
        R: Into<Vec<u8>>,
    {
        let compiled = Regex::new(pattern).map_err(|err| Error::invalid_pattern(pattern, err))?;
        Ok(Self {
            pattern: compiled,
            protection,
            replacement: replacement.into(),
        })
    }

    /// Source text of the compiled pattern.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    pub fn protection(&self) -> Protection {
        self.protection
    }

    pub fn replacement(&self) -> &[u8] {
        &self.replacement
    }

    /// Redacts every match of the pattern in `data`.
    ///
    /// Returns the input borrowed when nothing matches.
    #[must_use]
    pub fn redact<'a>(&self, data: &'a [u8]) -> Cow<'a, [u8]> {
        match self.protection {
            Protection::BlackOut => self.pattern.replace_all(data, |caps: &Captures<'_>| {
                self.replacement.repeat(char_count(&caps[0]))
            }),
            Protection::Censor => self
                .pattern
                .replace_all(data, NoExpand(self.replacement.as_slice())),
            Protection::Omit => {
                if self.pattern.is_match(data) {
                    Cow::Owned(self.replacement.clone())
                } else {
                    Cow::Borrowed(data)
                }
            }
        }
    }
}

/// Number of characters in `span`, counting each invalid UTF-8 byte as one.
fn char_count(span: &[u8]) -> usize {
    span.utf8_chunks()
        .map(|chunk| chunk.valid().chars().count() + chunk.invalid().len())
        .sum()
}
