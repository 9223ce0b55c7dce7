//! Key matchers for dropping whole entries from structured data.

use regex::Regex;

use crate::{Error, Result};

/// A set of patterns tested against object keys.
///
/// Patterns are unanchored regular expressions: `date` matches both `date`
/// and `create_date`. Names registered with [`SecretFields::add_exact`] match
/// whole keys only.
#[derive(Clone, Debug, Default)]
pub struct SecretFields {
    patterns: Vec<Regex>,
    names: Vec<String>,
}

impl SecretFields {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a key pattern.
    ///
    /// Fails with [`Error::InvalidPattern`] if the pattern does not compile;
    /// the set is left unchanged in that case.
    pub fn add(&mut self, pattern: &str) -> Result<()> {
        let regex = Regex::new(pattern).map_err(|err| Error::invalid_pattern(pattern, err))?;
        self.patterns.push(regex);
        Ok(())
    }

    /// Registers a matcher for keys equal to `name`.
    pub fn add_exact<S: Into<String>>(&mut self, name: S) {
        self.names.push(name.into());
    }

    /// Returns `true` if `key` equals a registered name or matches any
    /// registered pattern.
    pub fn is_secret(&self, key: &str) -> bool {
        self.names.iter().any(|name| name == key)
            || self.patterns.iter().any(|pattern| pattern.is_match(key))
    }

    pub fn len(&self) -> usize {
        self.patterns.len() + self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty() && self.names.is_empty()
    }

    /// Source text of every registered pattern, in registration order.
    pub fn patterns(&self) -> impl Iterator<Item = &str> + '_ {
        self.patterns.iter().map(Regex::as_str)
    }

    /// Every registered exact key name, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}
