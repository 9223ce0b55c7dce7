//! Structural redaction of decoded JSON documents.
//!
//! The walker dispatches on the kind of each node:
//!
//! | Node | Output |
//! |------|--------|
//! | `null`, booleans, numbers | Copied unchanged |
//! | String | Value chain applied to its bytes |
//! | Array | New array, each element walked, order kept |
//! | Object | New object, secret keys dropped, other values walked |
//!
//! Object keys are only ever filtered, never rewritten. Recursion depth
//! equals the nesting depth of the input.

use std::borrow::Cow;

use serde_json::{Map, Value};

use super::{chain::SecretChain, fields::SecretFields};

/// Rebuilds a [`Value`] tree with secrets redacted and secret fields removed.
#[derive(Clone, Copy, Debug)]
pub struct Walker<'a> {
    values: &'a SecretChain,
    fields: &'a SecretFields,
}

impl<'a> Walker<'a> {
    pub fn new(values: &'a SecretChain, fields: &'a SecretFields) -> Self {
        Self { values, fields }
    }

    /// Produces a redacted copy of `value`, leaving `value` untouched.
    #[must_use]
    pub fn walk(&self, value: &Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.values.apply_str(text).into_owned()),
            Value::Array(items) => Value::Array(items.iter().map(|item| self.walk(item)).collect()),
            Value::Object(entries) => Value::Object(
                entries
                    .iter()
                    .filter(|(key, _)| self.keeps(key))
                    .map(|(key, item)| (key.clone(), self.walk(item)))
                    .collect(),
            ),
            scalar => scalar.clone(),
        }
    }

    /// Redacts a tree the caller no longer needs, reusing its allocations.
    ///
    /// Produces the same output as [`Walker::walk`].
    #[must_use]
    pub fn walk_owned(&self, value: Value) -> Value {
        match value {
            Value::String(text) => Value::String(self.redact_string(text)),
            Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(|item| self.walk_owned(item))
                    .collect(),
            ),
            Value::Object(entries) => Value::Object(
                entries
                    .into_iter()
                    .filter(|(key, _)| self.keeps(key))
                    .map(|(key, item)| (key, self.walk_owned(item)))
                    .collect::<Map<_, _>>(),
            ),
            scalar => scalar,
        }
    }

    fn keeps(&self, key: &str) -> bool {
        !self.fields.is_secret(key)
    }

    /// Returns `text` itself when no secret touches it.
    fn redact_string(&self, text: String) -> String {
        let redacted = match self.values.apply_str(&text) {
            Cow::Borrowed(_) => None,
            Cow::Owned(redacted) => Some(redacted),
        };
        redacted.unwrap_or(text)
    }
}
