//! Ordered application of secrets to a single value.

use std::borrow::Cow;

use super::secret::Secret;

/// An ordered list of [`Secret`]s applied to one value, left to right.
///
/// Each secret sees the output of the previous one, so rules compound. Once a
/// value has been emptied the remaining secrets are skipped.
#[derive(Clone, Debug, Default)]
pub struct SecretChain {
    secrets: Vec<Secret>,
}

impl SecretChain {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, secret: Secret) {
        self.secrets.push(secret);
    }

    pub fn len(&self) -> usize {
        self.secrets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.secrets.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Secret> {
        self.secrets.iter()
    }

    /// Folds every secret over `data` in order.
    ///
    /// An empty value is returned as soon as it appears, including when the
    /// input itself is empty.
    #[must_use]
    pub fn apply<'a>(&self, data: &'a [u8]) -> Cow<'a, [u8]> {
        let mut current = Cow::Borrowed(data);
        for secret in &self.secrets {
            if current.is_empty() {
                break;
            }
            let redacted = match secret.redact(&current) {
                Cow::Borrowed(_) => continue,
                Cow::Owned(redacted) => redacted,
            };
            current = Cow::Owned(redacted);
        }
        current
    }

    /// Applies the chain to a string leaf.
    ///
    /// Output that is no longer valid UTF-8 (only possible with a non-UTF-8
    /// replacement payload) is converted lossily.
    #[must_use]
    pub fn apply_str<'a>(&self, value: &'a str) -> Cow<'a, str> {
        match self.apply(value.as_bytes()) {
            Cow::Borrowed(_) => Cow::Borrowed(value),
            Cow::Owned(bytes) => match String::from_utf8(bytes) {
                Ok(text) => Cow::Owned(text),
                Err(err) => Cow::Owned(String::from_utf8_lossy(err.as_bytes()).into_owned()),
            },
        }
    }
}

impl FromIterator<Secret> for SecretChain {
    fn from_iter<I: IntoIterator<Item = Secret>>(iter: I) -> Self {
        Self {
            secrets: iter.into_iter().collect(),
        }
    }
}

impl Extend<Secret> for SecretChain {
    fn extend<I: IntoIterator<Item = Secret>>(&mut self, iter: I) {
        self.secrets.extend(iter);
    }
}

impl<'a> IntoIterator for &'a SecretChain {
    type Item = &'a Secret;
    type IntoIter = std::slice::Iter<'a, Secret>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
