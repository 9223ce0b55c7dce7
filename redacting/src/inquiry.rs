//! The public entrypoint: redact raw payloads that may or may not be JSON.

use serde::{Deserialize, Serialize};
use serde_json::{Deserializer, Value};

use crate::{
    config::InquiryConfig,
    redaction::{SecretChain, SecretFields, Walker},
    Result, Secret,
};

/// Holds the secrets that must not leave a payload.
///
/// Value secrets apply to every JSON string and to payloads that are not
/// JSON at all. Secret fields apply only to JSON object keys: matching entries
/// are removed, whatever their value.
///
/// Registration takes `&mut self` and redaction takes `&self`, so the rule
/// set cannot change while a redaction is in flight. A configured `Inquiry`
/// can be shared across threads.
///
/// ```rust
/// use redacting::{Inquiry, Protection, Secret};
///
/// let mut inquiry = Inquiry::new();
/// inquiry.add_secret_value(Secret::new("secret", Protection::BlackOut, "#")?);
/// inquiry.add_secret_field("date")?;
///
/// let json = inquiry.redact(br#"{"date":"2020-01-01","note":"a secret"}"#)?;
/// assert_eq!(json, br#"{"note":"a ######"}"#);
///
/// let text = inquiry.redact(b"my secret word")?;
/// assert_eq!(text, b"my ###### word");
/// # Ok::<(), redacting::Error>(())
/// ```
#[derive(Clone, Debug, Default)]
pub struct Inquiry {
    secret_values: SecretChain,
    secret_fields: SecretFields,
}

impl Inquiry {
    /// Creates an inquiry with no secrets; it redacts nothing.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an inquiry from a deserialized configuration.
    ///
    /// Every pattern is compiled up front; the first invalid one is reported.
    pub fn from_config(config: &InquiryConfig) -> Result<Self> {
        let mut inquiry = Self::new();
        for secret in &config.secret_values {
            inquiry.add_secret_value(secret.build()?);
        }
        for pattern in &config.secret_fields {
            inquiry.add_secret_field(pattern)?;
        }
        for name in &config.exact_fields {
            inquiry.add_secret_field_exact(name.as_str());
        }
        Ok(inquiry)
    }

    /// Appends a secret to the value chain.
    pub fn add_secret_value(&mut self, secret: Secret) {
        self.secret_values.push(secret);
    }

    /// Registers a key pattern; matching JSON entries are removed.
    pub fn add_secret_field(&mut self, pattern: &str) -> Result<()> {
        self.secret_fields.add(pattern)
    }

    /// Registers a key name; JSON entries with exactly this key are removed.
    pub fn add_secret_field_exact<S: Into<String>>(&mut self, name: S) {
        self.secret_fields.add_exact(name);
    }

    #[must_use]
    pub fn with_secret_value(mut self, secret: Secret) -> Self {
        self.add_secret_value(secret);
        self
    }

    pub fn with_secret_field(mut self, pattern: &str) -> Result<Self> {
        self.add_secret_field(pattern)?;
        Ok(self)
    }

    pub fn secret_values(&self) -> &SecretChain {
        &self.secret_values
    }

    pub fn secret_fields(&self) -> &SecretFields {
        &self.secret_fields
    }

    /// Redacts a payload.
    ///
    /// JSON payloads are decoded, walked and re-encoded in compact form.
    /// Anything that does not decode is treated as text and only the value
    /// chain applies; that path never fails.
    pub fn redact(&self, data: &[u8]) -> Result<Vec<u8>> {
        let Some(document) = parse_document(data) else {
            return Ok(self.redact_value(data));
        };
        let redacted = self.walker().walk_owned(document);
        Ok(serde_json::to_vec(&redacted)?)
    }

    /// Applies the value chain to `data` as plain text.
    #[must_use]
    pub fn redact_value(&self, data: &[u8]) -> Vec<u8> {
        self.secret_values.apply(data).into_owned()
    }

    /// Returns a redacted copy of an already decoded document.
    #[must_use]
    pub fn redact_json(&self, value: &Value) -> Value {
        self.walker().walk(value)
    }

    /// Redacts any serializable value through its JSON representation.
    ///
    /// Struct fields become object keys, so secret fields drop them.
    pub fn redact_serialize<T>(&self, value: &T) -> Result<Value>
    where
        T: Serialize + ?Sized,
    {
        let document = serde_json::to_value(value)?;
        Ok(self.walker().walk_owned(document))
    }

    fn walker(&self) -> Walker<'_> {
        Walker::new(&self.secret_values, &self.secret_fields)
    }
}

/// Decodes `data` as a JSON document, or `None` if it is not one.
///
/// Nesting depth is bounded only by the input. Invalid UTF-8 is replaced with
/// U+FFFD and decoding retried, so a stray byte inside a string value does
/// not keep the document from being walked.
pub(crate) fn parse_document(data: &[u8]) -> Option<Value> {
    match decode_unbounded(data) {
        Ok(document) => Some(document),
        Err(_) if std::str::from_utf8(data).is_err() => {
            decode_unbounded(String::from_utf8_lossy(data).as_bytes()).ok()
        }
        Err(_) => None,
    }
}

fn decode_unbounded(data: &[u8]) -> serde_json::Result<Value> {
    let mut deserializer = Deserializer::from_slice(data);
    deserializer.disable_recursion_limit();
    let document = Value::deserialize(&mut deserializer)?;
    deserializer.end()?;
    Ok(document)
}
