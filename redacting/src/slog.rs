//! Adapters for emitting redacted payloads through `slog`.
//!
//! This module connects [`Inquiry`] with `slog` by providing a `slog::Value`
//! whose logged representation is computed from the redacted payload only.
//!
//! It is responsible for:
//! - Emitting JSON payloads as nested structured values via `slog`'s
//!   nested-value support, and text payloads as plain strings.
//! - Avoiding fallible logging APIs: serialization failures are represented as
//!   placeholder strings rather than propagated as errors.
//!
//! It does not configure `slog` or decide what is secret.

use serde::Serialize;
use serde_json::Value as JsonValue;
use slog::{Key, Record, Result as SlogResult, Serializer, Value as SlogValue};

use crate::{inquiry::parse_document, Inquiry};

/// Logged in place of a value whose redacted form could not be produced.
pub const SERIALIZE_FAILED_PLACEHOLDER: &str = "Failed to serialize redacted value";

enum Payload {
    Json(JsonValue),
    Text(String),
}

/// A `slog::Value` holding an already redacted payload.
///
/// The original payload is never stored.
pub struct RedactedPayload {
    payload: Payload,
}

impl RedactedPayload {
    fn json(value: JsonValue) -> Self {
        Self {
            payload: Payload::Json(value),
        }
    }

    fn text(text: String) -> Self {
        Self {
            payload: Payload::Text(text),
        }
    }
}

impl SlogValue for RedactedPayload {
    fn serialize(
        &self,
        record: &Record<'_>,
        key: Key,
        serializer: &mut dyn Serializer,
    ) -> SlogResult {
        match &self.payload {
            Payload::Json(value) => {
                let nested = slog::Serde(value.clone());
                SlogValue::serialize(&nested, record, key, serializer)
            }
            Payload::Text(text) => serializer.emit_str(key, text),
        }
    }
}

impl Inquiry {
    /// Redacts `data` and wraps the result for logging.
    ///
    /// JSON payloads are logged as nested values; anything else is logged as
    /// a string, with invalid UTF-8 replaced.
    ///
    /// ## Example
    /// ```ignore
    /// info!(logger, "request"; "body" => inquiry.log_value(&body));
    /// ```
    pub fn log_value(&self, data: &[u8]) -> RedactedPayload {
        match parse_document(data) {
            Some(document) => RedactedPayload::json(self.redact_json(&document)),
            None => {
                let redacted = self.redact_value(data);
                RedactedPayload::text(String::from_utf8_lossy(&redacted).into_owned())
            }
        }
    }

    /// Redacts a serializable value and wraps the result for logging.
    ///
    /// If the value cannot be represented as JSON, the payload logs
    /// [`SERIALIZE_FAILED_PLACEHOLDER`] instead.
    pub fn log_serialize<T>(&self, value: &T) -> RedactedPayload
    where
        T: Serialize + ?Sized,
    {
        match self.redact_serialize(value) {
            Ok(redacted) => RedactedPayload::json(redacted),
            Err(_) => RedactedPayload::text(SERIALIZE_FAILED_PLACEHOLDER.to_string()),
        }
    }
}
