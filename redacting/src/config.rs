//! Declarative description of an [`Inquiry`](crate::Inquiry).
//!
//! Loading the description (from a file, environment, or elsewhere) is the
//! caller's job; any serde format works.

use serde::{Deserialize, Serialize};

use crate::{Protection, Result, Secret};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SecretConfig {
    pub pattern: String,
    pub protection: Protection,
    /// Replacement text; defaults to the empty string (deletion).
    #[serde(default)]
    pub replacement: String,
}

impl SecretConfig {
    pub fn build(&self) -> Result<Secret> {
        Secret::new(&self.pattern, self.protection, self.replacement.as_bytes())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct InquiryConfig {
    /// Applied in order to every string value and to non-JSON payloads.
    #[serde(default)]
    pub secret_values: Vec<SecretConfig>,
    /// Regular expressions tested against JSON object keys.
    #[serde(default)]
    pub secret_fields: Vec<String>,
    /// JSON object keys removed on exact match.
    #[serde(default)]
    pub exact_fields: Vec<String>,
}
