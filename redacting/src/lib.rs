//! Pattern- and field-based redaction for text and JSON payloads.
//!
//! This crate separates:
//! - **Value secrets**: a pattern plus a [`Protection`] strategy, applied to
//!   text wherever the pattern matches.
//! - **Secret fields**: key patterns; matching entries are removed from JSON
//!   objects entirely, whatever their value.
//!
//! [`Inquiry::redact`] takes raw bytes. If they decode as JSON, the document is
//! walked: every string goes through the value secrets, every object key is
//! checked against the secret fields, and the redacted copy is re-encoded.
//! Otherwise the bytes are treated as text and only the value secrets apply.
//!
//! Protections:
//! - [`Protection::BlackOut`] repeats the replacement once per matched character.
//! - [`Protection::Censor`] replaces each match with the replacement once.
//! - [`Protection::Omit`] replaces the whole value when anything matches.
//!
//! What this crate does not do:
//! - perform I/O, load configuration files, or log on its own
//! - validate that your rules catch every secret
//! - understand formats other than JSON
//!
//! An `slog` adapter that logs only redacted payloads is available behind the
//! `slog` feature.

// <https://doc.rust-lang.org/rustc/lints/listing/allowed-by-default.html>
#![warn(
    anonymous_parameters,
    bare_trait_objects,
    elided_lifetimes_in_paths,
    missing_copy_implementations,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts,
    unreachable_pub,
    unsafe_code,
    unused_extern_crates,
    unused_import_braces
)]
// <https://rust-lang.github.io/rust-clippy/stable>
#![warn(
    clippy::all,
    clippy::cargo,
    clippy::dbg_macro,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::mem_forget,
    clippy::nursery,
    clippy::pedantic,
    clippy::todo,
    clippy::unwrap_used,
    clippy::uninlined_format_args
)]
// Allow some clippy lints
#![allow(
    clippy::doc_markdown,
    clippy::module_name_repetitions,
    clippy::multiple_crate_versions,
    clippy::must_use_candidate,
    clippy::use_self,
    clippy::cargo_common_metadata,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::redundant_pub_crate
)]
// Allow some lints while testing
#![cfg_attr(test, allow(clippy::non_ascii_literal, clippy::unwrap_used))]

// Module declarations
mod config;
mod error;
mod inquiry;
mod protection;
mod redaction;
#[cfg(feature = "slog")]
pub mod slog;

// Re-exports
pub use config::{InquiryConfig, SecretConfig};
pub use error::{Error, Result};
pub use inquiry::Inquiry;
pub use protection::Protection;
pub use redaction::{Secret, SecretChain, SecretFields, Walker};
