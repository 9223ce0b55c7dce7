//! Redaction rules and the structural walker.
//!
//! - **`secret`**: one pattern and how to protect its matches (`Secret`)
//! - **`chain`**: secrets applied in order to one value (`SecretChain`)
//! - **`fields`**: keys whose entries are dropped (`SecretFields`)
//! - **`walk`**: rebuilds decoded JSON with both applied (`Walker`)
//!
//! The protection strategies live in `crate::protection`.

mod chain;
mod fields;
mod secret;
mod walk;

pub use chain::SecretChain;
pub use fields::SecretFields;
pub use secret::Secret;
pub use walk::Walker;
