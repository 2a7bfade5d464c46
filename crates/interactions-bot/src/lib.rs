//! Discord interactions webhook.
//!
//! Receives signed interaction events over HTTP, verifies them against the
//! application's Ed25519 key and answers slash commands:
//! - `invite`, `hello`, `help`: static replies
//! - `joke`: relays a joke from an external provider
//! - `activity` / `youtube`: creates an embedded application invite

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod registrar;
pub mod signature;

pub use catalog::CatalogVariant;
pub use config::Config;
pub use error::{BotError, BotResult};
pub use signature::SignatureVerifier;
