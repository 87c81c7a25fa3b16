//! # Cookiesync Core
//!
//! Core library for cookiesync - fetches encrypted browser-cookie snapshots
//! from a sync server and decrypts them with a password-derived key.
//!
//! The interesting part is the cipher layer: two mutually incompatible wire
//! formats exist in the field, and both must be reversed byte-for-byte the
//! way the JavaScript uploader wrote them. Everything else (retrieval,
//! document model, env-file export) is plumbing around it.
//!
//! ## Architecture
//!
//! - **crypto**: key derivation and AES-CBC decryption for both variants
//! - **document**: serde model for the decrypted snapshot
//! - **fetch**: envelope retrieval from the sync server
//! - **export**: env-file rendering for downstream consumers

pub mod crypto;
pub mod document;
pub mod error;
pub mod export;
pub mod fetch;

pub use crypto::{decrypt_document, CryptoVariant};
pub use document::{CookieRecord, SyncedDocument};
pub use error::{Result, SyncError};
pub use fetch::EncryptedEnvelope;

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
