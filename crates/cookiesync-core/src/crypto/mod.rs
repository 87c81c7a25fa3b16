//! Decryption of synced cookie payloads.
//!
//! Two wire formats exist. The `legacy` format is what CryptoJS produces by
//! default: a `Salted__` header, an 8-byte salt, and AES-256-CBC under a
//! key/IV stretched from the passphrase with MD5 (OpenSSL's EVP_BytesToKey).
//! The `aes-128-cbc-fixed` format skips the salt dance entirely: the derived
//! base key is the AES-128 key and the IV is a constant zero block.
//!
//! Which format a blob uses is decided before any cryptographic work: an
//! explicit caller choice wins, then the server's `crypto_type` hint, then
//! the legacy default.

mod decrypt;
mod key;

#[cfg(any(test, feature = "test-support"))]
pub mod testing;

pub use decrypt::{decrypt_blob, decrypt_document};
pub use key::{derive_fixed, derive_legacy, FixedKeyMaterial, LegacyKeyMaterial};

use crate::error::SyncError;

/// Cipher construction used for a synced payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CryptoVariant {
    /// CryptoJS default: `Salted__` header, MD5 key stretching, AES-256-CBC.
    Legacy,
    /// AES-128-CBC with the base key used directly and an all-zero IV.
    FixedIv,
}

impl CryptoVariant {
    /// Wire name as carried in `crypto_type` fields.
    pub fn wire_name(self) -> &'static str {
        match self {
            CryptoVariant::Legacy => "legacy",
            CryptoVariant::FixedIv => "aes-128-cbc-fixed",
        }
    }

    /// Selection policy: an explicit choice always wins, then the server
    /// hint, then the legacy default.
    pub fn resolve(explicit: Option<CryptoVariant>, hint: Option<CryptoVariant>) -> CryptoVariant {
        explicit.or(hint).unwrap_or(CryptoVariant::Legacy)
    }
}

impl std::str::FromStr for CryptoVariant {
    type Err = SyncError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "legacy" => Ok(CryptoVariant::Legacy),
            "aes-128-cbc-fixed" => Ok(CryptoVariant::FixedIv),
            other => Err(SyncError::Encoding(format!(
                "unknown crypto variant \"{}\" (use legacy or aes-128-cbc-fixed)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for CryptoVariant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.wire_name())
    }
}
