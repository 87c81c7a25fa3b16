//! Error types for cookiesync core operations.
//!
//! The taxonomy distinguishes where in the pipeline an attempt died, because
//! the kinds call for different operator reactions: `Transport` is
//! retryable, everything cryptographic is terminal for the given inputs, and
//! `Padding`/`Format` almost always mean a wrong password or wrong variant
//! rather than corrupted data.

use thiserror::Error;

/// Result type alias for cookiesync operations.
pub type Result<T> = std::result::Result<T, SyncError>;

/// Core error type for cookiesync operations.
#[derive(Debug, Error)]
pub enum SyncError {
    /// Network or HTTP failure reaching the sync server
    #[error("Transport error: {0}")]
    Transport(String),

    /// Ciphertext is not valid base64, or a legacy blob lacks its salt header
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Cipher input rejected before decryption
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// PKCS#7 padding check failed after decryption
    #[error("Padding error: decrypted data has invalid padding")]
    Padding,

    /// Decrypted bytes are not the expected JSON document
    #[error("Format error: {0}")]
    Format(String),

    /// I/O error (env-file export)
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        SyncError::Transport(err.to_string())
    }
}

impl From<base64::DecodeError> for SyncError {
    fn from(err: base64::DecodeError) -> Self {
        SyncError::Encoding(err.to_string())
    }
}

impl From<serde_json::Error> for SyncError {
    fn from(err: serde_json::Error) -> Self {
        SyncError::Format(err.to_string())
    }
}
