//! Retrieval of encrypted envelopes from the sync server.
//!
//! This is a thin collaborator around `GET {server}/get/{uuid}`; everything
//! it returns is still opaque ciphertext. Transport failures are kept
//! distinct from the crypto error taxonomy - they say nothing about whether
//! the password is right, and unlike crypto errors they may be retried.

use std::time::Duration;

use serde::Deserialize;

use crate::crypto::CryptoVariant;
use crate::error::{Result, SyncError};

/// Bound on the whole fetch, connection included.
const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Encrypted payload as returned by the sync server.
#[derive(Debug, Clone, Deserialize)]
pub struct EncryptedEnvelope {
    /// Base64 ciphertext blob.
    pub encrypted: String,

    /// Cipher the server believes the blob was written with.
    #[serde(default)]
    pub crypto_type: Option<String>,
}

impl EncryptedEnvelope {
    /// Server-side variant hint, if the envelope carries a recognized one.
    ///
    /// Unknown names are ignored so a newer server cannot steer the client
    /// onto a cipher it does not implement.
    pub fn variant_hint(&self) -> Option<CryptoVariant> {
        let raw = self.crypto_type.as_deref()?;
        match raw.parse() {
            Ok(variant) => Some(variant),
            Err(_) => {
                tracing::warn!(crypto_type = raw, "ignoring unknown crypto_type hint");
                None
            }
        }
    }
}

/// Fetch the encrypted envelope for `uuid` from the sync server.
///
/// `requested` is echoed as a `crypto_type` query parameter so servers that
/// store both formats can answer with the matching blob.
pub fn fetch_envelope(
    server_url: &str,
    uuid: &str,
    requested: Option<CryptoVariant>,
) -> Result<EncryptedEnvelope> {
    let url = format!("{}/get/{}", server_url.trim_end_matches('/'), uuid);
    tracing::debug!(%url, "fetching encrypted envelope");

    let client = reqwest::blocking::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()?;

    let mut request = client.get(&url);
    if let Some(variant) = requested {
        request = request.query(&[("crypto_type", variant.wire_name())]);
    }

    let response = request.send()?;
    let status = response.status();
    if !status.is_success() {
        return Err(SyncError::Transport(format!(
            "server returned {} for {}",
            status, url
        )));
    }

    let envelope: EncryptedEnvelope = response.json()?;
    tracing::debug!(
        crypto_type = envelope.crypto_type.as_deref().unwrap_or("none"),
        "received envelope"
    );
    Ok(envelope)
}
