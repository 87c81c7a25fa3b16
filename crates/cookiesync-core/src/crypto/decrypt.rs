//! AES-CBC decryption of synced payloads.
//!
//! Decryption is all-or-nothing: a failure at any step returns an error and
//! never a partial document. The PKCS#7 padding check doubles as the
//! integrity proxy - a wrong password or wrong variant surfaces here as
//! [`SyncError::Padding`] (or, rarely, as [`SyncError::Format`] when the
//! padding happens to parse), never as silently corrupted data.

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, KeyIvInit};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::crypto::key::{self, BLOCK_SIZE, FIXED_IV};
use crate::crypto::CryptoVariant;
use crate::document::SyncedDocument;
use crate::error::{Result, SyncError};

type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;
type Aes128CbcDec = cbc::Decryptor<aes::Aes128>;

/// 8-byte ASCII marker preceding the salt in a legacy blob.
const SALT_MARKER: &[u8] = b"Salted__";

/// Marker plus 8-byte salt.
const SALTED_HEADER_LEN: usize = 16;

/// Decrypt a base64 ciphertext blob and parse it as a snapshot document.
///
/// The variant must already be resolved (see [`CryptoVariant::resolve`]);
/// no cryptographic work happens before that decision.
pub fn decrypt_document(
    variant: CryptoVariant,
    ciphertext_b64: &str,
    uuid: &str,
    password: &str,
) -> Result<SyncedDocument> {
    let plaintext = decrypt_blob(variant, ciphertext_b64, uuid, password)?;
    parse_document(&plaintext)
}

/// Decrypt a base64 ciphertext blob to raw plaintext bytes.
pub fn decrypt_blob(
    variant: CryptoVariant,
    ciphertext_b64: &str,
    uuid: &str,
    password: &str,
) -> Result<Vec<u8>> {
    let blob = STANDARD.decode(ciphertext_b64.trim())?;
    tracing::debug!(%variant, blob_len = blob.len(), "decrypting synced payload");

    match variant {
        CryptoVariant::Legacy => {
            let (salt, body) = split_salted(&blob)?;
            check_body(body)?;
            let material = key::derive_legacy(uuid, password, &salt);
            Aes256CbcDec::new(material.key().into(), material.iv().into())
                .decrypt_padded_vec_mut::<Pkcs7>(body)
                .map_err(|_| SyncError::Padding)
        }
        CryptoVariant::FixedIv => {
            check_body(&blob)?;
            let material = key::derive_fixed(uuid, password);
            Aes128CbcDec::new(material.key().into(), &FIXED_IV.into())
                .decrypt_padded_vec_mut::<Pkcs7>(&blob)
                .map_err(|_| SyncError::Padding)
        }
    }
}

/// Split a legacy blob into its 8-byte salt and cipher body.
///
/// The upstream encryptor always salts; a legacy blob without the
/// `Salted__` marker is an error, not a zero-salt fallback.
fn split_salted(blob: &[u8]) -> Result<([u8; 8], &[u8])> {
    if blob.len() < SALTED_HEADER_LEN || !blob.starts_with(SALT_MARKER) {
        return Err(SyncError::Encoding(
            "legacy ciphertext does not carry a Salted__ header".to_string(),
        ));
    }

    let mut salt = [0u8; 8];
    salt.copy_from_slice(&blob[SALT_MARKER.len()..SALTED_HEADER_LEN]);
    Ok((salt, &blob[SALTED_HEADER_LEN..]))
}

/// Reject cipher bodies AES-CBC cannot have produced.
fn check_body(body: &[u8]) -> Result<()> {
    if body.is_empty() {
        return Err(SyncError::Crypto("cipher body is empty".to_string()));
    }
    if body.len() % BLOCK_SIZE != 0 {
        return Err(SyncError::Crypto(format!(
            "cipher body length {} is not a multiple of the {}-byte block size",
            body.len(),
            BLOCK_SIZE
        )));
    }
    Ok(())
}

/// Parse decrypted bytes as a snapshot document.
fn parse_document(plaintext: &[u8]) -> Result<SyncedDocument> {
    let text = std::str::from_utf8(plaintext)
        .map_err(|_| SyncError::Format("decrypted data is not valid UTF-8".to_string()))?;

    let value: serde_json::Value = serde_json::from_str(text)?;
    if value.get("cookie_data").is_none() {
        return Err(SyncError::Format(
            "decrypted document has no cookie_data field".to_string(),
        ));
    }

    let document: SyncedDocument = serde_json::from_value(value)?;
    Ok(document)
}
