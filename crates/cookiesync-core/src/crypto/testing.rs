//! Companion encryptor for building wire-compatible fixtures in tests.
//!
//! The shipped tool never encrypts. These helpers exist so the test suites
//! can exercise the round-trip law without depending on the JavaScript
//! uploader; they mirror its output byte-for-byte, including the
//! `Salted__` header layout.

use aes::cipher::{block_padding::Pkcs7, BlockEncryptMut, KeyIvInit};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

use crate::crypto::key::{self, FIXED_IV};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes128CbcEnc = cbc::Encryptor<aes::Aes128>;

/// Encrypt `plaintext` in the legacy CryptoJS format with a caller-chosen salt.
pub fn encrypt_legacy(plaintext: &[u8], uuid: &str, password: &str, salt: &[u8; 8]) -> String {
    let material = key::derive_legacy(uuid, password, salt);
    let body = Aes256CbcEnc::new(material.key().into(), material.iv().into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);

    let mut blob = Vec::with_capacity(16 + body.len());
    blob.extend_from_slice(b"Salted__");
    blob.extend_from_slice(salt);
    blob.extend_from_slice(&body);
    STANDARD.encode(blob)
}

/// Encrypt `plaintext` in the fixed-IV AES-128-CBC format.
pub fn encrypt_fixed(plaintext: &[u8], uuid: &str, password: &str) -> String {
    let material = key::derive_fixed(uuid, password);
    let body = Aes128CbcEnc::new(material.key().into(), &FIXED_IV.into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext);
    STANDARD.encode(body)
}
