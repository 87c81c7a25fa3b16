//! Key derivation for the two wire variants.
//!
//! Both variants start from the same base secret: the first 16 characters of
//! the lowercase hex digest of `MD5(uuid + "-" + password)`, used literally
//! as ASCII bytes. The hex prefix is deliberately NOT decoded - the upstream
//! encryptor feeds the characters themselves to the cipher, and
//! interoperability depends on matching that byte-for-byte.

use md5::{Digest, Md5};
use zeroize::ZeroizeOnDrop;

/// AES block size shared by both variants.
pub(crate) const BLOCK_SIZE: usize = 16;

/// Constant all-zero IV used by the `aes-128-cbc-fixed` variant.
pub(crate) const FIXED_IV: [u8; BLOCK_SIZE] = [0u8; BLOCK_SIZE];

/// Length of the base secret taken from the hex digest.
const BASE_KEY_LEN: usize = 16;

/// EVP_BytesToKey output: 32-byte AES-256 key plus 16-byte IV.
const LEGACY_KEY_IV_LEN: usize = 48;

/// Key material for a legacy (`Salted__`) blob.
///
/// Derived fresh per decryption call and zeroized on drop. Avoid storing or
/// logging the raw bytes.
#[derive(Clone, ZeroizeOnDrop)]
pub struct LegacyKeyMaterial {
    key: [u8; 32],
    iv: [u8; BLOCK_SIZE],
}

impl LegacyKeyMaterial {
    /// The AES-256 key.
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    /// The CBC initialization vector.
    pub fn iv(&self) -> &[u8; BLOCK_SIZE] {
        &self.iv
    }
}

impl std::fmt::Debug for LegacyKeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LegacyKeyMaterial")
            .field("key", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .finish()
    }
}

/// Key material for a fixed-IV blob. The IV is [`FIXED_IV`], not a field.
#[derive(Clone, ZeroizeOnDrop)]
pub struct FixedKeyMaterial {
    key: [u8; BASE_KEY_LEN],
}

impl FixedKeyMaterial {
    /// The AES-128 key.
    pub fn key(&self) -> &[u8; BASE_KEY_LEN] {
        &self.key
    }
}

impl std::fmt::Debug for FixedKeyMaterial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FixedKeyMaterial")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

/// Base secret shared by both variants.
///
/// `MD5(uuid + "-" + password)`, rendered as lowercase hex, truncated to 16
/// characters, taken as raw ASCII bytes.
pub(crate) fn base_key(uuid: &str, password: &str) -> [u8; BASE_KEY_LEN] {
    let digest = Md5::digest(format!("{}-{}", uuid, password).as_bytes());
    let hex_digest = hex::encode(digest);

    let mut key = [0u8; BASE_KEY_LEN];
    key.copy_from_slice(&hex_digest.as_bytes()[..BASE_KEY_LEN]);
    key
}

/// Derive AES-256 key material for a legacy blob.
///
/// Runs the OpenSSL EVP_BytesToKey construction with MD5:
/// `block_i = MD5(block_(i-1) || base_key || salt)` starting from an empty
/// block, concatenated until 48 bytes are available. The first 32 bytes are
/// the key, the next 16 the IV. Deterministic for a given
/// (uuid, password, salt) - no randomness, no external state.
pub fn derive_legacy(uuid: &str, password: &str, salt: &[u8; 8]) -> LegacyKeyMaterial {
    let base = base_key(uuid, password);

    let mut key_iv = Vec::with_capacity(LEGACY_KEY_IV_LEN + BLOCK_SIZE);
    let mut block: Vec<u8> = Vec::new();
    while key_iv.len() < LEGACY_KEY_IV_LEN {
        let mut hasher = Md5::new();
        hasher.update(&block);
        hasher.update(base);
        hasher.update(salt);
        block = hasher.finalize().to_vec();
        key_iv.extend_from_slice(&block);
    }

    let mut key = [0u8; 32];
    let mut iv = [0u8; BLOCK_SIZE];
    key.copy_from_slice(&key_iv[..32]);
    iv.copy_from_slice(&key_iv[32..LEGACY_KEY_IV_LEN]);
    LegacyKeyMaterial { key, iv }
}

/// Derive AES-128 key material for a fixed-IV blob.
///
/// The base secret is the key; no further stretching is applied.
pub fn derive_fixed(uuid: &str, password: &str) -> FixedKeyMaterial {
    FixedKeyMaterial {
        key: base_key(uuid, password),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const UUID: &str = "default-uuid";
    const PASSWORD: &str = "default-password";

    #[test]
    fn test_base_key_is_hex_prefix_as_ascii() {
        // MD5("default-uuid-default-password") = 8aa7b0ddb55e492dbec7f21ecb96775e;
        // the first 16 hex characters are used as literal bytes.
        assert_eq!(&base_key(UUID, PASSWORD), b"8aa7b0ddb55e492d");
    }

    #[test]
    fn test_fixed_key_known_answer() {
        // MD5("jNp1T2qZ6shwVW9VmjLvp1-iZ4PCqzfJcHyiwAQcCuupD") starts 01f3eedbf2985e3b
        let material = derive_fixed("jNp1T2qZ6shwVW9VmjLvp1", "iZ4PCqzfJcHyiwAQcCuupD");
        assert_eq!(material.key(), b"01f3eedbf2985e3b");
    }

    #[test]
    fn test_legacy_derivation_known_answer() {
        // Precomputed with an independent EVP_BytesToKey implementation.
        let material = derive_legacy(UUID, PASSWORD, b"ABCDEFGH");
        assert_eq!(
            hex::encode(material.key()),
            "7f5d608a650fb1cb02efd48647a9b669ae7f00475dcaab491c175e6dd17fbbb8"
        );
        assert_eq!(hex::encode(material.iv()), "bfa56edbd5f24601d3ac57fefef9428d");
    }

    #[test]
    fn test_legacy_derivation_deterministic() {
        let first = derive_legacy(UUID, PASSWORD, b"01234567");
        let second = derive_legacy(UUID, PASSWORD, b"01234567");
        assert_eq!(first.key(), second.key());
        assert_eq!(first.iv(), second.iv());
    }

    #[test]
    fn test_fixed_derivation_deterministic() {
        let first = derive_fixed(UUID, PASSWORD);
        let second = derive_fixed(UUID, PASSWORD);
        assert_eq!(first.key(), second.key());
    }

    #[test]
    fn test_password_change_changes_keys() {
        let original = derive_fixed(UUID, "default-password");
        let changed = derive_fixed(UUID, "default-passworD");
        assert_ne!(original.key(), changed.key());

        let original = derive_legacy(UUID, "default-password", b"ABCDEFGH");
        let changed = derive_legacy(UUID, "default-passworD", b"ABCDEFGH");
        assert_ne!(original.key(), changed.key());
    }

    #[test]
    fn test_salt_change_changes_legacy_keys() {
        let first = derive_legacy(UUID, PASSWORD, b"ABCDEFGH");
        let second = derive_legacy(UUID, PASSWORD, b"HGFEDCBA");
        assert_ne!(first.key(), second.key());
        assert_ne!(first.iv(), second.iv());
    }

    #[test]
    fn test_debug_redacts_key_material() {
        let legacy = derive_legacy(UUID, PASSWORD, b"ABCDEFGH");
        let fixed = derive_fixed(UUID, PASSWORD);

        let legacy_debug = format!("{:?}", legacy);
        let fixed_debug = format!("{:?}", fixed);
        assert!(legacy_debug.contains("REDACTED"));
        assert!(fixed_debug.contains("REDACTED"));
        assert!(!legacy_debug.contains(&hex::encode(&legacy.key()[..4])));
        assert!(!fixed_debug.contains("8aa7b0dd"));
    }
}
