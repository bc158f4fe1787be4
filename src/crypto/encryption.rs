//! AES-256-GCM authenticated encryption.
//!
//! Every `encrypt` call draws a fresh random 12-byte nonce and prepends
//! it to the ciphertext, so a stored blob is self-contained: `decrypt`
//! splits the nonce back out before verifying and decrypting.
//!
//! Layout of the returned byte buffer:
//!   [ 12-byte nonce | ciphertext + 16-byte auth tag ]
//!
//! A failed tag check — tampered bytes, truncated file, or the wrong
//! key — always surfaces as `PassVaultError::Authentication`, never as
//! garbage plaintext.

use aes_gcm::aead::{Aead, KeyInit, OsRng};
use aes_gcm::{AeadCore, Aes256Gcm, Nonce};

use crate::errors::{PassVaultError, Result};

/// Size of the AES-256-GCM key in bytes.
pub const KEY_LEN: usize = 32;

/// Size of the AES-256-GCM nonce in bytes.
const NONCE_LEN: usize = 12;

/// Encrypt `plaintext` with a 32-byte `key`.
///
/// Returns the nonce prepended to the ciphertext (nonce || ciphertext).
pub fn encrypt(key: &[u8], plaintext: &[u8]) -> Result<Vec<u8>> {
    let cipher = Aes256Gcm::new_from_slice(key)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("invalid key length: {e}")))?;

    // Fresh random nonce per call — nonce reuse under one key breaks GCM.
    let nonce = Aes256Gcm::generate_nonce(&mut OsRng);

    let ciphertext = cipher
        .encrypt(&nonce, plaintext)
        .map_err(|e| PassVaultError::EncryptionFailed(format!("encryption error: {e}")))?;

    // Prepend the nonce so the caller only stores one opaque blob.
    let mut output = Vec::with_capacity(NONCE_LEN + ciphertext.len());
    output.extend_from_slice(&nonce);
    output.extend_from_slice(&ciphertext);
    Ok(output)
}

/// Decrypt data that was produced by `encrypt`.
///
/// Expects the first 12 bytes to be the nonce, followed by the
/// ciphertext and auth tag. Fails with `Authentication` if the tag
/// does not verify.
pub fn decrypt(key: &[u8], blob: &[u8]) -> Result<Vec<u8>> {
    // Anything shorter than a nonce cannot be a valid blob.
    if blob.len() < NONCE_LEN {
        return Err(PassVaultError::Authentication);
    }

    let (nonce_bytes, ciphertext) = blob.split_at(NONCE_LEN);
    let nonce = Nonce::from_slice(nonce_bytes);

    let cipher = Aes256Gcm::new_from_slice(key).map_err(|_| PassVaultError::Authentication)?;

    cipher
        .decrypt(nonce, ciphertext)
        .map_err(|_| PassVaultError::Authentication)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_key() -> [u8; KEY_LEN] {
        [0x42; KEY_LEN]
    }

    #[test]
    fn encrypt_decrypt_roundtrip() {
        let key = test_key();
        let plaintext = b"the quick brown fox";

        let blob = encrypt(&key, plaintext).unwrap();
        let decrypted = decrypt(&key, &blob).unwrap();
        assert_eq!(decrypted, plaintext);
    }

    #[test]
    fn nonce_is_fresh_per_call() {
        let key = test_key();
        let blob1 = encrypt(&key, b"same input").unwrap();
        let blob2 = encrypt(&key, b"same input").unwrap();
        // Same plaintext, same key — the blobs must still differ.
        assert_ne!(blob1, blob2);
    }

    #[test]
    fn wrong_key_fails_authentication() {
        let blob = encrypt(&test_key(), b"secret").unwrap();
        let other_key = [0x24u8; KEY_LEN];

        let result = decrypt(&other_key, &blob);
        assert!(matches!(result, Err(PassVaultError::Authentication)));
    }

    #[test]
    fn truncated_blob_fails_authentication() {
        let result = decrypt(&test_key(), &[0u8; 5]);
        assert!(matches!(result, Err(PassVaultError::Authentication)));
    }

    #[test]
    fn bad_key_length_rejected() {
        let result = encrypt(&[0u8; 16], b"data");
        assert!(matches!(result, Err(PassVaultError::EncryptionFailed(_))));
    }
}
