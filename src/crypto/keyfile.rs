//! Key file management.
//!
//! The vault key is 32 raw bytes in a file — no header, no metadata.
//! `load_or_create_key` reads it if present, otherwise generates a new
//! key from the OS CSPRNG and persists it with owner-only permissions.
//!
//! The key lives in a [`VaultKey`] wrapper that zeroes its memory on
//! drop, so key material does not linger after a vault operation ends.

use std::fs;
use std::path::Path;

use rand::rngs::OsRng;
use rand::TryRngCore;
use zeroize::{Zeroize, ZeroizeOnDrop};

use super::encryption::KEY_LEN;
use crate::errors::{PassVaultError, Result};

/// A 32-byte vault key, zeroized when dropped.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct VaultKey {
    bytes: [u8; KEY_LEN],
}

impl VaultKey {
    /// Wrap raw key bytes.
    pub fn new(bytes: [u8; KEY_LEN]) -> Self {
        Self { bytes }
    }

    /// Access the raw key bytes (e.g. to pass to the codec).
    pub fn as_bytes(&self) -> &[u8; KEY_LEN] {
        &self.bytes
    }
}

/// Load the key file at `path`, or generate and persist a new one.
///
/// An existing file must be exactly 32 bytes — the AES-256-GCM key
/// size. A missing file triggers key generation: parent directories
/// are created as needed and the new key is written with owner-only
/// permissions on Unix.
///
/// Filesystem failures are fatal `KeyIo` errors; no vault operation
/// can proceed without a key.
pub fn load_or_create_key(path: &Path) -> Result<VaultKey> {
    if path.exists() {
        return read_key(path);
    }

    // First run: generate a fresh key from the OS CSPRNG.
    let mut bytes = [0u8; KEY_LEN];
    OsRng
        .try_fill_bytes(&mut bytes)
        .map_err(|e| PassVaultError::KeyIo(format!("secure random source unavailable: {e}")))?;

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).map_err(|e| {
                PassVaultError::KeyIo(format!("cannot create key directory: {e}"))
            })?;
        }
    }

    fs::write(path, bytes)
        .map_err(|e| PassVaultError::KeyIo(format!("failed to write key file: {e}")))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        let perms = fs::Permissions::from_mode(0o600);
        fs::set_permissions(path, perms).map_err(|e| {
            PassVaultError::KeyIo(format!("failed to set key file permissions: {e}"))
        })?;
    }

    Ok(VaultKey::new(bytes))
}

fn read_key(path: &Path) -> Result<VaultKey> {
    let mut data = fs::read(path)
        .map_err(|e| PassVaultError::KeyIo(format!("failed to read key file: {e}")))?;

    if data.len() != KEY_LEN {
        data.zeroize();
        return Err(PassVaultError::KeyIo(format!(
            "key file must be exactly {} bytes, got {}",
            KEY_LEN,
            data.len()
        )));
    }

    let mut bytes = [0u8; KEY_LEN];
    bytes.copy_from_slice(&data);
    data.zeroize();
    Ok(VaultKey::new(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn creates_key_on_first_call() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("key.key");
        assert!(!path.exists());

        let key = load_or_create_key(&path).unwrap();
        assert!(path.exists());
        assert_eq!(key.as_bytes().len(), KEY_LEN);
    }

    #[test]
    fn second_call_returns_identical_bytes() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("key.key");

        let first = load_or_create_key(&path).unwrap();
        let second = load_or_create_key(&path).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dir").join("key.key");

        load_or_create_key(&path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn rejects_wrong_sized_key_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("short.key");
        fs::write(&path, [0u8; 16]).unwrap();

        let result = load_or_create_key(&path);
        assert!(matches!(result, Err(PassVaultError::KeyIo(_))));
    }

    #[cfg(unix)]
    #[test]
    fn new_key_file_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("key.key");
        load_or_create_key(&path).unwrap();

        let mode = fs::metadata(&path).unwrap().permissions().mode();
        assert_eq!(mode & 0o777, 0o600);
    }
}
