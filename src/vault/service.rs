//! High-level vault operations used by CLI commands.
//!
//! A `VaultService` holds the two paths it works with (key file and
//! store file) and nothing else. The key is loaded per operation and
//! zeroized as soon as the operation ends; the decrypted store lives
//! only for one load → mutate → save cycle.

use std::fs;
use std::path::{Path, PathBuf};

use crate::crypto::{decrypt, encrypt, keyfile, VaultKey};
use crate::errors::{PassVaultError, Result};
use crate::store::RecordStore;

/// Orchestrates the key file, the codec, and the record store.
///
/// Callers construct one explicitly and pass it through — there is no
/// ambient global instance.
pub struct VaultService {
    key_path: PathBuf,
    store_path: PathBuf,
}

impl VaultService {
    /// Create a service for the given key and store file paths.
    ///
    /// Touches neither file; the key file is created lazily on the
    /// first operation that needs it.
    pub fn new(key_path: impl Into<PathBuf>, store_path: impl Into<PathBuf>) -> Self {
        Self {
            key_path: key_path.into(),
            store_path: store_path.into(),
        }
    }

    /// Path to the encrypted store file.
    pub fn store_path(&self) -> &Path {
        &self.store_path
    }

    /// Path to the key file.
    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    /// Load and decrypt the record store.
    ///
    /// A missing store file is a first run and yields an empty store,
    /// not an error. Everything else is reported with a distinct kind:
    /// `StoreIo` for an unreadable file, `Authentication` for a failed
    /// integrity check, `Format` for undecodable plaintext — so a
    /// caller can always tell "genuinely empty" from "failed to read".
    pub fn load(&self) -> Result<RecordStore> {
        if !self.store_path.exists() {
            return Ok(RecordStore::new());
        }

        let blob = fs::read(&self.store_path)
            .map_err(|e| PassVaultError::StoreIo(format!("failed to read store file: {e}")))?;

        let key = self.key()?;
        let plaintext = decrypt(key.as_bytes(), &blob)?;

        RecordStore::deserialize(&plaintext)
    }

    /// Serialize, encrypt, and atomically replace the store file.
    ///
    /// The blob is written to a dot-prefixed temp file in the same
    /// directory and renamed over the target, so a crash mid-write
    /// leaves the prior valid file intact.
    pub fn save(&self, store: &RecordStore) -> Result<()> {
        let plaintext = store.serialize()?;

        let key = self.key()?;
        let blob = encrypt(key.as_bytes(), &plaintext)?;

        write_atomic(&self.store_path, &blob)
    }

    /// Write an unencrypted backup of `store` to `path`.
    ///
    /// This never touches the encrypted store file. The caller is
    /// responsible for warning the user about the plaintext on disk.
    pub fn export_backup(&self, store: &RecordStore, path: &Path) -> Result<()> {
        let plaintext = store.serialize()?;

        fs::write(path, plaintext)
            .map_err(|e| PassVaultError::StoreIo(format!("failed to write backup file: {e}")))
    }

    fn key(&self) -> Result<VaultKey> {
        keyfile::load_or_create_key(&self.key_path)
    }
}

/// Write `bytes` to `path` via temp file + rename.
///
/// The temp file lives in the same directory so the rename stays on
/// one filesystem and is atomic.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, bytes)
        .map_err(|e| PassVaultError::StoreIo(format!("failed to write store file: {e}")))?;
    fs::rename(&tmp_path, path).map_err(|e| {
        // Best effort: don't leave the temp file behind.
        let _ = fs::remove_file(&tmp_path);
        PassVaultError::StoreIo(format!("failed to replace store file: {e}"))
    })?;

    Ok(())
}
