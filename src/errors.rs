use thiserror::Error;

/// All errors that can occur in PassVault.
#[derive(Debug, Error)]
pub enum PassVaultError {
    // --- Key errors ---
    #[error("Key file error: {0}")]
    KeyIo(String),

    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong key or tampered data")]
    Authentication,

    // --- Store errors ---
    #[error("Invalid store format: {0}")]
    Format(String),

    #[error("Store file error: {0}")]
    StoreIo(String),

    #[error("No record found for '{0}'")]
    RecordNotFound(String),

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience type alias for PassVault results.
pub type Result<T> = std::result::Result<T, PassVaultError>;
