//! Cryptographic primitives for PassVault.
//!
//! This module provides:
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - Key file management and the zeroize-on-drop key wrapper (`keyfile`)

pub mod encryption;
pub mod keyfile;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{encrypt, decrypt, load_or_create_key, VaultKey};
pub use encryption::{decrypt, encrypt, KEY_LEN};
pub use keyfile::{load_or_create_key, VaultKey};
