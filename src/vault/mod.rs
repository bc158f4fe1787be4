//! Vault module — the encrypted store orchestrator.
//!
//! `VaultService` ties together the key file, the AES-256-GCM codec,
//! and the record store's text encoding: load, save, and plaintext
//! backup export.

pub mod service;

pub use service::VaultService;
