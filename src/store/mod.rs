//! The in-memory record store and its on-disk text encoding.
//!
//! `RecordStore` maps case-sensitive site names to credential records.
//! It serializes to pretty-printed JSON of the map — human-diffable,
//! UTF-8, non-ASCII preserved literally — which is what gets encrypted
//! into the store file and what a plaintext backup contains. BTreeMap
//! ordering makes the encoding deterministic.

pub mod record;

pub use record::Record;

use std::collections::BTreeMap;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// The full mapping of site names to credential records.
///
/// Reconstructed fresh on every load and discarded after every save —
/// there is no persistent in-memory singleton.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordStore {
    records: BTreeMap<String, Record>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or update the record for `site`.
    ///
    /// On update the original `created` timestamp is preserved and
    /// `updated` is refreshed. Returns `true` if a record for `site`
    /// already existed. Empty site names and logins are rejected.
    pub fn upsert(&mut self, site: &str, login: &str, password: &str) -> Result<bool> {
        if site.is_empty() {
            return Err(PassVaultError::InvalidRecord(
                "site name cannot be empty".into(),
            ));
        }
        if login.is_empty() {
            return Err(PassVaultError::InvalidRecord(
                "login cannot be empty".into(),
            ));
        }

        let mut record = Record::new(login, password);
        let existed = match self.records.get(site) {
            Some(existing) => {
                record.created = existing.created;
                record.updated = Utc::now();
                true
            }
            None => false,
        };

        self.records.insert(site.to_string(), record);
        Ok(existed)
    }

    /// Look up the record for `site` (exact, case-sensitive match).
    pub fn get(&self, site: &str) -> Option<&Record> {
        self.records.get(site)
    }

    /// Remove the record for `site`. Returns `true` if one existed.
    pub fn remove(&mut self, site: &str) -> bool {
        self.records.remove(site).is_some()
    }

    /// Returns `true` if a record for `site` exists.
    pub fn contains(&self, site: &str) -> bool {
        self.records.contains_key(site)
    }

    /// Number of records in the store.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterate over all (site, record) pairs in site order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Record)> {
        self.records.iter()
    }

    /// Sorted site names, optionally filtered by a case-insensitive
    /// substring match.
    pub fn sites(&self, filter: Option<&str>) -> Vec<String> {
        let mut sites: Vec<String> = match filter {
            Some(needle) => {
                let needle = needle.to_lowercase();
                self.records
                    .keys()
                    .filter(|s| s.to_lowercase().contains(&needle))
                    .cloned()
                    .collect()
            }
            None => self.records.keys().cloned().collect(),
        };
        sites.sort();
        sites
    }

    /// Site names that contain `site` case-insensitively — used to
    /// suggest near misses when an exact lookup fails.
    pub fn suggestions(&self, site: &str) -> Vec<String> {
        self.sites(Some(site))
    }

    /// Encode the store as deterministic pretty-printed JSON.
    pub fn serialize(&self) -> Result<Vec<u8>> {
        serde_json::to_vec_pretty(self)
            .map_err(|e| PassVaultError::Format(format!("serialize: {e}")))
    }

    /// Decode a store from bytes produced by [`serialize`].
    ///
    /// Fails with `Format` if the bytes are not well-formed JSON, a
    /// record is missing its `login`/`password` fields, or a login is
    /// empty.
    ///
    /// [`serialize`]: RecordStore::serialize
    pub fn deserialize(bytes: &[u8]) -> Result<Self> {
        let store: Self = serde_json::from_slice(bytes)
            .map_err(|e| PassVaultError::Format(e.to_string()))?;

        for (site, record) in &store.records {
            if record.login.is_empty() {
                return Err(PassVaultError::Format(format!(
                    "record for '{site}' has an empty login"
                )));
            }
        }

        Ok(store)
    }
}
