//! The credential record stored under each site name.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A single credential record.
///
/// `created` is set once when the record is first inserted; `updated`
/// is refreshed on every mutation, so `created <= updated` always
/// holds. The password is zeroized when the record is dropped.
#[derive(Clone, PartialEq, Serialize, Deserialize, Zeroize, ZeroizeOnDrop)]
pub struct Record {
    /// Login or email for the site.
    pub login: String,

    /// The stored password (plaintext in memory, encrypted at rest).
    pub password: String,

    /// When this record was first created.
    #[zeroize(skip)]
    pub created: DateTime<Utc>,

    /// When this record was last updated.
    #[zeroize(skip)]
    pub updated: DateTime<Utc>,
}

impl Record {
    /// Build a fresh record with `created == updated == now`.
    pub fn new(login: impl Into<String>, password: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            login: login.into(),
            password: password.into(),
            created: now,
            updated: now,
        }
    }
}

// The password must never leak through debug formatting.
impl fmt::Debug for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("login", &self.login)
            .field("password", &"<redacted>")
            .field("created", &self.created)
            .field("updated", &self.updated)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_equal_timestamps() {
        let record = Record::new("bob", "hunter2");
        assert_eq!(record.created, record.updated);
    }

    #[test]
    fn debug_output_redacts_password() {
        let record = Record::new("bob", "hunter2");
        let debug = format!("{record:?}");
        assert!(!debug.contains("hunter2"));
        assert!(debug.contains("<redacted>"));
    }

    #[test]
    fn serializes_timestamps_as_iso8601() {
        let record = Record::new("bob", "pw");
        let json = serde_json::to_string(&record).unwrap();
        // RFC 3339 timestamps end with a Z for UTC.
        assert!(json.contains("\"created\":\"2"));
        assert!(json.contains('Z'));
    }
}
