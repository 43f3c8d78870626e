//! Record types stored inside a session vault.
//!
//! Each record holds the random salt used at commit time, the derived
//! bytes produced by the KDF, and creation/update timestamps.  Records
//! are immutable once created; a re-commit replaces the record wholesale.

use chrono::{DateTime, Utc};

use crate::crypto::kdf::{DERIVED_LEN, SALT_LEN};

/// A single committed credential record.
///
/// The `derived` bytes are a one-way fingerprint of the committed
/// secret, not recoverable plaintext.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    /// Random salt generated at commit time (fresh on every commit).
    pub salt: [u8; SALT_LEN],

    /// PBKDF2 output for (secret, salt).
    pub derived: [u8; DERIVED_LEN],

    /// When a record was first committed under this identifier.
    pub created_at: DateTime<Utc>,

    /// When this record was last replaced.
    pub updated_at: DateTime<Utc>,
}

/// Lightweight metadata about a record (no salt or derived bytes).
///
/// Returned by `Session::list_records` so callers can display
/// identifiers and timestamps without touching any key material.
#[derive(Debug, Clone)]
pub struct RecordMetadata {
    pub identifier: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
