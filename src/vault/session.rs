//! High-level vault operations used by the command loop.
//!
//! A `Session` owns the master secret and the in-memory identifier ->
//! `CredentialRecord` map for exactly one process lifetime.  Nothing is
//! ever written to disk; the vault is created empty at session start
//! and discarded at process exit.

use std::collections::HashMap;

use chrono::Utc;
use subtle::ConstantTimeEq;
use zeroize::Zeroize;

use crate::crypto::kdf::{derive_key_with_params, generate_salt, KdfParams};
use crate::errors::{CredVaultError, Result};

use super::record::{CredentialRecord, RecordMetadata};

/// The master secret supplied once at session start.
///
/// Wraps the secret string so its memory is zeroed on drop and so it
/// can never be printed by accident (no `Display`, opaque `Debug`).
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct MasterSecret {
    secret: String,
}

impl MasterSecret {
    /// Create a new `MasterSecret` from the prompted string.
    pub fn new(secret: String) -> Self {
        Self { secret }
    }

    /// Access the raw secret bytes (e.g. to pass to the KDF).
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.as_bytes()
    }
}

impl std::fmt::Debug for MasterSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("MasterSecret(..)")
    }
}

/// Outcome of a `verify` call.
///
/// `NotFound` is a normal outcome, distinct from authentication
/// failure — callers must be able to tell "no such entry" apart from
/// "wrong master password".
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verification {
    /// The stored record matches the current master secret.  The
    /// payload is the derived bytes as a lowercase hex string.
    Verified(String),

    /// No record exists under the requested identifier.
    NotFound,
}

/// The main vault handle.  Create one with `Session::new` at process
/// start, then use its methods to commit and verify credentials.
pub struct Session {
    /// The session's master secret (zeroized on drop).
    master: MasterSecret,

    /// In-memory map of identifier -> committed record.
    records: HashMap<String, CredentialRecord>,

    /// KDF cost parameters, fixed for the session.
    params: KdfParams,
}

impl Session {
    /// Start a new session with the given master secret.
    ///
    /// The vault starts empty.  Pass `KdfParams::default()` unless the
    /// user configured a different iteration count.
    pub fn new(master: MasterSecret, params: KdfParams) -> Self {
        Self {
            master,
            records: HashMap::new(),
            params,
        }
    }

    // ------------------------------------------------------------------
    // Vault operations
    // ------------------------------------------------------------------

    /// Commit a secret under an identifier.
    ///
    /// Generates a fresh random salt (even when overwriting), derives
    /// the one-way fingerprint of `secret`, and replaces any prior
    /// record under `identifier` wholesale.  Only the original
    /// `created_at` survives an overwrite.
    pub fn commit(&mut self, identifier: &str, secret: &str) -> Result<()> {
        Self::validate_identifier(identifier)?;
        if secret.is_empty() {
            return Err(CredVaultError::EmptySecret);
        }

        let salt = generate_salt();
        let derived = derive_key_with_params(secret.as_bytes(), &salt, &self.params)?;

        let now = Utc::now();

        // If the identifier already exists, preserve the original created_at.
        let created_at = self
            .records
            .get(identifier)
            .map_or(now, |existing| existing.created_at);

        let record = CredentialRecord {
            salt,
            derived,
            created_at,
            updated_at: now,
        };

        self.records.insert(identifier.to_string(), record);
        Ok(())
    }

    /// Verify the record under an identifier against the current
    /// master secret.
    ///
    /// Recomputes the derivation with the *session's* master secret and
    /// the stored salt, then compares in constant time:
    /// - no record -> `Ok(Verification::NotFound)`
    /// - match     -> `Ok(Verification::Verified(hex))`
    /// - mismatch  -> `Err(AuthenticationFailed)`
    ///
    /// This is a verification vault, not a recovery vault: `verify` can
    /// only confirm that the secret committed here equals the current
    /// master secret.  The hex payload is the master-secret-derived
    /// fingerprint, never the committed plaintext.
    pub fn verify(&self, identifier: &str) -> Result<Verification> {
        Self::validate_identifier(identifier)?;

        let record = match self.records.get(identifier) {
            Some(r) => r,
            None => return Ok(Verification::NotFound),
        };

        let mut check = derive_key_with_params(self.master.as_bytes(), &record.salt, &self.params)?;

        let matches = bool::from(check[..].ct_eq(&record.derived[..]));
        if !matches {
            check.zeroize();
            return Err(CredVaultError::AuthenticationFailed);
        }

        let recovered = hex::encode(&check);
        check.zeroize();
        Ok(Verification::Verified(recovered))
    }

    /// List metadata for all records, sorted by identifier.
    pub fn list_records(&self) -> Vec<RecordMetadata> {
        let mut list: Vec<RecordMetadata> = self
            .records
            .iter()
            .map(|(identifier, r)| RecordMetadata {
                identifier: identifier.clone(),
                created_at: r.created_at,
                updated_at: r.updated_at,
            })
            .collect();

        list.sort_by(|a, b| a.identifier.cmp(&b.identifier));
        list
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// Returns the number of records in the vault.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` if the vault contains a record under `identifier`.
    ///
    /// This is a metadata-only check — no derivation is performed.
    pub fn contains(&self, identifier: &str) -> bool {
        self.records.contains_key(identifier)
    }

    /// Returns the salt of the record under `identifier`, if present.
    ///
    /// Exposed so tests can assert salt freshness across commits.
    pub fn record_salt(&self, identifier: &str) -> Option<[u8; crate::crypto::kdf::SALT_LEN]> {
        self.records.get(identifier).map(|r| r.salt)
    }

    // ------------------------------------------------------------------
    // Validation
    // ------------------------------------------------------------------

    /// Validate that an identifier is usable as a vault key.
    ///
    /// Must be non-empty and at most 256 characters.  Any printable
    /// content is otherwise allowed — identifiers are labels, not paths.
    fn validate_identifier(identifier: &str) -> Result<()> {
        if identifier.is_empty() {
            return Err(CredVaultError::InvalidInput(
                "identifier cannot be empty".into(),
            ));
        }
        if identifier.len() > 256 {
            return Err(CredVaultError::InvalidInput(
                "identifier cannot exceed 256 characters".into(),
            ));
        }
        Ok(())
    }
}
