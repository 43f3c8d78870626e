//! Vault module — in-memory credential verification storage.
//!
//! This module provides:
//! - `CredentialRecord` and `RecordMetadata` types (`record`)
//! - The session-scoped `Session` vault with `commit`/`verify` (`session`)

pub mod record;
pub mod session;

// Re-export the most commonly used items.
pub use record::{CredentialRecord, RecordMetadata};
pub use session::{MasterSecret, Session, Verification};
