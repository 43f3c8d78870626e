//! Cryptographic primitives for CredVault.
//!
//! This module provides:
//! - PBKDF2-HMAC-SHA256 key derivation (`kdf`)
//! - Cryptographically random salt generation (`kdf::generate_salt`)

pub mod kdf;

// Re-export the most commonly used items so callers can write:
//   use crate::crypto::{derive_key, generate_salt, ...};
pub use kdf::{derive_key, derive_key_with_params, generate_salt, KdfParams};
