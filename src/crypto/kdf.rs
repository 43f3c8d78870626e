//! Password-based key derivation using PBKDF2-HMAC-SHA256.
//!
//! PBKDF2 stretches a secret and salt into a fixed-length key; the
//! iteration count is the tunable cost factor that slows brute-force
//! guessing.  Parameters are configurable via `KdfParams` (loaded from
//! `.credvault.toml` or sensible defaults).

use pbkdf2::pbkdf2_hmac;
use rand::rngs::OsRng;
use rand::RngCore;
use sha2::Sha256;

use crate::errors::{CredVaultError, Result};

/// Length of the salt in bytes (128 bits).
pub const SALT_LEN: usize = 16;

/// Length of the derived output in bytes (256 bits).
pub const DERIVED_LEN: usize = 32;

/// Configurable PBKDF2 parameters.
///
/// These map 1:1 to the fields in `Settings` so the CLI can pass
/// whatever the user configured in `.credvault.toml`.
#[derive(Debug, Clone, Copy)]
pub struct KdfParams {
    /// Number of PBKDF2 iterations (default: 100 000).
    pub iterations: u32,
}

impl Default for KdfParams {
    fn default() -> Self {
        Self {
            iterations: 100_000,
        }
    }
}

/// Derive 32 bytes from a secret and salt using PBKDF2-HMAC-SHA256.
///
/// Uses the default iteration count (100 000).  Prefer
/// `derive_key_with_params` when you have a `Settings`.
pub fn derive_key(secret: &[u8], salt: &[u8]) -> Result<[u8; DERIVED_LEN]> {
    derive_key_with_params(secret, salt, &KdfParams::default())
}

/// Derive 32 bytes with an explicit iteration count.
///
/// The same secret + salt + iterations will always produce the same
/// output.  Rejects degenerate parameters (zero iterations, wrong salt
/// length) with `InvalidKdfConfig`.
pub fn derive_key_with_params(
    secret: &[u8],
    salt: &[u8],
    params: &KdfParams,
) -> Result<[u8; DERIVED_LEN]> {
    if params.iterations < 1 {
        return Err(CredVaultError::InvalidKdfConfig(
            "iterations must be at least 1".into(),
        ));
    }
    if salt.len() != SALT_LEN {
        return Err(CredVaultError::InvalidKdfConfig(format!(
            "salt must be exactly {SALT_LEN} bytes (got {})",
            salt.len()
        )));
    }

    let mut derived = [0u8; DERIVED_LEN];
    pbkdf2_hmac::<Sha256>(secret, salt, params.iterations, &mut derived);

    Ok(derived)
}

/// Generate a cryptographically random 16-byte salt.
pub fn generate_salt() -> [u8; SALT_LEN] {
    let mut salt = [0u8; SALT_LEN];
    OsRng.fill_bytes(&mut salt);
    salt
}
