use thiserror::Error;

/// All errors that can occur in CredVault.
#[derive(Debug, Error)]
pub enum CredVaultError {
    // --- Input errors ---
    #[error("Secret cannot be empty")]
    EmptySecret,

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // --- KDF errors ---
    #[error("Invalid KDF configuration: {0}")]
    InvalidKdfConfig(String),

    // --- Verification errors ---
    #[error("invalid master password")]
    AuthenticationFailed,

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

/// Convenience type alias for CredVault results.
pub type Result<T> = std::result::Result<T, CredVaultError>;
