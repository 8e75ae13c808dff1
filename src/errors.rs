use std::path::PathBuf;
use thiserror::Error;

/// All errors that can occur in ContactVault.
#[derive(Debug, Error)]
pub enum ContactVaultError {
    // --- Crypto errors ---
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("Decryption failed — wrong passphrase or corrupted data")]
    DecryptionFailed,

    #[error("Key derivation failed: {0}")]
    KeyDerivationFailed(String),

    // --- Vault errors ---
    #[error("Vault not found at {0}")]
    VaultNotFound(PathBuf),

    #[error("Vault already exists at {0}")]
    VaultAlreadyExists(PathBuf),

    #[error("Invalid vault format: {0}")]
    InvalidVaultFormat(String),

    // --- Codec errors ---
    /// A field value could not be interpreted (unknown relationship tag,
    /// unparsable timestamp).
    #[error("Malformed field value: {0}")]
    Format(String),

    /// The document itself is malformed (mismatched nesting, missing
    /// required field, trailing garbage).
    #[error("Malformed document structure: {0}")]
    Structure(String),

    // --- Book errors ---
    #[error("Folder '{0}' not found")]
    FolderNotFound(String),

    // --- Config errors ---
    #[error("Config file error: {0}")]
    ConfigError(String),

    // --- IO errors ---
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // --- CLI errors ---
    #[error("Command failed: {0}")]
    CommandFailed(String),

    #[error("User cancelled operation")]
    UserCancelled,
}

/// Convenience type alias for ContactVault results.
pub type Result<T> = std::result::Result<T, ContactVaultError>;
