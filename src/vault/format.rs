//! Binary vault file envelope.
//!
//! A `.cvault` file has this layout:
//!
//! ```text
//! [CVLT: 4 bytes][version: 1 byte][argon2 params: 12 bytes LE][salt: 32 bytes][nonce + ciphertext]
//! ```
//!
//! - **Magic** (`CVLT`): identifies the file as a ContactVault vault.
//! - **Version**: format version (currently `1`).
//! - **Argon2 params**: memory_kib, iterations, parallelism as
//!   little-endian u32s, stored so `load` derives the key with the exact
//!   settings used at save time.
//! - **Salt**: the per-save random KDF salt.
//! - **Payload**: the encrypted tree document (12-byte nonce followed by
//!   ciphertext + auth tag, see `crypto::encryption`).
//!
//! There is no separate integrity field: the AES-GCM auth tag inside the
//! payload covers the plaintext, and a tampered prefix fails either the
//! version check or key derivation.

use std::fs;
use std::path::Path;

use crate::crypto::{Argon2Params, SALT_LEN};
use crate::errors::{ContactVaultError, Result};

/// Magic bytes at the start of every vault file.
const MAGIC: &[u8; 4] = b"CVLT";

/// Current binary format version.
pub const CURRENT_VERSION: u8 = 1;

/// Fixed-size prefix: 4 (magic) + 1 (version) + 12 (params) + 32 (salt).
const PREFIX_LEN: usize = 4 + 1 + 12 + SALT_LEN;

/// The decoded parts of a vault file.
pub struct Envelope {
    /// KDF settings the payload's key was derived with.
    pub params: Argon2Params,
    /// The random salt for key derivation.
    pub salt: [u8; SALT_LEN],
    /// Nonce-prefixed ciphertext.
    pub payload: Vec<u8>,
}

/// Write a vault file to disk **atomically**, replacing any existing
/// file at `path`.
///
/// Writes to a temp file in the same directory, then renames over the
/// target so readers never see a half-written vault.
pub fn write_envelope(path: &Path, envelope: &Envelope) -> Result<()> {
    let mut buf = Vec::with_capacity(PREFIX_LEN + envelope.payload.len());
    buf.extend_from_slice(MAGIC);
    buf.push(CURRENT_VERSION);
    buf.extend_from_slice(&envelope.params.memory_kib.to_le_bytes());
    buf.extend_from_slice(&envelope.params.iterations.to_le_bytes());
    buf.extend_from_slice(&envelope.params.parallelism.to_le_bytes());
    buf.extend_from_slice(&envelope.salt);
    buf.extend_from_slice(&envelope.payload);

    let parent = path.parent().unwrap_or(Path::new("."));
    let tmp_path = parent.join(format!(
        ".{}.tmp",
        path.file_name().unwrap_or_default().to_string_lossy()
    ));

    fs::write(&tmp_path, &buf)?;
    fs::rename(&tmp_path, path)?;

    Ok(())
}

/// Read a vault file from disk and split it into its parts.
pub fn read_envelope(path: &Path) -> Result<Envelope> {
    if !path.exists() {
        return Err(ContactVaultError::VaultNotFound(path.to_path_buf()));
    }

    let data = fs::read(path)?;

    if data.len() < PREFIX_LEN {
        return Err(ContactVaultError::InvalidVaultFormat(
            "file too small to be a valid vault".into(),
        ));
    }

    if &data[0..4] != MAGIC {
        return Err(ContactVaultError::InvalidVaultFormat(
            "missing CVLT magic bytes".into(),
        ));
    }

    let version = data[4];
    if version != CURRENT_VERSION {
        return Err(ContactVaultError::InvalidVaultFormat(format!(
            "unsupported version {version}, expected {CURRENT_VERSION}"
        )));
    }

    let params = Argon2Params {
        memory_kib: read_u32_le(&data, 5),
        iterations: read_u32_le(&data, 9),
        parallelism: read_u32_le(&data, 13),
    };

    let mut salt = [0u8; SALT_LEN];
    salt.copy_from_slice(&data[17..17 + SALT_LEN]);

    Ok(Envelope {
        params,
        salt,
        payload: data[PREFIX_LEN..].to_vec(),
    })
}

fn read_u32_le(data: &[u8], offset: usize) -> u32 {
    let mut bytes = [0u8; 4];
    bytes.copy_from_slice(&data[offset..offset + 4]);
    u32::from_le_bytes(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_envelope() -> Envelope {
        Envelope {
            params: Argon2Params::default(),
            salt: [7u8; SALT_LEN],
            payload: vec![1, 2, 3, 4, 5],
        }
    }

    #[test]
    fn envelope_round_trips() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.cvault");

        write_envelope(&path, &sample_envelope()).unwrap();
        let read = read_envelope(&path).unwrap();

        assert_eq!(read.salt, [7u8; SALT_LEN]);
        assert_eq!(read.payload, vec![1, 2, 3, 4, 5]);
        assert_eq!(read.params.memory_kib, 65_536);
        assert_eq!(read.params.iterations, 3);
        assert_eq!(read.params.parallelism, 4);
    }

    #[test]
    fn missing_file_is_vault_not_found() {
        let dir = TempDir::new().unwrap();
        let result = read_envelope(&dir.path().join("nope.cvault"));
        assert!(matches!(result, Err(ContactVaultError::VaultNotFound(_))));
    }

    #[test]
    fn rejects_bad_magic() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.cvault");
        std::fs::write(&path, [0u8; 64]).unwrap();

        let result = read_envelope(&path);
        assert!(matches!(
            result,
            Err(ContactVaultError::InvalidVaultFormat(_))
        ));
    }

    #[test]
    fn rejects_unsupported_version() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.cvault");

        write_envelope(&path, &sample_envelope()).unwrap();
        let mut data = std::fs::read(&path).unwrap();
        data[4] = 99;
        std::fs::write(&path, &data).unwrap();

        let result = read_envelope(&path);
        assert!(matches!(
            result,
            Err(ContactVaultError::InvalidVaultFormat(_))
        ));
    }

    #[test]
    fn rejects_truncated_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.cvault");
        std::fs::write(&path, b"CVLT\x01abc").unwrap();

        let result = read_envelope(&path);
        assert!(matches!(
            result,
            Err(ContactVaultError::InvalidVaultFormat(_))
        ));
    }

    #[test]
    fn write_replaces_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("book.cvault");

        write_envelope(&path, &sample_envelope()).unwrap();
        let mut other = sample_envelope();
        other.payload = vec![9, 9, 9];
        write_envelope(&path, &other).unwrap();

        let read = read_envelope(&path).unwrap();
        assert_eq!(read.payload, vec![9, 9, 9]);
    }
}
