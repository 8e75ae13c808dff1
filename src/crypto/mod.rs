//! Cryptographic primitives for ContactVault.
//!
//! - AES-256-GCM encryption and decryption (`encryption`)
//! - Argon2id passphrase-based key derivation (`kdf`)
//!
//! The original file format this tool replaces encrypted with a fixed
//! all-zero IV and derived its key by truncating or padding the
//! passphrase bytes.  Both were genuine defects; here every save uses a
//! fresh random nonce and a real memory-hard KDF with a per-file salt.

pub mod encryption;
pub mod kdf;

pub use encryption::{decrypt, encrypt};
pub use kdf::{derive_key, generate_salt, Argon2Params, VaultKey, SALT_LEN};
