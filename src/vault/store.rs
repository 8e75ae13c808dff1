//! Save and load the address book tree.
//!
//! Data flow on save: tree -> codec::encode -> plaintext bytes ->
//! fresh salt + derived key -> AES-GCM -> envelope on disk.
//! Load is the exact reverse, using the salt and KDF params stored in
//! the envelope.

use std::path::Path;

use zeroize::Zeroize;

use crate::codec;
use crate::crypto::{decrypt, derive_key, encrypt, generate_salt, Argon2Params};
use crate::errors::Result;
use crate::model::Folder;

use super::format::{self, Envelope};

/// Encrypt and write the tree to `path`, replacing any existing file.
///
/// A fresh salt (and therefore a fresh key) and a fresh nonce are used
/// on every save, so saving the same tree twice never produces the same
/// file bytes.
pub fn save(root: &Folder, path: &Path, passphrase: &str, params: &Argon2Params) -> Result<()> {
    let salt = generate_salt();
    let key = derive_key(passphrase.as_bytes(), &salt, params)?;

    let mut plaintext = codec::encode(root);
    let payload = encrypt(&key, &plaintext);
    plaintext.zeroize();

    format::write_envelope(
        path,
        &Envelope {
            params: *params,
            salt,
            payload: payload?,
        },
    )
}

/// Read, decrypt, and decode the tree stored at `path`.
///
/// A wrong passphrase fails the payload's auth tag check and surfaces
/// as `DecryptionFailed` — the codec never sees garbled plaintext.
pub fn load(path: &Path, passphrase: &str) -> Result<Folder> {
    let envelope = format::read_envelope(path)?;
    let key = derive_key(passphrase.as_bytes(), &envelope.salt, &envelope.params)?;

    let mut plaintext = decrypt(&key, &envelope.payload)?;
    let root = codec::decode(&plaintext);
    plaintext.zeroize();

    root
}

/// Like [`load`], but a missing file means "no data yet": a fresh empty
/// root folder is returned instead of an error.
pub fn load_or_new(path: &Path, passphrase: &str, root_name: &str) -> Result<Folder> {
    if path.exists() {
        load(path, passphrase)
    } else {
        Ok(Folder::new(root_name))
    }
}
