//! `contactvault init` — create a new vault with an empty root folder.

use crate::book::ContactBook;
use crate::cli::{output, prompt_new_passphrase, resolve_vault, Cli};
use crate::errors::{ContactVaultError, Result};
use crate::vault;

/// Execute the `init` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (settings, vault_path) = resolve_vault(cli)?;

    if vault_path.exists() {
        output::tip("Use `contactvault mkdir` or `contactvault add` to grow the existing book.");
        return Err(ContactVaultError::VaultAlreadyExists(vault_path));
    }

    let passphrase = prompt_new_passphrase()?;

    let book = ContactBook::new(&settings.root_name);
    vault::save(
        book.root(),
        &vault_path,
        &passphrase,
        &settings.argon2_params(),
    )?;

    output::success(&format!("Vault created at {}", vault_path.display()));
    output::tip("Run `contactvault mkdir <name>` to create a folder.");
    output::tip("Run `contactvault add` to add a contact.");
    output::tip("Run `contactvault tree` to see the structure.");

    Ok(())
}
