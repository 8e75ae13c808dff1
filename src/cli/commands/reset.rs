//! `contactvault reset` — throw away the tree and start over with an
//! empty root.

use dialoguer::Confirm;

use crate::book::ContactBook;
use crate::cli::{output, prompt_passphrase, resolve_vault, Cli};
use crate::errors::{ContactVaultError, Result};
use crate::vault;

/// Execute the `reset` command.
pub fn execute(cli: &Cli, force: bool) -> Result<()> {
    let (settings, vault_path) = resolve_vault(cli)?;

    if !force {
        let confirmed = Confirm::new()
            .with_prompt("Discard all folders and contacts?")
            .default(false)
            .interact()
            .map_err(|e| {
                ContactVaultError::CommandFailed(format!("failed to read confirmation: {e}"))
            })?;

        if !confirmed {
            output::info("Reset cancelled.");
            return Ok(());
        }
    }

    let passphrase = prompt_passphrase()?;

    let book = ContactBook::new(&settings.root_name);
    vault::save(
        book.root(),
        &vault_path,
        &passphrase,
        &settings.argon2_params(),
    )?;

    output::success("Vault reset to an empty root folder.");
    Ok(())
}
