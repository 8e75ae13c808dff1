//! `contactvault mkdir` — create a folder under an existing one.

use crate::book::ContactBook;
use crate::cli::{output, prompt_passphrase, resolve_vault, Cli};
use crate::errors::Result;
use crate::vault;

/// Execute the `mkdir` command.
pub fn execute(cli: &Cli, name: &str, parent: Option<&str>) -> Result<()> {
    let (settings, vault_path) = resolve_vault(cli)?;
    let passphrase = prompt_passphrase()?;

    let root = vault::load_or_new(&vault_path, &passphrase, &settings.root_name)?;
    let mut book = ContactBook::from_root(root);

    let parent = parent
        .map(str::to_string)
        .unwrap_or_else(|| book.root().name.clone());
    book.create_folder(&parent, name)?;

    vault::save(
        book.root(),
        &vault_path,
        &passphrase,
        &settings.argon2_params(),
    )?;

    output::success(&format!("New folder '{name}' created in '{parent}'"));
    Ok(())
}
