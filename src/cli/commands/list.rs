//! `contactvault list` — show the contacts of one folder as a table.

use crate::book::ContactBook;
use crate::cli::{output, prompt_passphrase, resolve_vault, Cli};
use crate::errors::Result;
use crate::vault;

/// Execute the `list` command.
pub fn execute(cli: &Cli, folder: Option<&str>) -> Result<()> {
    let (settings, vault_path) = resolve_vault(cli)?;
    let passphrase = prompt_passphrase()?;

    let root = vault::load_or_new(&vault_path, &passphrase, &settings.root_name)?;
    let book = ContactBook::from_root(root);

    let folder = folder
        .map(str::to_string)
        .unwrap_or_else(|| book.root().name.clone());

    let contacts = book.contacts_in(&folder)?;
    output::print_contacts_table(contacts);
    Ok(())
}
