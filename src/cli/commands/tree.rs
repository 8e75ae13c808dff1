//! `contactvault tree` — print the folder/contact structure.

use crate::book::ContactBook;
use crate::cli::{prompt_passphrase, resolve_vault, Cli};
use crate::errors::Result;
use crate::vault;

/// Execute the `tree` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let (settings, vault_path) = resolve_vault(cli)?;
    let passphrase = prompt_passphrase()?;

    // A missing vault file just means "no data yet".
    let root = vault::load_or_new(&vault_path, &passphrase, &settings.root_name)?;
    let book = ContactBook::from_root(root);

    print!("{}", book.render());
    Ok(())
}
