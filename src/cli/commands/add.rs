//! `contactvault add` — add a contact through interactive prompts.

use dialoguer::{Input, Select};

use crate::book::ContactBook;
use crate::cli::{output, prompt_passphrase, resolve_vault, Cli};
use crate::errors::{ContactVaultError, Result};
use crate::model::{Contact, Relationship};
use crate::vault;

/// Execute the `add` command.
pub fn execute(cli: &Cli, folder: Option<&str>) -> Result<()> {
    let (settings, vault_path) = resolve_vault(cli)?;
    let passphrase = prompt_passphrase()?;

    let root = vault::load_or_new(&vault_path, &passphrase, &settings.root_name)?;
    let mut book = ContactBook::from_root(root);

    let folder = folder
        .map(str::to_string)
        .unwrap_or_else(|| book.root().name.clone());

    let contact = prompt_contact()?;
    let display_name = format!("{} {}", contact.first_name, contact.last_name);
    book.create_contact(&folder, contact)?;

    vault::save(
        book.root(),
        &vault_path,
        &passphrase,
        &settings.argon2_params(),
    )?;

    output::success(&format!("New contact '{display_name}' created in '{folder}'"));
    Ok(())
}

/// Prompt for each contact field in turn.
fn prompt_contact() -> Result<Contact> {
    let last_name: String = text_prompt("Last name")?;
    let first_name: String = text_prompt("First name")?;
    let email: String = text_prompt("Email")?;
    let company: String = text_prompt("Company")?;

    let idx = Select::new()
        .with_prompt("Relationship")
        .items(&Relationship::ALL)
        .default(0)
        .interact()
        .map_err(|e| ContactVaultError::CommandFailed(format!("relationship prompt: {e}")))?;

    Ok(Contact::new(
        last_name,
        first_name,
        email,
        company,
        Relationship::ALL[idx],
    ))
}

fn text_prompt(label: &str) -> Result<String> {
    Input::new()
        .with_prompt(label)
        .allow_empty(true)
        .interact_text()
        .map_err(|e| ContactVaultError::CommandFailed(format!("{label} prompt: {e}")))
}
