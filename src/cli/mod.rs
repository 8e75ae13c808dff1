//! CLI module — Clap argument parser, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use std::path::PathBuf;

use clap::Parser;
use zeroize::Zeroizing;

use crate::config::Settings;
use crate::errors::{ContactVaultError, Result};

/// Minimum passphrase length to prevent trivially weak passphrases.
const MIN_PASSPHRASE_LEN: usize = 8;

/// ContactVault CLI: encrypted hierarchical contact manager.
#[derive(Parser)]
#[command(
    name = "contactvault",
    about = "Encrypted hierarchical contact manager",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the vault file (overrides .contactvault.toml)
    #[arg(long, global = true)]
    pub vault: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Create a new vault with an empty root folder
    Init,

    /// Print the folder/contact structure
    Tree,

    /// Create a folder
    Mkdir {
        /// Name of the new folder
        name: String,
        /// Parent folder (default: the root folder)
        #[arg(long = "in", value_name = "FOLDER")]
        parent: Option<String>,
    },

    /// Add a contact (interactive prompts)
    Add {
        /// Folder to add the contact to (default: the root folder)
        #[arg(long = "in", value_name = "FOLDER")]
        folder: Option<String>,
    },

    /// List the contacts of one folder
    List {
        /// Folder to list (default: the root folder)
        #[arg(long = "in", value_name = "FOLDER")]
        folder: Option<String>,
    },

    /// Replace the vault with a fresh empty root
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Get the vault passphrase, trying in order:
/// 1. `CONTACTVAULT_PASSPHRASE` env var (scripting)
/// 2. Interactive prompt
///
/// Returns `Zeroizing<String>` so the passphrase is wiped from memory
/// on drop.
pub fn prompt_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("CONTACTVAULT_PASSPHRASE") {
        if !pw.is_empty() {
            return Ok(Zeroizing::new(pw));
        }
    }

    let pw = dialoguer::Password::new()
        .with_prompt("Enter vault passphrase")
        .interact()
        .map_err(|e| ContactVaultError::CommandFailed(format!("passphrase prompt: {e}")))?;
    Ok(Zeroizing::new(pw))
}

/// Prompt for a new passphrase with confirmation (used during `init`).
///
/// Also respects `CONTACTVAULT_PASSPHRASE` for scripted usage.
/// Enforces a minimum passphrase length.
pub fn prompt_new_passphrase() -> Result<Zeroizing<String>> {
    if let Ok(pw) = std::env::var("CONTACTVAULT_PASSPHRASE") {
        if !pw.is_empty() {
            if pw.len() < MIN_PASSPHRASE_LEN {
                return Err(ContactVaultError::CommandFailed(format!(
                    "passphrase must be at least {MIN_PASSPHRASE_LEN} characters"
                )));
            }
            return Ok(Zeroizing::new(pw));
        }
    }

    loop {
        let passphrase = dialoguer::Password::new()
            .with_prompt("Choose vault passphrase")
            .with_confirmation(
                "Confirm vault passphrase",
                "Passphrases do not match, try again",
            )
            .interact()
            .map_err(|e| ContactVaultError::CommandFailed(format!("passphrase prompt: {e}")))?;

        if passphrase.len() < MIN_PASSPHRASE_LEN {
            output::error(&format!(
                "Passphrase must be at least {MIN_PASSPHRASE_LEN} characters. Try again."
            ));
            continue;
        }

        return Ok(Zeroizing::new(passphrase));
    }
}

/// Resolve project settings and the vault file path from the CLI
/// arguments (the `--vault` flag wins over `.contactvault.toml`).
pub fn resolve_vault(cli: &Cli) -> Result<(Settings, PathBuf)> {
    let cwd = std::env::current_dir()?;
    let settings = Settings::load(&cwd)?;
    let path = match &cli.vault {
        Some(p) => PathBuf::from(p),
        None => settings.vault_path(&cwd),
    };
    Ok((settings, path))
}
