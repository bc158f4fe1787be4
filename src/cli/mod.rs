//! CLI module — Clap argument parser, output helpers, and command
//! implementations.

pub mod commands;
pub mod output;

use clap::Parser;

use crate::config::Settings;
use crate::errors::{PassVaultError, Result};
use crate::store::RecordStore;
use crate::vault::VaultService;

/// PassVault CLI: local encrypted password vault.
#[derive(Parser)]
#[command(
    name = "passvault",
    about = "Local encrypted password vault",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Vault directory (overrides .passvault.toml; default: .passvault)
    #[arg(long, global = true)]
    pub vault_dir: Option<String>,
}

/// All available subcommands.
#[derive(clap::Subcommand)]
pub enum Commands {
    /// Add or update a credential record
    Add {
        /// Site or service name (e.g. github.com)
        site: String,

        /// Login or email (omit for interactive prompt)
        #[arg(short, long)]
        login: Option<String>,

        /// Password (omit for a hidden prompt; leave the prompt empty
        /// to generate one)
        #[arg(short, long)]
        password: Option<String>,

        /// Generate the password instead of asking for one
        #[arg(short, long)]
        generate: bool,

        /// Length of the generated password
        #[arg(long)]
        length: Option<usize>,

        /// Generate without special symbols
        #[arg(long)]
        no_symbols: bool,

        /// Overwrite an existing record without asking
        #[arg(short, long)]
        force: bool,
    },

    /// Show the login and password for a site
    Get {
        /// Site name
        site: String,

        /// Copy the password to the clipboard
        #[arg(short, long)]
        copy: bool,
    },

    /// Delete a record
    Delete {
        /// Site name
        site: String,

        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// List stored sites
    List {
        /// Show only sites containing this substring
        #[arg(short = 's', long)]
        filter: Option<String>,

        /// Show logins and creation dates in a table
        #[arg(short, long)]
        details: bool,
    },

    /// Generate passwords without touching the vault
    Generate {
        /// Password length
        #[arg(short, long)]
        length: Option<usize>,

        /// How many passwords to generate
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Skip special symbols
        #[arg(long)]
        no_symbols: bool,
    },

    /// Export an unencrypted backup of the store
    Backup {
        /// Backup file path
        #[arg(default_value = "backup.json")]
        path: String,
    },

    /// Show store statistics
    Stats,

    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for (bash, zsh, fish, powershell)
        shell: String,
    },
}

// ---------------------------------------------------------------------------
// Shared helpers used by multiple commands
// ---------------------------------------------------------------------------

/// Load `.passvault.toml` from the working directory (defaults when
/// the file is absent).
pub fn settings() -> Result<Settings> {
    let cwd = std::env::current_dir()?;
    Settings::load(&cwd)
}

/// Build the vault service from CLI args and settings.
///
/// The `--vault-dir` flag wins over the config file. The directory is
/// created if it does not exist, so a first `add` just works.
pub fn service(cli: &Cli) -> Result<VaultService> {
    let cwd = std::env::current_dir()?;
    let mut settings = Settings::load(&cwd)?;
    if let Some(dir) = &cli.vault_dir {
        settings.vault_dir = dir.clone();
    }

    let dir = cwd.join(&settings.vault_dir);
    if !dir.exists() {
        std::fs::create_dir_all(&dir)?;
    }

    Ok(VaultService::new(
        settings.key_path(&cwd),
        settings.store_path(&cwd),
    ))
}

/// Load the store for a read-only command.
///
/// An unreadable store — failed integrity check or undecodable
/// plaintext — is reported loudly and replaced with an empty store so
/// the command can still run. I/O and key errors stay fatal. Mutating
/// commands must use `VaultService::load` directly instead: saving an
/// empty store over an unreadable-but-present vault would destroy it.
pub fn load_reporting(service: &VaultService) -> Result<RecordStore> {
    match service.load() {
        Ok(store) => Ok(store),
        Err(e @ (PassVaultError::Authentication | PassVaultError::Format(_))) => {
            output::error(&e.to_string());
            output::warning("Continuing with an empty store — existing data was not readable.");
            Ok(RecordStore::new())
        }
        Err(e) => Err(e),
    }
}

/// Prompt for a login interactively.
pub fn prompt_login(site: &str) -> Result<String> {
    dialoguer::Input::new()
        .with_prompt(format!("Login for {site}"))
        .interact_text()
        .map_err(|e| PassVaultError::CommandFailed(format!("login prompt: {e}")))
}

/// Prompt for a password with hidden input.
///
/// An empty answer is allowed — `add` treats it as "generate one".
pub fn prompt_password(site: &str) -> Result<String> {
    dialoguer::Password::new()
        .with_prompt(format!("Password for {site} (empty to generate)"))
        .allow_empty_password(true)
        .interact()
        .map_err(|e| PassVaultError::CommandFailed(format!("password prompt: {e}")))
}
