//! `passvault delete` — remove a record from the store.

use dialoguer::Confirm;

use crate::cli::output;
use crate::cli::{service, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `delete` command.
pub fn execute(cli: &Cli, site: &str, force: bool) -> Result<()> {
    let vault = service(cli)?;

    // A failed load must abort: saving after it would clobber the vault.
    let mut store = vault.load()?;

    if !store.contains(site) {
        return Err(PassVaultError::RecordNotFound(site.to_string()));
    }

    // Unless --force is set, ask for confirmation before deleting.
    if !force {
        let confirmed = Confirm::new()
            .with_prompt(format!("Delete the record for '{site}'?"))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    store.remove(site);
    vault.save(&store)?;

    output::success(&format!("Deleted record for '{site}'"));

    Ok(())
}
