//! `passvault get` — show the login and password for a site.

use crate::cli::output;
use crate::cli::{load_reporting, service, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `get` command.
pub fn execute(cli: &Cli, site: &str, copy: bool) -> Result<()> {
    let vault = service(cli)?;
    let store = load_reporting(&vault)?;

    let Some(record) = store.get(site) else {
        // No exact match — suggest close site names before failing.
        let matches = store.suggestions(site);
        if !matches.is_empty() {
            output::info("No exact match. Did you mean:");
            for m in &matches {
                output::tip(m);
            }
        }
        return Err(PassVaultError::RecordNotFound(site.to_string()));
    };

    println!("Site:     {site}");
    println!("Login:    {}", record.login);
    println!("Password: {}", record.password);
    println!("Created:  {}", record.created.format("%Y-%m-%d %H:%M:%S"));
    println!("Updated:  {}", record.updated.format("%Y-%m-%d %H:%M:%S"));

    if copy {
        let mut clipboard = arboard::Clipboard::new()
            .map_err(|e| PassVaultError::CommandFailed(format!("clipboard unavailable: {e}")))?;
        clipboard
            .set_text(record.password.clone())
            .map_err(|e| PassVaultError::CommandFailed(format!("clipboard write: {e}")))?;
        output::success("Password copied to clipboard");
    }

    Ok(())
}
