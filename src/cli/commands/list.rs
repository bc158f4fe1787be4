//! `passvault list` — display stored sites.

use crate::cli::output;
use crate::cli::{load_reporting, service, Cli};
use crate::errors::Result;

/// Execute the `list` command.
pub fn execute(cli: &Cli, filter: Option<&str>, details: bool) -> Result<()> {
    let vault = service(cli)?;
    let store = load_reporting(&vault)?;

    if store.is_empty() {
        output::info("The store is empty.");
        output::tip("Run `passvault add <site>` to add your first record.");
        return Ok(());
    }

    let sites = store.sites(filter);
    if sites.is_empty() {
        output::info(&format!(
            "No records match '{}'.",
            filter.unwrap_or_default()
        ));
        return Ok(());
    }

    output::info(&format!("{} record(s)", sites.len()));

    if details {
        output::print_details_table(&store, &sites);
    } else {
        for site in &sites {
            println!("{site}");
        }
    }

    Ok(())
}
