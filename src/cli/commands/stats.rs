//! `passvault stats` — store statistics.

use crate::cli::output;
use crate::cli::{load_reporting, service, Cli};
use crate::errors::Result;
use crate::password::score;

/// Execute the `stats` command.
pub fn execute(cli: &Cli) -> Result<()> {
    let vault = service(cli)?;
    let store = load_reporting(&vault)?;

    if store.is_empty() {
        output::info("The store is empty.");
        return Ok(());
    }

    let mut weak = 0usize;
    let mut strong = 0usize;
    for (_, record) in store.iter() {
        let (level, _) = score(&record.password);
        if level.is_weak() {
            weak += 1;
        } else if level.is_strong() {
            strong += 1;
        }
    }

    println!("Total records:    {}", store.len());
    println!("Strong passwords: {strong}");
    println!("Weak passwords:   {weak}");

    if weak > 0 {
        output::tip("Consider updating the weak passwords.");
    }

    Ok(())
}
