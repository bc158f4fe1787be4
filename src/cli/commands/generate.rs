//! `passvault generate` — print generated passwords.
//!
//! Never touches the vault; this is the pure generator plus a
//! strength label per line.

use crate::cli::{settings, Cli};
use crate::errors::Result;
use crate::password::{generate, score};

/// Execute the `generate` command.
pub fn execute(_cli: &Cli, length: Option<usize>, count: usize, no_symbols: bool) -> Result<()> {
    let settings = settings()?;

    let length = length.unwrap_or(settings.default_password_length);
    let symbols = if no_symbols { false } else { settings.use_symbols };

    for i in 1..=count {
        let password = generate(length, symbols);
        let (level, _) = score(&password);
        println!("{i:2}. {password} [{level}]");
    }

    Ok(())
}
