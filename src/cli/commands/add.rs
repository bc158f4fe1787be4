//! `passvault add` — add or update a credential record.

use dialoguer::Confirm;
use zeroize::Zeroizing;

use crate::cli::output;
use crate::cli::{prompt_login, prompt_password, service, settings, Cli};
use crate::errors::{PassVaultError, Result};
use crate::password::{generate, score};

/// Arguments for the `add` command.
pub struct AddArgs<'a> {
    pub site: &'a str,
    pub login: Option<&'a str>,
    pub password: Option<&'a str>,
    pub generate: bool,
    pub length: Option<usize>,
    pub no_symbols: bool,
    pub force: bool,
}

/// Execute the `add` command.
pub fn execute(cli: &Cli, args: &AddArgs) -> Result<()> {
    let vault = service(cli)?;
    let settings = settings()?;

    // A failed load must abort here: saving on top of an unreadable
    // vault would destroy it.
    let mut store = vault.load()?;

    if store.contains(args.site) && !args.force {
        let confirmed = Confirm::new()
            .with_prompt(format!("A record for '{}' already exists. Replace it?", args.site))
            .default(false)
            .interact()
            .map_err(|e| PassVaultError::CommandFailed(format!("confirm prompt: {e}")))?;

        if !confirmed {
            output::info("Cancelled.");
            return Ok(());
        }
    }

    let login = match args.login {
        Some(l) => l.to_string(),
        None => prompt_login(args.site)?,
    };

    // Resolve the password: flag, prompt, or generator.
    let password = Zeroizing::new(resolve_password(args, &settings)?);

    let (level, feedback) = score(&password);
    output::strength(level, &feedback);

    let existed = store.upsert(args.site, &login, &password)?;
    vault.save(&store)?;

    if existed {
        output::success(&format!("Updated record for '{}'", args.site));
    } else {
        output::success(&format!("Added record for '{}'", args.site));
    }

    Ok(())
}

fn resolve_password(args: &AddArgs, settings: &crate::config::Settings) -> Result<String> {
    let length = args.length.unwrap_or(settings.default_password_length);
    let symbols = if args.no_symbols {
        false
    } else {
        settings.use_symbols
    };

    if args.generate {
        let password = generate(length, symbols);
        output::info(&format!("Generated password: {password}"));
        return Ok(password);
    }

    let entered = match args.password {
        Some(p) => {
            output::warning("Password provided on command line — it may appear in shell history.");
            p.to_string()
        }
        None => prompt_password(args.site)?,
    };

    // An empty password means "generate one for me".
    if entered.is_empty() {
        let password = generate(length, symbols);
        output::info(&format!("Generated password: {password}"));
        Ok(password)
    } else {
        Ok(entered)
    }
}
