//! `passvault backup` — export an unencrypted copy of the store.

use std::path::{Path, PathBuf};

use crate::cli::output;
use crate::cli::{load_reporting, service, Cli};
use crate::errors::{PassVaultError, Result};

/// Execute the `backup` command.
pub fn execute(cli: &Cli, path: &str) -> Result<()> {
    let vault = service(cli)?;
    let store = load_reporting(&vault)?;

    if store.is_empty() {
        output::info("Nothing to back up — the store is empty.");
        return Ok(());
    }

    // Resolve the destination against the working directory: the
    // vault paths are absolute, the CLI argument usually is not.
    let dest = std::env::current_dir()?.join(path);

    // Refuse to clobber the vault's own files with plaintext.
    let dest_resolved = resolve(&dest);
    if dest_resolved == resolve(vault.store_path()) || dest_resolved == resolve(vault.key_path()) {
        return Err(PassVaultError::CommandFailed(
            "refusing to write a backup over the store or key file".into(),
        ));
    }

    vault.export_backup(&store, &dest)?;

    output::success(&format!("Backup written to {path}"));
    output::warning("The backup is NOT encrypted — delete it after use.");

    Ok(())
}

/// Normalize a path for comparison: canonicalize the parent directory
/// (which follows symlinks and strips `.`/`..`) and re-attach the file
/// name. The file itself may not exist yet, so it cannot be
/// canonicalized directly.
fn resolve(path: &Path) -> PathBuf {
    match path.parent().and_then(|dir| dir.canonicalize().ok()) {
        Some(dir) => dir.join(path.file_name().unwrap_or_default()),
        None => path.to_path_buf(),
    }
}
