use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::{PassVaultError, Result};

/// Project-level configuration, loaded from `.passvault.toml`.
///
/// Every field has a sensible default so PassVault works out of the
/// box without any config file at all.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Directory (relative to the working directory) holding the key
    /// and store files.
    #[serde(default = "default_vault_dir")]
    pub vault_dir: String,

    /// Length of generated passwords when `--length` is not given.
    #[serde(default = "default_password_length")]
    pub default_password_length: usize,

    /// Whether generated passwords include symbols by default.
    #[serde(default = "default_use_symbols")]
    pub use_symbols: bool,
}

// ── Serde default helpers ────────────────────────────────────────────

fn default_vault_dir() -> String {
    ".passvault".to_string()
}

fn default_password_length() -> usize {
    16
}

fn default_use_symbols() -> bool {
    true
}

// ── Implementation ───────────────────────────────────────────────────

impl Default for Settings {
    fn default() -> Self {
        Self {
            vault_dir: default_vault_dir(),
            default_password_length: default_password_length(),
            use_symbols: default_use_symbols(),
        }
    }
}

impl Settings {
    /// Name of the config file we look for in the working directory.
    const FILE_NAME: &'static str = ".passvault.toml";

    /// Load settings from `<project_dir>/.passvault.toml`.
    ///
    /// If the file does not exist, defaults are returned. If the file
    /// exists but cannot be parsed, an error is returned.
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join(Self::FILE_NAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path)?;

        let settings: Settings = toml::from_str(&contents).map_err(|e| {
            PassVaultError::ConfigError(format!("Failed to parse {}: {e}", config_path.display()))
        })?;

        Ok(settings)
    }

    /// Full path to the encrypted store file.
    ///
    /// Example: `project_dir/.passvault/vault.enc`
    pub fn store_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_dir).join("vault.enc")
    }

    /// Full path to the key file.
    ///
    /// Example: `project_dir/.passvault/key.key`
    pub fn key_path(&self, project_dir: &Path) -> PathBuf {
        project_dir.join(&self.vault_dir).join("key.key")
    }
}

// ── Tests ────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn default_settings_are_sensible() {
        let s = Settings::default();
        assert_eq!(s.vault_dir, ".passvault");
        assert_eq!(s.default_password_length, 16);
        assert!(s.use_symbols);
    }

    #[test]
    fn load_returns_defaults_when_no_config_file() {
        let tmp = TempDir::new().unwrap();
        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, ".passvault");
    }

    #[test]
    fn load_parses_toml_file() {
        let tmp = TempDir::new().unwrap();
        let config = r#"
vault_dir = "secrets"
default_password_length = 24
use_symbols = false
"#;
        fs::write(tmp.path().join(".passvault.toml"), config).unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, "secrets");
        assert_eq!(settings.default_password_length, 24);
        assert!(!settings.use_symbols);
    }

    #[test]
    fn load_uses_defaults_for_missing_fields() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".passvault.toml"), "vault_dir = \"v\"\n").unwrap();

        let settings = Settings::load(tmp.path()).unwrap();
        assert_eq!(settings.vault_dir, "v");
        // Rest should be defaults
        assert_eq!(settings.default_password_length, 16);
    }

    #[test]
    fn load_errors_on_invalid_toml() {
        let tmp = TempDir::new().unwrap();
        fs::write(tmp.path().join(".passvault.toml"), "not valid {{toml").unwrap();

        let result = Settings::load(tmp.path());
        assert!(result.is_err());
    }

    #[test]
    fn paths_respect_custom_vault_dir() {
        let s = Settings {
            vault_dir: "secrets".to_string(),
            ..Settings::default()
        };
        let project = Path::new("/home/user/myproject");
        assert_eq!(
            s.store_path(project),
            PathBuf::from("/home/user/myproject/secrets/vault.enc")
        );
        assert_eq!(
            s.key_path(project),
            PathBuf::from("/home/user/myproject/secrets/key.key")
        );
    }
}
