use crate::error::{ResultExt, Result};
use crate::ui;
use dialoguer::{Confirm, theme::ColorfulTheme};
use std::io::IsTerminal;
use std::path::Path;
use users_client::ClientConfig;
use users_client::config::ensure_config_file_exists;

/// Load the configuration file, offering to create it when it is missing.
///
/// Without a terminal to ask on, or when the offer is declined, the built-in
/// defaults are used.
pub fn load(config_path: &str) -> Result<ClientConfig> {
    let path = Path::new(config_path);

    if !path.exists() {
        ui::warning_message(&format!("Configuration file {} not found", path.display()));

        let should_create = std::io::stdin().is_terminal()
            && Confirm::with_theme(&ColorfulTheme::default())
                .with_prompt("Would you like to create a default configuration file?")
                .default(false)
                .interact()?;

        if should_create {
            write_default(path, false)?;
        } else {
            ui::info_message("Using built-in defaults");
        }
    }

    ClientConfig::load_or_default(path).with_context(|| "Failed to load configuration")
}

/// Write the default configuration file. Returns whether anything was written.
pub fn write_default(path: &Path, force: bool) -> Result<bool> {
    let written = ensure_config_file_exists(path, force)
        .with_context(|| format!("Failed to create {}", path.display()))?;
    if written {
        ui::success_message(&format!("Configuration written to {}", path.display()));
        ui::info_message(&format!(
            "Edit {} to point at another server or change the phone rule",
            path.display()
        ));
    }
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_default_then_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users-client.toml");

        assert!(write_default(&path, false).unwrap());
        assert!(!write_default(&path, false).unwrap());

        let config = load(path.to_str().unwrap()).unwrap();
        assert_eq!(config, ClientConfig::default());
    }

    #[test]
    fn test_invalid_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("users-client.toml");
        std::fs::write(&path, "[pagination]\npage_size = 0\n").unwrap();

        let err = load(path.to_str().unwrap()).unwrap_err();
        assert!(err.user_message().starts_with("Failed to load configuration"));
    }
}
