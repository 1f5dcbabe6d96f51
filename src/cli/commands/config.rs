//! Config command implementation.

use crate::cli::{ConfigAction, Output};
use crate::config::Settings;
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Run the config command against `config_path` (or the default location).
///
/// Command-line overrides never reach this command, so nothing written here
/// comes from `--service-url` or the environment.
pub fn run_config(action: &ConfigAction, config_path: Option<PathBuf>) -> Result<()> {
    let config_path = config_path.unwrap_or_else(Settings::default_config_path);

    match action {
        ConfigAction::Show => {
            let settings = Settings::load_from(Some(&config_path))
                .with_context(|| format!("Failed to load {}", config_path.display()))?;
            println!("{}", toml::to_string_pretty(&settings)?);
        }

        ConfigAction::Edit => {
            if create_default_config(&config_path)? {
                Output::info(&format!("Created default config at {}", config_path.display()));
            }
            open_in_editor(&config_path);
        }

        ConfigAction::Path => {
            println!("{}", config_path.display());
        }
    }

    Ok(())
}

/// Write the built-in defaults to `path` unless a file is already there.
///
/// An existing file is left alone even if it does not parse, so it can be
/// repaired in the editor. Returns whether a file was created.
fn create_default_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    Settings::default().save_to(&path.to_path_buf())?;
    Ok(true)
}

fn open_in_editor(path: &Path) {
    let editor = std::env::var("EDITOR").unwrap_or_else(|_| "vim".to_string());
    Output::info(&format!("Opening {} in {}...", path.display(), editor));

    match std::process::Command::new(&editor).arg(path).status() {
        Ok(status) if status.success() => Output::success("Config saved."),
        Ok(_) => Output::warning("Editor exited with non-zero status."),
        Err(e) => {
            Output::error(&format!("Failed to open editor: {}", e));
            Output::info(&format!("Config file is at: {}", path.display()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_config_holds_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tnav").join("config.toml");

        assert!(create_default_config(&path).unwrap());

        let written = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(written.service.url, "http://localhost:8000");
    }

    #[test]
    fn test_broken_config_is_kept_for_editing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[service\nurl = ").unwrap();

        assert!(!create_default_config(&path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[service\nurl = ");
    }
}
