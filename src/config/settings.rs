//! Configuration settings for tnav.

use crate::method::Method;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// Root configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub service: ServiceSettings,
    pub session: SessionSettings,
}

/// Answering service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceSettings {
    /// Base URL of the answering service; requests go to `<url>/answer`.
    pub url: String,
    /// Request timeout in seconds. Unset means the transport default.
    pub timeout_secs: Option<u64>,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            url: "http://localhost:8000".to_string(),
            timeout_secs: None,
        }
    }
}

impl ServiceSettings {
    /// Configured timeout, if any.
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}

/// Defaults for a new session.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionSettings {
    /// Method selected when a session starts.
    pub default_method: Method,
}

impl Settings {
    /// Load settings from a specific path, or default location if None.
    pub fn load_from(path: Option<&PathBuf>) -> crate::error::Result<Self> {
        let config_path = match path {
            Some(p) => p.clone(),
            None => Self::default_config_path(),
        };

        if config_path.exists() {
            let content = std::fs::read_to_string(&config_path)?;
            let settings: Settings = toml::from_str(&content)?;
            Ok(settings)
        } else {
            Ok(Settings::default())
        }
    }

    /// Point the service at `url` when one was given on the command line.
    pub fn with_service_url(mut self, url: Option<&str>) -> Self {
        if let Some(url) = url {
            self.service.url = url.to_string();
        }
        self
    }

    /// Save settings to a specific path.
    pub fn save_to(&self, path: &PathBuf) -> crate::error::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)
            .map_err(|e| crate::error::NavigatorError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Get the default configuration file path.
    pub fn default_config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tnav")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(Some(&dir.path().join("config.toml"))).unwrap();

        assert_eq!(settings.service.url, "http://localhost:8000");
        assert!(settings.service.timeout().is_none());
        assert_eq!(settings.session.default_method, Method::Llm2);
    }

    #[test]
    fn test_partial_file() {
        let settings: Settings = toml::from_str(
            r#"
            [service]
            timeout_secs = 30

            [session]
            default_method = "tfidf"
            "#,
        )
        .unwrap();

        assert_eq!(settings.service.url, "http://localhost:8000");
        assert_eq!(settings.service.timeout(), Some(Duration::from_secs(30)));
        assert_eq!(settings.session.default_method, Method::Tfidf);
    }

    #[test]
    fn test_service_url_override() {
        let settings = Settings::default().with_service_url(Some("http://answers.internal:9000"));
        assert_eq!(settings.service.url, "http://answers.internal:9000");

        let settings = Settings::default().with_service_url(None);
        assert_eq!(settings.service.url, "http://localhost:8000");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut settings = Settings::default();
        settings.service.url = "https://answers.example.com".to_string();
        settings.save_to(&path).unwrap();

        let reloaded = Settings::load_from(Some(&path)).unwrap();
        assert_eq!(reloaded.service.url, "https://answers.example.com");
    }
}
