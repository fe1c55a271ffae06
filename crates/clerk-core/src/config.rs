use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{ClerkError, Result};

/// Top-level configuration for the Clerk application.
///
/// Loaded from `~/.clerk/config.toml` by default. Each section corresponds
/// to one subsystem.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClerkConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub chat: ChatConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

impl ClerkConfig {
    /// Load configuration from a TOML file.
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: ClerkConfig = toml::from_str(&content)?;
        info!("Configuration loaded from {}", path.display());
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist or cannot be parsed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!(
                    "Failed to load config from {}: {}. Using defaults.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Save the current configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self).map_err(|e| ClerkError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        info!("Configuration saved to {}", path.display());
        Ok(())
    }
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Data directory for the session database.
    pub data_dir: String,
    /// Log level: trace, debug, info, warn, error.
    pub log_level: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            data_dir: "~/.clerk".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Conversational engine settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Whether the chat assistant is enabled at all.
    pub enabled: bool,
    /// Maximum accepted message length in characters.
    pub max_message_length: usize,
    /// How many recent messages a session replay returns.
    pub history_limit: usize,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_message_length: 2000,
            history_limit: 50,
        }
    }
}

/// Catalog lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Hard cap on rows returned by a single lookup.
    pub max_results: usize,
    /// How many category names to offer when a search comes up empty.
    pub max_category_suggestions: usize,
    /// TTL for cached search results, in seconds.
    pub cache_ttl_secs: u64,
    /// Retry attempts for a failing lookup.
    pub retry_attempts: u32,
    /// Base delay for exponential backoff between retries.
    pub retry_base_delay_ms: u64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            max_results: 10,
            max_category_suggestions: 5,
            cache_ttl_secs: 300,
            retry_attempts: 3,
            retry_base_delay_ms: 100,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClerkConfig::default();
        assert!(config.chat.enabled);
        assert_eq!(config.chat.max_message_length, 2000);
        assert_eq!(config.catalog.max_results, 10);
        assert_eq!(config.catalog.max_category_suggestions, 5);
    }

    #[test]
    fn test_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = ClerkConfig::default();
        config.chat.max_message_length = 512;
        config.catalog.cache_ttl_secs = 60;
        config.save(&path).unwrap();

        let loaded = ClerkConfig::load(&path).unwrap();
        assert_eq!(loaded.chat.max_message_length, 512);
        assert_eq!(loaded.catalog.cache_ttl_secs, 60);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        assert!(ClerkConfig::load(&path).is_err());
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let config = ClerkConfig::load_or_default(&path);
        assert_eq!(config.catalog.max_results, 10);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[chat]\nenabled = false\n").unwrap();

        let config = ClerkConfig::load(&path).unwrap();
        assert!(!config.chat.enabled);
        // Untouched sections keep their defaults.
        assert_eq!(config.catalog.max_results, 10);
        assert_eq!(config.general.log_level, "info");
    }
}
