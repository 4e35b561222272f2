use crate::error::{DocfindError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

const CONFIG_FILENAME: &str = "config.json";

/// The fixed, versionless endpoint serving the raw doctor records.
pub const DEFAULT_ENDPOINT: &str =
    "https://srijandubey.github.io/campus-api-mock/SRM-C1-25.json";

const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Configuration for docfind, stored as config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DocfindConfig {
    /// Endpoint returning the raw doctor records as a JSON array
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Quiescence window for the search input, in milliseconds
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_debounce_ms() -> u64 {
    DEFAULT_DEBOUNCE_MS
}

impl Default for DocfindConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }
}

impl DocfindConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(DocfindError::Io)?;
        let config: DocfindConfig =
            serde_json::from_str(&content).map_err(DocfindError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(DocfindError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(DocfindError::Serialization)?;
        fs::write(config_path, content).map_err(DocfindError::Io)?;
        Ok(())
    }

    pub fn debounce_delay(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DocfindConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.debounce_ms, 300);
        assert_eq!(config.debounce_delay(), Duration::from_millis(300));
    }

    #[test]
    fn test_load_missing_config() {
        let temp_dir = tempfile::tempdir().unwrap();
        let config = DocfindConfig::load(temp_dir.path().join("nowhere")).unwrap();
        assert_eq!(config, DocfindConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempfile::tempdir().unwrap();

        let config = DocfindConfig {
            endpoint: "https://example.test/doctors.json".to_string(),
            debounce_ms: 150,
        };
        config.save(temp_dir.path()).unwrap();

        let loaded = DocfindConfig::load(temp_dir.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_keys_fall_back_to_defaults() {
        let parsed: DocfindConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(parsed, DocfindConfig::default());

        let parsed: DocfindConfig =
            serde_json::from_str(r#"{ "debounce_ms": 50 }"#).unwrap();
        assert_eq!(parsed.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(parsed.debounce_ms, 50);
    }

    #[test]
    fn test_serialization_roundtrip() {
        let config = DocfindConfig {
            endpoint: "http://localhost:9000/list.json".to_string(),
            debounce_ms: 25,
        };

        let json = serde_json::to_string(&config).unwrap();
        let parsed: DocfindConfig = serde_json::from_str(&json).unwrap();

        assert_eq!(config, parsed);
    }
}
