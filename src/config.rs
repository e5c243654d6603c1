use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Runtime settings, read from `~/.tubetui/config.json` when present.
///
/// The file is only ever read. Settings changed inside the app are not written
/// back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Event polling timeout, also the tick period
    pub tick_rate_ms: u64,
    /// How long the splash screen stays up
    pub splash_duration_ms: u64,
    /// Time between simulated upload progress steps
    pub upload_step_ms: u64,
    /// Default log filter when RUST_LOG is unset
    pub log_level: String,
    /// Alternate catalog JSON to load instead of the built-in one
    pub catalog_path: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            tick_rate_ms: 100,
            splash_duration_ms: 1200,
            upload_step_ms: 200,
            log_level: "info".to_string(),
            catalog_path: None,
        }
    }
}

impl Config {
    pub fn config_dir() -> Option<PathBuf> {
        let home = env::var("HOME").ok()?;
        Some(PathBuf::from(home).join(".tubetui"))
    }

    fn config_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("config.json"))
    }

    pub fn log_path() -> Option<PathBuf> {
        Self::config_dir().map(|dir| dir.join("tubetui.log"))
    }

    pub fn load() -> Option<Config> {
        let config_path = Self::config_path()?;
        if !config_path.exists() {
            return None;
        }

        let contents = fs::read_to_string(&config_path).ok()?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Option<Config> {
        serde_json::from_str(contents).ok()
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(10))
    }

    pub fn splash_duration(&self) -> Duration {
        Duration::from_millis(self.splash_duration_ms)
    }

    pub fn upload_step(&self) -> Duration {
        Duration::from_millis(self.upload_step_ms.max(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_uses_defaults() {
        let config = Config::from_json(r#"{"tick_rate_ms": 50}"#).unwrap();
        assert_eq!(config.tick_rate_ms, 50);
        assert_eq!(config.upload_step_ms, 200);
        assert_eq!(config.log_level, "info");
        assert!(config.catalog_path.is_none());
    }

    #[test]
    fn test_invalid_config_is_ignored() {
        assert!(Config::from_json("not json").is_none());
    }

    #[test]
    fn test_durations_are_clamped() {
        let config = Config {
            tick_rate_ms: 0,
            upload_step_ms: 0,
            ..Config::default()
        };
        assert_eq!(config.tick_rate(), Duration::from_millis(10));
        assert_eq!(config.upload_step(), Duration::from_millis(1));
    }
}
