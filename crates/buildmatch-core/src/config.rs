//! App Configuration
//!
//! Optional `buildmatch.json` in the app config dir. Missing file or
//! missing keys fall back to defaults.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

pub const CONFIG_FILE_NAME: &str = "buildmatch.json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Simulated latency before submitted quote requests become tickets
    pub submit_delay_ms: u64,
    pub email_change_cooldown_days: i64,
    /// SQLite file name inside the app data dir
    pub database_file: String,
    pub min_password_len: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            email_change_cooldown_days: 30,
            database_file: "buildmatch.db".to_string(),
            min_password_len: 6,
        }
    }
}

impl AppConfig {
    /// Read `buildmatch.json` from `dir`, or defaults if it does not exist
    pub fn load(dir: &Path) -> DomainResult<Self> {
        let path = dir.join(CONFIG_FILE_NAME);
        if !path.exists() {
            log::info!("no {} in {}, using defaults", CONFIG_FILE_NAME, dir.display());
            return Ok(Self::default());
        }

        let raw = std::fs::read_to_string(&path)
            .map_err(|e| DomainError::Internal(format!("Failed to read {}: {}", path.display(), e)))?;
        let config: AppConfig = serde_json::from_str(&raw)
            .map_err(|e| DomainError::InvalidInput(format!("Invalid {}: {}", CONFIG_FILE_NAME, e)))?;
        log::info!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.submit_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_partial_file_overrides_some_keys() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join(CONFIG_FILE_NAME),
            r#"{ "submit_delay_ms": 0, "database_file": "test.db" }"#,
        )
        .unwrap();

        let config = AppConfig::load(dir.path()).unwrap();
        assert_eq!(config.submit_delay_ms, 0);
        assert_eq!(config.database_file, "test.db");
        assert_eq!(config.email_change_cooldown_days, 30);
        assert_eq!(config.min_password_len, 6);
    }

    #[test]
    fn test_malformed_file_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE_NAME), "{ not json").unwrap();
        assert!(matches!(AppConfig::load(dir.path()), Err(DomainError::InvalidInput(_))));
    }
}
