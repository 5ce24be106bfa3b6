//! Configuration handling for the TUI

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::auth::SimulatedAuth;

/// User configuration for the TUI
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TuiConfig {
    /// Simulated sign-in delay in milliseconds
    pub login_delay_ms: Option<u64>,
    /// Simulated sign-up delay in milliseconds
    pub signup_delay_ms: Option<u64>,
    /// Upper bound on one authentication call in milliseconds
    pub auth_timeout_ms: Option<u64>,
    /// tracing filter directive, used when RUST_LOG is unset
    pub log_filter: Option<String>,
    /// Start at the login screen
    pub skip_splash: Option<bool>,
}

impl TuiConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("com", "flicksnow", "flicksnow-tui")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Directory for the log file
    pub fn log_dir() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.data_local_dir().to_path_buf())
    }

    /// Load configuration from the platform config directory
    pub fn load() -> Result<Self> {
        match Self::config_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    /// Load configuration from a specific file
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: TuiConfig = serde_json::from_str(&content)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn login_delay(&self) -> Duration {
        self.login_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(SimulatedAuth::DEFAULT_LOGIN_DELAY)
    }

    pub fn signup_delay(&self) -> Duration {
        self.signup_delay_ms
            .map(Duration::from_millis)
            .unwrap_or(SimulatedAuth::DEFAULT_SIGNUP_DELAY)
    }

    pub fn auth_timeout(&self) -> Duration {
        self.auth_timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(crate::auth::DEFAULT_AUTH_TIMEOUT)
    }

    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("flicksnow_tui=info")
    }

    pub fn skip_splash(&self) -> bool {
        self.skip_splash.unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TuiConfig::default();
        assert!(config.login_delay_ms.is_none());
        assert!(config.signup_delay_ms.is_none());
        assert!(config.auth_timeout_ms.is_none());
        assert!(config.log_filter.is_none());
        assert!(config.skip_splash.is_none());
    }

    #[test]
    fn test_defaults_resolve() {
        let config = TuiConfig::default();
        assert_eq!(config.login_delay(), Duration::from_millis(1000));
        assert_eq!(config.signup_delay(), Duration::from_millis(1200));
        assert_eq!(config.auth_timeout(), Duration::from_secs(10));
        assert_eq!(config.log_filter(), "flicksnow_tui=info");
        assert!(!config.skip_splash());
    }

    #[test]
    fn test_overrides_resolve() {
        let config = TuiConfig {
            login_delay_ms: Some(0),
            auth_timeout_ms: Some(250),
            log_filter: Some("flicksnow_tui=debug".to_string()),
            skip_splash: Some(true),
            ..Default::default()
        };
        assert_eq!(config.login_delay(), Duration::ZERO);
        assert_eq!(config.signup_delay(), Duration::from_millis(1200));
        assert_eq!(config.auth_timeout(), Duration::from_millis(250));
        assert_eq!(config.log_filter(), "flicksnow_tui=debug");
        assert!(config.skip_splash());
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: TuiConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.login_delay_ms.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"login_delay_ms": 50, "unknown_field": "value"}"#;
        let parsed: TuiConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.login_delay_ms, Some(50));
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!(
            "flicksnow-tui-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, r#"{"signup_delay_ms": 5, "skip_splash": true}"#).unwrap();
        let config = TuiConfig::load_from(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.signup_delay(), Duration::from_millis(5));
        assert!(config.skip_splash());
    }

    #[test]
    fn test_load_from_invalid_file_errors() {
        let path = std::env::temp_dir().join(format!(
            "flicksnow-tui-bad-config-{}.json",
            std::process::id()
        ));
        fs::write(&path, "not json").unwrap();
        let result = TuiConfig::load_from(&path);
        fs::remove_file(&path).ok();
        let err = result.unwrap_err();
        assert!(format!("{err:#}").contains("parsing config"));
    }

    #[test]
    fn test_platform_paths_do_not_panic() {
        let _ = TuiConfig::config_path();
        let _ = TuiConfig::log_dir();
    }
}
