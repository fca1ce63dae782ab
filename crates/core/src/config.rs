//! Application configuration
//!
//! Settings are read from a TOML file. The file is located through the
//! `FLEET_CONFIG` environment variable, falling back to:
//! - Linux/macOS: ~/.config/fleet-dashboard/config.toml
//! - Windows: %USERPROFILE%/.config/fleet-dashboard/config.toml
//!
//! A missing file yields the defaults. `FLEET_STORE` and `FLEET_UID`
//! override the store path and the identity uid after the file is read.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{FleetError, FleetResult};
use crate::types::ProviderIdentity;

/// Directory name under `~/.config`
pub const CONFIG_DIR_NAME: &str = "fleet-dashboard";

/// Environment variable naming an explicit config file
pub const CONFIG_PATH_ENV: &str = "FLEET_CONFIG";

/// Environment variable overriding the store path
pub const STORE_PATH_ENV: &str = "FLEET_STORE";

/// Environment variable overriding the identity uid
pub const UID_ENV: &str = "FLEET_UID";

/// Desktop window geometry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 820.0,
        }
    }
}

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default tracing filter when `RUST_LOG` is unset
    pub log_level: String,
    /// JSON store location; a leading `~` expands to the home directory
    pub store_path: String,
    /// How long a feedback banner stays visible
    pub feedback_duration_ms: u64,
    /// Viewports narrower than this use the bottom navigation
    pub compact_breakpoint_px: f64,
    /// The signed-in user
    pub identity: ProviderIdentity,
    pub window: WindowConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            store_path: format!("~/.config/{}/store.json", CONFIG_DIR_NAME),
            feedback_duration_ms: 3000,
            compact_breakpoint_px: 900.0,
            identity: ProviderIdentity::default(),
            window: WindowConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the standard location and apply env overrides
    pub fn load() -> FleetResult<Self> {
        let path = std::env::var(CONFIG_PATH_ENV)
            .ok()
            .map(PathBuf::from)
            .or_else(default_config_path);

        let mut config = match path {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load configuration from a specific file; a missing file yields defaults
    pub fn load_from(path: &Path) -> FleetResult<Self> {
        if !path.exists() {
            tracing::debug!("No config file at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| FleetError::FileRead {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let config = Self::from_toml(&contents)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Parse configuration from TOML text
    pub fn from_toml(contents: &str) -> FleetResult<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| FleetError::InvalidConfig(e.to_string()))?;
        config.check()?;
        Ok(config)
    }

    /// Apply environment-style overrides through a lookup function
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(store) = lookup(STORE_PATH_ENV).filter(|v| !v.trim().is_empty()) {
            self.store_path = store;
        }
        if let Some(uid) = lookup(UID_ENV).filter(|v| !v.trim().is_empty()) {
            self.identity.uid = uid;
        }
    }

    /// Store path with `~` expanded
    pub fn resolved_store_path(&self) -> PathBuf {
        expand_home(&self.store_path)
    }

    fn check(&self) -> FleetResult<()> {
        if self.identity.uid.trim().is_empty() {
            return Err(FleetError::InvalidConfig(
                "identity.uid must not be empty".to_string(),
            ));
        }
        if self.compact_breakpoint_px <= 0.0 {
            return Err(FleetError::InvalidConfig(
                "compact_breakpoint_px must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

fn home_dir() -> Option<PathBuf> {
    std::env::var("HOME")
        .or_else(|_| std::env::var("USERPROFILE"))
        .ok()
        .map(PathBuf::from)
}

/// Default location of the config file
pub fn default_config_path() -> Option<PathBuf> {
    home_dir().map(|home| home.join(".config").join(CONFIG_DIR_NAME).join("config.toml"))
}

/// Expand a leading `~` to the home directory
pub fn expand_home(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match home_dir() {
            Some(home) => home.join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.feedback_duration_ms, 3000);
        assert_eq!(config.compact_breakpoint_px, 900.0);
        assert_eq!(config.identity.uid, "local-user");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            feedback_duration_ms = 5000

            [identity]
            uid = "abc123"
            display_name = "Ana Souza"
            "#,
        )
        .unwrap();

        assert_eq!(config.feedback_duration_ms, 5000);
        assert_eq!(config.identity.uid, "abc123");
        assert_eq!(config.identity.display_name, "Ana Souza");
        assert_eq!(config.identity.email, "local@example.com");
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn test_malformed_toml_is_invalid_config() {
        let err = AppConfig::from_toml("feedback_duration_ms = \"soon\"").unwrap_err();
        assert!(matches!(err, FleetError::InvalidConfig(_)));
    }

    #[test]
    fn test_empty_uid_rejected() {
        let err = AppConfig::from_toml("[identity]\nuid = \"\"").unwrap_err();
        assert!(matches!(err, FleetError::InvalidConfig(_)));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "store_path = \"/tmp/fleet.json\"\n").unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.resolved_store_path(), PathBuf::from("/tmp/fleet.json"));
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config.apply_overrides(|key| match key {
            STORE_PATH_ENV => Some("/data/store.json".to_string()),
            UID_ENV => Some("   ".to_string()),
            _ => None,
        });
        assert_eq!(config.store_path, "/data/store.json");
        assert_eq!(config.identity.uid, "local-user");
    }

    #[test]
    fn test_expand_home_leaves_absolute_paths() {
        assert_eq!(expand_home("/var/fleet.json"), PathBuf::from("/var/fleet.json"));
        if let Some(home) = home_dir() {
            assert_eq!(expand_home("~/fleet.json"), home.join("fleet.json"));
        }
    }
}
