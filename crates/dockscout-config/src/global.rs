//! Global configuration for dockscout
//!
//! Located at `~/.config/dockscout/config.toml`

use crate::{ConfigError, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Global dockscout configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub defaults: DefaultsConfig,
    pub containers: ContainersConfig,
}

/// Which runtime to invoke and where the daemon lives
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DefaultsConfig {
    /// Container runtime CLI to shell out to ("docker" or "podman")
    pub runtime: String,
    /// Remote daemon address, passed as `-H <host>`. None targets the
    /// local daemon.
    pub host: Option<String>,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            runtime: "docker".to_string(),
            host: None,
        }
    }
}

/// Container view settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContainersConfig {
    /// Seconds between automatic inventory re-polls. 0 disables
    /// auto-refresh.
    pub auto_refresh_interval: u64,
    /// Options appended to `logs <name>`
    pub logs_options: String,
    /// Command appended to `exec <name>` by the exec action. When unset a
    /// bare exec is issued.
    pub execution_command: Option<String>,
}

impl Default for ContainersConfig {
    fn default() -> Self {
        Self {
            auto_refresh_interval: 10,
            logs_options: "--tail 50 -f".to_string(),
            execution_command: None,
        }
    }
}

impl GlobalConfig {
    /// Load global configuration from the default path
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load global configuration from a specific path
    pub fn load_from(path: &PathBuf) -> Result<Self> {
        if !path.exists() {
            tracing::debug!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.clone(),
            source: e,
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| ConfigError::TomlParseError {
            path: path.clone(),
            source: e,
        })?;

        tracing::debug!(
            "Loaded config from {:?}: runtime={}, refresh={}s",
            path,
            config.defaults.runtime,
            config.containers.auto_refresh_interval
        );

        Ok(config)
    }

    /// Save configuration to the default path
    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        self.save_to(&path)
    }

    /// Save configuration to a specific path
    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
                path: path.clone(),
                source: e,
            })?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| ConfigError::Invalid(e.to_string()))?;

        std::fs::write(path, content).map_err(|e| ConfigError::WriteError {
            path: path.clone(),
            source: e,
        })
    }

    /// Get the default config file path
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "dockscout").ok_or(ConfigError::NoConfigDir)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Check if the config file exists on disk
    pub fn config_exists() -> bool {
        Self::config_path().map(|p| p.exists()).unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GlobalConfig::default();
        assert_eq!(config.defaults.runtime, "docker");
        assert!(config.defaults.host.is_none());
        assert_eq!(config.containers.auto_refresh_interval, 10);
        assert_eq!(config.containers.logs_options, "--tail 50 -f");
        assert!(config.containers.execution_command.is_none());
    }

    #[test]
    fn test_parse_config() {
        let toml = r#"
[defaults]
runtime = "podman"
host = "192.168.56.106"

[containers]
auto_refresh_interval = 30
logs_options = "--since 10m"
execution_command = "ps aux"
"#;

        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.defaults.runtime, "podman");
        assert_eq!(config.defaults.host.as_deref(), Some("192.168.56.106"));
        assert_eq!(config.containers.auto_refresh_interval, 30);
        assert_eq!(config.containers.logs_options, "--since 10m");
        assert_eq!(config.containers.execution_command.as_deref(), Some("ps aux"));
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let toml = r#"
[containers]
auto_refresh_interval = 0
"#;
        let config: GlobalConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.defaults.runtime, "docker");
        assert_eq!(config.containers.auto_refresh_interval, 0);
        assert_eq!(config.containers.logs_options, "--tail 50 -f");
    }

    #[test]
    fn test_load_missing_file_returns_defaults() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("nope.toml");
        let config = GlobalConfig::load_from(&path).unwrap();
        assert_eq!(config.defaults.runtime, "docker");
    }

    #[test]
    fn test_save_and_reload() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("sub").join("config.toml");

        let mut config = GlobalConfig::default();
        config.defaults.host = Some("10.0.0.5".to_string());
        config.containers.auto_refresh_interval = 5;
        config.save_to(&path).unwrap();

        let reloaded = GlobalConfig::load_from(&path).unwrap();
        assert_eq!(reloaded.defaults.host.as_deref(), Some("10.0.0.5"));
        assert_eq!(reloaded.containers.auto_refresh_interval, 5);
    }
}
