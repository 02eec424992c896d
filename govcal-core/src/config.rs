//! Global govcal configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{CalendarError, CalendarResult};

static DEFAULT_DATA_DIR: &str = "~/.local/share/govcal";

fn default_data_dir() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_DIR)
}

fn is_default_data_dir(p: &PathBuf) -> bool {
    *p == default_data_dir()
}

/// Global configuration at ~/.config/govcal/config.toml
#[derive(Serialize, Deserialize, Clone)]
pub struct GovcalConfig {
    /// Where the per-topic JSON documents live.
    #[serde(default = "default_data_dir", skip_serializing_if = "is_default_data_dir")]
    pub data_dir: PathBuf,

    /// Division to fall back to when a command is run without one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_division: Option<String>,
}

impl Default for GovcalConfig {
    fn default() -> Self {
        GovcalConfig {
            data_dir: default_data_dir(),
            default_division: None,
        }
    }
}

impl GovcalConfig {
    pub fn config_path() -> CalendarResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| CalendarError::Config("Could not determine config directory".into()))?
            .join("govcal");

        Ok(config_dir.join("config.toml"))
    }

    /// Save the current config to ~/.config/govcal/config.toml
    pub fn save(&self) -> CalendarResult<()> {
        let config_path = Self::config_path()?;

        let content =
            toml::to_string_pretty(self).map_err(|e| CalendarError::Config(e.to_string()))?;

        std::fs::write(&config_path, content)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &std::path::Path) -> CalendarResult<()> {
        let contents = format!(
            "\
# govcal configuration

# Where the topic documents live:
# data_dir = \"{}\"

# Division used when a command is run without --division:
# default_division = \"england-and-wales\"
",
            DEFAULT_DATA_DIR
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                CalendarError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| CalendarError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialized_config_keeps_only_non_default_values() {
        let config = GovcalConfig {
            data_dir: default_data_dir(),
            default_division: Some("scotland".to_string()),
        };

        let content = toml::to_string_pretty(&config).unwrap();

        assert_eq!(content, "default_division = \"scotland\"\n");
    }

    #[test]
    fn empty_config_file_falls_back_to_defaults() {
        let config: GovcalConfig = toml::from_str("").unwrap();

        assert_eq!(config.data_dir, default_data_dir());
        assert!(config.default_division.is_none());
    }
}
