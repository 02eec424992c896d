//! Data directory management.

use std::path::PathBuf;

use config::{Config, File};

use crate::config::GovcalConfig;
use crate::error::{CalendarError, CalendarResult};
use crate::repository::Repository;

/// The configured root holding the per-topic JSON documents.
#[derive(Clone)]
pub struct DataDir {
    config: GovcalConfig,
}

impl DataDir {
    pub fn load() -> CalendarResult<Self> {
        let config_path = GovcalConfig::config_path()?;

        if !config_path.exists() {
            GovcalConfig::create_default_config(&config_path)?;
        }

        let config: GovcalConfig = Config::builder()
            .add_source(File::from(config_path).required(false))
            .build()
            .map_err(|e| CalendarError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| CalendarError::Config(e.to_string()))?;

        Ok(DataDir { config })
    }

    /// A data dir rooted at an explicit path, bypassing the config
    /// file.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        DataDir {
            config: GovcalConfig {
                data_dir: path.into(),
                default_division: None,
            },
        }
    }

    pub fn data_path(&self) -> PathBuf {
        let full_path_str =
            shellexpand::tilde(&self.config.data_dir.to_string_lossy()).into_owned();

        PathBuf::from(full_path_str)
    }

    pub fn default_division(&self) -> Option<&str> {
        self.config.default_division.as_deref()
    }

    /// Persist a new default division to the config file.
    pub fn set_default_division(&mut self, division: &str) -> CalendarResult<()> {
        self.config.default_division = Some(division.to_string());
        self.config.save()
    }

    /// Topic slugs discovered by scanning the data dir for `*.json`
    /// documents, sorted.
    pub fn slugs(&self) -> Vec<String> {
        let Ok(entries) = std::fs::read_dir(self.data_path()) else {
            return Vec::new();
        };

        let mut slugs: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.extension().is_some_and(|e| e == "json"))
            .filter_map(|path| {
                path.file_stem()
                    .and_then(|n| n.to_str())
                    .map(str::to_string)
            })
            .collect();

        slugs.sort();
        slugs
    }

    pub fn repository(&self, name: &str) -> CalendarResult<Repository> {
        Repository::load(self.data_path(), name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slugs_lists_json_documents_sorted() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bank-holidays.json"), "{}").unwrap();
        std::fs::write(dir.path().join("american-holidays.json"), "{}").unwrap();
        std::fs::write(dir.path().join("README.md"), "not a topic").unwrap();

        let data_dir = DataDir::with_path(dir.path());

        assert_eq!(
            data_dir.slugs(),
            vec!["american-holidays", "bank-holidays"]
        );
    }

    #[test]
    fn slugs_of_missing_dir_is_empty() {
        let data_dir = DataDir::with_path("/nonexistent/govcal-data");

        assert!(data_dir.slugs().is_empty());
    }
}
