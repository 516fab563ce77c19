use crate::storage::DEFAULT_FILE_PATH;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides `storage.file_path`.
pub const FILE_PATH_ENV: &str = "HBNB_FILE_PATH";

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub storage: StorageConfig,
    /// `tracing` filter directive used when `HBNB_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Snapshot file location. Relative paths resolve against the working directory.
    #[serde(default = "default_file_path")]
    pub file_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            storage: StorageConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            file_path: default_file_path(),
        }
    }
}

fn default_file_path() -> PathBuf {
    PathBuf::from(DEFAULT_FILE_PATH)
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Config {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file as YAML: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Config file (or defaults), then `HBNB_FILE_PATH`, then an explicit
    /// `--file` flag, each overriding the previous.
    pub fn resolve(config_path: Option<&Path>, file_override: Option<PathBuf>) -> Result<Self> {
        let mut config = match config_path {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok());
        if let Some(file_path) = file_override {
            config.storage.file_path = file_path;
        }
        config.validate()?;
        Ok(config)
    }

    /// Applies environment overrides read through `lookup`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(path) = lookup(FILE_PATH_ENV).filter(|p| !p.is_empty()) {
            self.storage.file_path = PathBuf::from(path);
        }
    }

    fn validate(&self) -> Result<()> {
        if self.storage.file_path.as_os_str().is_empty() {
            anyhow::bail!("storage.file_path must not be empty");
        }
        if self.storage.file_path.is_dir() {
            anyhow::bail!(
                "storage.file_path points at a directory: {}",
                self.storage.file_path.display()
            );
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
