//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the roster
//! configuration from a YAML file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{EngineError, EngineResult};

use crate::models::StatementLabels;

use super::types::RosterConfig;

/// Name of the configuration file inside a configuration directory.
pub const CONFIG_FILE_NAME: &str = "roster.yaml";

/// Loads and provides access to the roster configuration.
///
/// # Directory Structure
///
/// ```text
/// config/
/// └── roster.yaml   # source path and display settings
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_roster::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config")?;
/// println!("Employee source: {}", loader.config().source.path);
/// # Ok::<(), payroll_roster::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: RosterConfig,
    base_dir: PathBuf,
}

impl ConfigLoader {
    /// Loads configuration from `roster.yaml` in the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `roster.yaml` is missing (`ConfigNotFound`)
    /// - the file is not valid YAML for [`RosterConfig`] (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<RosterConfig>(&path.join(CONFIG_FILE_NAME))?;

        Ok(Self {
            config,
            base_dir: path.to_path_buf(),
        })
    }

    /// Wraps an already-built configuration. Relative paths resolve against
    /// the working directory.
    pub fn from_config(config: RosterConfig) -> Self {
        Self {
            config,
            base_dir: PathBuf::new(),
        }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &RosterConfig {
        &self.config
    }

    /// Returns the employee source path.
    ///
    /// A relative `source.path` is resolved against the directory the
    /// configuration was loaded from.
    pub fn source_path(&self) -> PathBuf {
        self.base_dir.join(&self.config.source.path)
    }

    /// Returns the currency prefix for pay statements.
    pub fn currency_symbol(&self) -> &str {
        &self.config.display.currency_symbol
    }

    /// Returns the contribution line labels for pay statements.
    pub fn statement_labels(&self) -> &StatementLabels {
        &self.config.display.labels
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::from_config(RosterConfig::default())
    }
}
