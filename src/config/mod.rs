//! Configuration loading and management for the payroll roster.
//!
//! This module provides functionality to load the roster configuration from
//! YAML: where the employee source lives and how pay statements are shown.
//!
//! # Example
//!
//! ```no_run
//! use payroll_roster::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config").unwrap();
//! println!("Reading employees from {}", config.source_path().display());
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{DisplayConfig, RosterConfig, SourceConfig};
