//! Configuration types for the payroll roster.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `roster.yaml`. The payroll formula and the source
//! column layout are fixed and have no configuration.

use serde::Deserialize;

use crate::models::StatementLabels;

/// Where the employee source lives.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SourceConfig {
    /// Path of the tab-delimited employee file.
    pub path: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            path: "employees.tsv".to_string(),
        }
    }
}

/// How results are presented.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DisplayConfig {
    /// Prefix written before every amount in a pay statement.
    pub currency_symbol: String,
    /// Names of the contribution lines in a pay statement.
    #[serde(default)]
    pub labels: StatementLabels,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency_symbol: "P".to_string(),
            labels: StatementLabels::default(),
        }
    }
}

/// The complete roster configuration.
///
/// Both sections are optional in the file and fall back to their defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RosterConfig {
    /// Employee source settings.
    #[serde(default)]
    pub source: SourceConfig,
    /// Presentation settings.
    #[serde(default)]
    pub display: DisplayConfig,
}
