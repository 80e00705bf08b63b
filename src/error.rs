//! Error types for the payroll roster.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure the roster core can report. None of them are fatal:
//! the presentation layer decides whether to re-prompt, re-snapshot or
//! simply show the message.

use thiserror::Error;

/// The main error type for the payroll roster.
///
/// All operations in the crate return this error type, making it easy
/// to handle errors consistently in whatever layer drives the roster.
///
/// # Example
///
/// ```
/// use payroll_roster::error::EngineError;
///
/// let error = EngineError::NotFound {
///     id: "10042".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee not found: 10042");
/// assert_eq!(error.code(), "NOT_FOUND");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The employee source file was not found at the specified path.
    #[error("Employee source file not found: {path}")]
    SourceNotFound {
        /// The path that was not found.
        path: String,
    },

    /// The employee source file exists but could not be read.
    #[error("Failed to read employee source '{path}': {message}")]
    SourceReadError {
        /// The path of the unreadable file.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A row does not carry enough columns for the requested use.
    #[error("Malformed record ({context}): {columns} columns, at least {required} required")]
    MalformedRecord {
        /// Where the row came from (a source line or an employee id).
        context: String,
        /// The number of columns the row has.
        columns: usize,
        /// The number of columns needed.
        required: usize,
    },

    /// An employee id is empty or not an integer.
    #[error("Invalid employee id '{id}': must be a whole number")]
    InvalidIdFormat {
        /// The offending id, after trimming.
        id: String,
    },

    /// The same employee id appears more than once in a load.
    #[error("Duplicate employee id: {id}")]
    DuplicateId {
        /// The repeated id.
        id: String,
    },

    /// No employee with the given id exists in the store.
    #[error("Employee not found: {id}")]
    NotFound {
        /// The id that was looked up.
        id: String,
    },

    /// A position-based mutation referred to a row that does not exist.
    #[error("Position {index} is out of range for a roster of {len} employees")]
    IndexOutOfRange {
        /// The requested position.
        index: usize,
        /// The roster size at the time of the call.
        len: usize,
    },

    /// The hourly rate column could not be read as a non-negative decimal.
    #[error("Invalid hourly rate '{value}' for employee {employee_id}")]
    InvalidRate {
        /// The employee whose rate is invalid.
        employee_id: String,
        /// The raw rate text.
        value: String,
    },

    /// Hours worked were missing, not a whole number, or not positive.
    #[error("Invalid hours worked '{value}': must be a whole number greater than zero")]
    InvalidHours {
        /// The rejected input.
        value: String,
    },

    /// A collaborator request carried an unusable field.
    #[error("Invalid request field '{field}': {message}")]
    InvalidRequest {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Returns a stable code for programmatic handling by the caller.
    pub fn code(&self) -> &'static str {
        match self {
            EngineError::SourceNotFound { .. } => "SOURCE_NOT_FOUND",
            EngineError::SourceReadError { .. } => "SOURCE_READ_ERROR",
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                "CONFIG_ERROR"
            }
            EngineError::MalformedRecord { .. } => "MALFORMED_RECORD",
            EngineError::InvalidIdFormat { .. } => "INVALID_ID_FORMAT",
            EngineError::DuplicateId { .. } => "DUPLICATE_ID",
            EngineError::NotFound { .. } => "NOT_FOUND",
            EngineError::IndexOutOfRange { .. } => "INDEX_OUT_OF_RANGE",
            EngineError::InvalidRate { .. } => "INVALID_RATE",
            EngineError::InvalidHours { .. } => "INVALID_HOURS",
            EngineError::InvalidRequest { .. } => "VALIDATION_ERROR",
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_not_found_displays_path() {
        let error = EngineError::SourceNotFound {
            path: "employees.tsv".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Employee source file not found: employees.tsv"
        );
    }

    #[test]
    fn test_malformed_record_displays_context_and_counts() {
        let error = EngineError::MalformedRecord {
            context: "line 4".to_string(),
            columns: 5,
            required: 8,
        };
        assert_eq!(
            error.to_string(),
            "Malformed record (line 4): 5 columns, at least 8 required"
        );
    }

    #[test]
    fn test_invalid_id_format_displays_id() {
        let error = EngineError::InvalidIdFormat {
            id: "A-17".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid employee id 'A-17': must be a whole number"
        );
    }

    #[test]
    fn test_index_out_of_range_displays_index_and_len() {
        let error = EngineError::IndexOutOfRange { index: 7, len: 3 };
        assert_eq!(
            error.to_string(),
            "Position 7 is out of range for a roster of 3 employees"
        );
    }

    #[test]
    fn test_invalid_rate_displays_employee_and_value() {
        let error = EngineError::InvalidRate {
            employee_id: "10003".to_string(),
            value: "n/a".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid hourly rate 'n/a' for employee 10003"
        );
    }

    #[test]
    fn test_invalid_hours_displays_value() {
        let error = EngineError::InvalidHours {
            value: "0".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Invalid hours worked '0': must be a whole number greater than zero"
        );
    }

    #[test]
    fn test_codes_are_distinct_for_roster_failures() {
        let errors = [
            EngineError::DuplicateId { id: "1".into() },
            EngineError::NotFound { id: "1".into() },
            EngineError::IndexOutOfRange { index: 0, len: 0 },
            EngineError::InvalidRate {
                employee_id: "1".into(),
                value: "x".into(),
            },
            EngineError::InvalidHours { value: "0".into() },
        ];
        let codes: std::collections::HashSet<_> = errors.iter().map(|e| e.code()).collect();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_config_errors_share_a_code() {
        let missing = EngineError::ConfigNotFound {
            path: "roster.yaml".into(),
        };
        let broken = EngineError::ConfigParseError {
            path: "roster.yaml".into(),
            message: "bad indent".into(),
        };
        assert_eq!(missing.code(), broken.code());
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_not_found() -> EngineResult<()> {
            Err(EngineError::NotFound {
                id: "99".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_not_found()?;
            Ok(())
        }

        assert_eq!(
            propagates_error(),
            Err(EngineError::NotFound {
                id: "99".to_string()
            })
        );
    }
}
