//! Employee source parsing.
//!
//! This module turns tab-delimited source text into [`EmployeeRecord`]s,
//! collecting a diagnostic for every row it has to skip.
//!
//! [`EmployeeRecord`]: crate::models::EmployeeRecord

mod record_parser;

pub use record_parser::{FIELD_DELIMITER, parse_lines, parse_str};
