//! Load result models.
//!
//! A load never aborts on a bad row. Rows that cannot become records are
//! reported as [`Diagnostic`]s next to the records that were accepted.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use super::EmployeeRecord;
use crate::error::EngineError;

/// A source row that was skipped during parsing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    /// One-based line number in the source, header included.
    pub line_number: usize,
    /// The raw line as read.
    pub line: String,
    /// Why the row was skipped.
    #[serde(serialize_with = "serialize_error")]
    pub error: EngineError,
}

/// The outcome of parsing or loading a source.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LoadResult {
    /// Records accepted, in store order once loaded.
    pub records: Vec<EmployeeRecord>,
    /// One entry per skipped row.
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadResult {
    /// Returns true if every row became a record.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

fn serialize_error<S: Serializer>(error: &EngineError, serializer: S) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct("EngineError", 2)?;
    state.serialize_field("code", error.code())?;
    state.serialize_field("message", &error.to_string())?;
    state.end()
}
