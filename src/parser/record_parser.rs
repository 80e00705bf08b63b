//! Tab-delimited employee source parsing.

use tracing::{debug, info, warn};

use crate::models::{Diagnostic, EmployeeRecord, LoadResult};

/// Field delimiter of the employee source.
pub const FIELD_DELIMITER: char = '\t';

/// Parses raw source lines into employee records.
///
/// The first line is the header and is always skipped. Every other line is
/// split on [`FIELD_DELIMITER`] and turned into an [`EmployeeRecord`]; rows
/// that are too short or carry a non-numeric id are skipped and reported as
/// a [`Diagnostic`]. Parsing never stops early.
///
/// Records are returned in source order; sorting is the store's job.
///
/// # Example
///
/// ```
/// use payroll_roster::parser::parse_lines;
///
/// let lines = [
///     "Employee #\tLast Name\tFirst Name\tBirthday\tAddress\tPhone\tSSS\tPhilHealth",
///     "2\tLim\tAntonio\t1988-06-19\tManila\t555\t44-01\t82-02",
///     "broken\trow",
/// ];
/// let result = parse_lines(lines);
///
/// assert_eq!(result.records.len(), 1);
/// assert_eq!(result.diagnostics.len(), 1);
/// assert_eq!(result.diagnostics[0].line_number, 3);
/// ```
pub fn parse_lines<I, S>(lines: I) -> LoadResult
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut result = LoadResult::default();

    // Line 1 is the header.
    for (index, line) in lines.into_iter().enumerate().skip(1) {
        let line_number = index + 1;
        let line = line.as_ref().trim_end_matches('\r');

        let columns: Vec<String> = line.split(FIELD_DELIMITER).map(str::to_string).collect();
        let column_count = columns.len();

        match EmployeeRecord::from_columns(columns, &format!("line {}", line_number)) {
            Ok(record) => {
                debug!(line_number, id = %record.id, columns = column_count, "Parsed employee row");
                result.records.push(record);
            }
            Err(error) => {
                warn!(
                    line_number,
                    columns = column_count,
                    error = %error,
                    "Skipping employee row"
                );
                result.diagnostics.push(Diagnostic {
                    line_number,
                    line: line.to_string(),
                    error,
                });
            }
        }
    }

    info!(
        records = result.records.len(),
        skipped = result.diagnostics.len(),
        "Parsed employee source"
    );
    result
}

/// Parses a whole source document. See [`parse_lines`].
pub fn parse_str(source: &str) -> LoadResult {
    parse_lines(source.lines())
}
