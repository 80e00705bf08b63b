//! The collaborator-facing roster service.
//!
//! [`RosterService`] is what a presentation layer talks to. It owns the
//! [`EmployeeStore`] and the configuration, and wires the parser, the store
//! and the payroll engine together behind one small set of operations.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use chrono::Month;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::compute_payroll;
use crate::config::ConfigLoader;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    DisplayRow, EditableFields, EmployeeRecord, LoadResult, PayrollBreakdown, PayrollStatement,
};
use crate::parser::parse_lines;
use crate::store::EmployeeStore;

use super::request::PayrollRequest;

/// The roster and everything needed to serve it.
///
/// Constructed once by the application and passed by reference to whatever
/// handles user actions. Every operation runs to completion before returning.
///
/// # Example
///
/// ```
/// use chrono::Month;
/// use payroll_roster::config::ConfigLoader;
/// use payroll_roster::service::RosterService;
///
/// let mut rate_row = vec!["-"; 19];
/// rate_row[0] = "3";
/// rate_row[18] = "100.00";
/// let source = format!("header\n{}", rate_row.join("\t"));
///
/// let mut service = RosterService::new(ConfigLoader::default());
/// service.load_from_source(source.lines()).unwrap();
///
/// let breakdown = service.compute_payroll("3", Month::January, 160).unwrap();
/// assert_eq!(breakdown.net_pay.to_string(), "14400.00");
/// ```
#[derive(Debug, Clone)]
pub struct RosterService {
    config: ConfigLoader,
    store: EmployeeStore,
}

impl RosterService {
    /// Creates a service with an empty roster.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config,
            store: EmployeeStore::new(),
        }
    }

    /// Returns the configuration.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// Returns the underlying store for read access.
    pub fn store(&self) -> &EmployeeStore {
        &self.store
    }

    /// Parses `lines` (header first) and replaces the roster with the result.
    ///
    /// Bad rows are reported in the returned diagnostics and do not stop
    /// the load. Duplicate ids reject the whole load and leave the current
    /// roster in place. The returned records are in store order.
    pub fn load_from_source<I, S>(&mut self, lines: I) -> EngineResult<LoadResult>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let correlation_id = Uuid::new_v4();
        let parsed = parse_lines(lines);

        if let Err(err) = self.store.load(parsed.records) {
            warn!(correlation_id = %correlation_id, error = %err, "Roster load rejected");
            return Err(err);
        }

        info!(
            correlation_id = %correlation_id,
            employees = self.store.len(),
            skipped = parsed.diagnostics.len(),
            "Roster loaded"
        );
        Ok(LoadResult {
            records: self.store.snapshot().to_vec(),
            diagnostics: parsed.diagnostics,
        })
    }

    /// Reads the employee file at `path` and loads it.
    ///
    /// Fails with `SourceNotFound` when the file does not exist and
    /// `SourceReadError` when it cannot be read as text.
    pub fn load_from_path<P: AsRef<Path>>(&mut self, path: P) -> EngineResult<LoadResult> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => EngineError::SourceNotFound {
                path: path_str.clone(),
            },
            _ => EngineError::SourceReadError {
                path: path_str.clone(),
                message: e.to_string(),
            },
        })?;

        info!(path = %path_str, "Reading employee source");
        self.load_from_source(content.lines())
    }

    /// Loads the employee file named in the configuration.
    pub fn load_default(&mut self) -> EngineResult<LoadResult> {
        let path = self.config.source_path();
        self.load_from_path(path)
    }

    /// Returns the summary-table rows, in store order.
    pub fn list_all(&self) -> Vec<DisplayRow> {
        self.store.display_rows()
    }

    /// Returns every record, in store order.
    pub fn snapshot(&self) -> &[EmployeeRecord] {
        self.store.snapshot()
    }

    /// Returns the full record for `id`.
    pub fn get_details(&self, id: &str) -> EngineResult<&EmployeeRecord> {
        self.store.find_by_id(id)
    }

    /// Applies an edit submitted from the row at `position`.
    pub fn apply_edit(&mut self, position: usize, fields: &EditableFields) -> EngineResult<()> {
        let correlation_id = Uuid::new_v4();
        self.store
            .update_by_position(position, fields)
            .inspect(|_| {
                info!(correlation_id = %correlation_id, id = %fields.id.trim(), "Edit applied");
            })
            .inspect_err(|err| {
                warn!(correlation_id = %correlation_id, error = %err, "Edit failed");
            })
    }

    /// Removes the record at `position` and returns it.
    pub fn remove_at(&mut self, position: usize) -> EngineResult<EmployeeRecord> {
        let correlation_id = Uuid::new_v4();
        self.store
            .delete_by_position(position)
            .inspect(|record| {
                info!(correlation_id = %correlation_id, id = %record.id, "Employee removed");
            })
            .inspect_err(|err| {
                warn!(correlation_id = %correlation_id, error = %err, "Remove failed");
            })
    }

    /// Computes the payroll breakdown for `id` over `month`.
    ///
    /// The month labels the request; it does not change the amounts.
    pub fn compute_payroll(
        &self,
        id: &str,
        month: Month,
        hours_worked: i64,
    ) -> EngineResult<PayrollBreakdown> {
        let correlation_id = Uuid::new_v4();
        info!(
            correlation_id = %correlation_id,
            employee_id = %id.trim(),
            month = month.name(),
            hours_worked,
            "Processing payroll request"
        );

        let result = self
            .store
            .find_by_id(id)
            .and_then(|record| compute_payroll(record, hours_worked));

        match &result {
            Ok(breakdown) => info!(
                correlation_id = %correlation_id,
                employee_id = %breakdown.employee_id,
                gross_pay = %breakdown.gross_pay,
                net_pay = %breakdown.net_pay,
                "Payroll computed"
            ),
            Err(err) => warn!(
                correlation_id = %correlation_id,
                code = err.code(),
                error = %err,
                "Payroll failed"
            ),
        }
        result
    }

    /// Validates a raw payroll request and computes its statement.
    pub fn submit_payroll(&self, request: &PayrollRequest) -> EngineResult<PayrollStatement> {
        let request = request.validate().inspect_err(|err| {
            warn!(error = %err, "Payroll request rejected");
        })?;

        let breakdown = self.compute_payroll(
            request.employee_id,
            request.month,
            i64::from(request.hours_worked),
        )?;

        Ok(PayrollStatement {
            month: request.month,
            breakdown,
        })
    }

    /// Renders a statement with the configured currency symbol and labels.
    pub fn render_statement(&self, statement: &PayrollStatement) -> String {
        statement.render(self.config.currency_symbol(), self.config.statement_labels())
    }
}
