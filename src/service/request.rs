//! Request types for the roster service.
//!
//! A payroll request arrives as raw text from whatever collects the input.
//! It is validated as a whole before the payroll engine is invoked.

use chrono::Month;
use serde::{Deserialize, Serialize};

use crate::calculation::validate_hours;
use crate::error::{EngineError, EngineResult};

/// Raw payroll input: employee id, month name and hours worked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRequest {
    /// The employee id as typed.
    pub employee_id: String,
    /// An English month name, e.g. `"January"` or `"jan"`.
    pub month: String,
    /// Hours worked as typed.
    pub hours_worked: String,
}

/// A payroll request whose fields have all been checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedPayrollRequest<'a> {
    /// The trimmed employee id.
    pub employee_id: &'a str,
    /// The requested month.
    pub month: Month,
    /// Positive whole hours.
    pub hours_worked: u32,
}

impl PayrollRequest {
    /// Creates a request from raw field values.
    pub fn new(
        employee_id: impl Into<String>,
        month: impl Into<String>,
        hours_worked: impl Into<String>,
    ) -> Self {
        Self {
            employee_id: employee_id.into(),
            month: month.into(),
            hours_worked: hours_worked.into(),
        }
    }

    /// Validates every field, in input order.
    ///
    /// # Errors
    ///
    /// - `InvalidRequest` for an empty employee id or an unknown month
    /// - `InvalidHours` for hours that are empty, not a whole number, or not
    ///   greater than zero
    ///
    /// # Example
    ///
    /// ```
    /// use chrono::Month;
    /// use payroll_roster::service::PayrollRequest;
    ///
    /// let request = PayrollRequest::new(" 10001 ", "february", " 160 ");
    /// let valid = request.validate().unwrap();
    ///
    /// assert_eq!(valid.employee_id, "10001");
    /// assert_eq!(valid.month, Month::February);
    /// assert_eq!(valid.hours_worked, 160);
    /// ```
    pub fn validate(&self) -> EngineResult<ValidatedPayrollRequest<'_>> {
        let employee_id = self.employee_id.trim();
        if employee_id.is_empty() {
            return Err(EngineError::InvalidRequest {
                field: "employee_id".to_string(),
                message: "Employee number cannot be empty".to_string(),
            });
        }

        let month_text = self.month.trim();
        if month_text.is_empty() {
            return Err(EngineError::InvalidRequest {
                field: "month".to_string(),
                message: "Month cannot be empty".to_string(),
            });
        }
        let month = month_text
            .parse::<Month>()
            .map_err(|_| EngineError::InvalidRequest {
                field: "month".to_string(),
                message: format!("Unknown month '{}'", month_text),
            })?;

        let hours_text = self.hours_worked.trim();
        let hours = hours_text
            .parse::<i64>()
            .map_err(|_| EngineError::InvalidHours {
                value: hours_text.to_string(),
            })?;
        let hours_worked = validate_hours(hours)?;

        Ok(ValidatedPayrollRequest {
            employee_id,
            month,
            hours_worked,
        })
    }
}
