//! Core data models for the payroll roster.
//!
//! This module contains all the domain models used throughout the crate.

mod employee;
mod load_result;
mod payroll;

pub use employee::{
    DISPLAY_MIN_COLUMNS, DisplayRow, EditableFields, EmployeeRecord, FIRST_NAME_COLUMN,
    GOVERNMENT_ID_COLUMN, GovernmentIds, ID_COLUMN, LAST_NAME_COLUMN, MIN_COLUMNS, RATE_COLUMN,
};
pub use load_result::{Diagnostic, LoadResult};
pub use payroll::{PayrollBreakdown, PayrollStatement, StatementLabels};
