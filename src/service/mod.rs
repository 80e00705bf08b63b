//! Collaborator-facing operations for the payroll roster.
//!
//! This module is the boundary a presentation layer calls into: loading the
//! source, listing and editing the roster, and computing payroll.

mod request;
mod roster;

pub use request::{PayrollRequest, ValidatedPayrollRequest};
pub use roster::RosterService;
