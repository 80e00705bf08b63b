//! The in-memory employee roster.
//!
//! [`EmployeeStore`] owns the ordered records and every mutation on them.
//! Callers hold positions only between two mutations; after each one they
//! re-read [`EmployeeStore::snapshot`] or [`EmployeeStore::display_rows`].

mod employee_store;

pub use employee_store::EmployeeStore;
