//! Employee roster store and payroll computation engine.
//!
//! This crate loads employee records from a tab-delimited source, keeps them
//! in an ordered in-memory roster that supports lookup, editing and deletion,
//! and computes a gross-to-net payroll breakdown for one employee at a time.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod parser;
pub mod service;
pub mod store;
