//! Calculation logic for the payroll roster.
//!
//! This module contains the payroll engine: the fixed contribution rates,
//! money rounding, and the gross-to-net computation for one employee.

mod contributions;
mod payroll;
mod rounding;

pub use contributions::{
    Contributions, HEALTH_INSURANCE_RATE, HOUSING_FUND_RATE, SOCIAL_INSURANCE_RATE,
    calculate_contributions,
};
pub use payroll::{compute_payroll, validate_hours};
pub use rounding::{MONEY_DECIMAL_PLACES, round_money};
