//! Payroll computation.
//!
//! This module provides [`compute_payroll`], the pure function turning an
//! employee record and a month's hours into a [`PayrollBreakdown`].

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, PayrollBreakdown};

use super::contributions::calculate_contributions;
use super::rounding::round_money;

/// Computes gross pay, contributions and net pay for `record`.
///
/// The computation is:
///
/// ```text
/// gross            = round(hours_worked * hourly_rate)
/// social_insurance = gross * 0.045
/// health_insurance = gross * 0.035
/// housing_fund     = gross * 0.02
/// net              = gross - (social_insurance + health_insurance + housing_fund)
/// ```
///
/// Gross pay is rounded to cents before anything is taken from it, so the
/// deductions and net pay are computed from the amount reported as gross.
/// Those are then rounded once each, which keeps
/// `gross - deductions` within one cent of `net` for any rate. The function
/// has no side effects and returns identical output for identical input.
///
/// # Errors
///
/// - `InvalidHours` if `hours_worked` is zero, negative or above `u32::MAX`
/// - `MalformedRecord` if the record's row stops before the rate column
/// - `InvalidRate` if the rate is not a non-negative decimal, or the rate
///   or gross pay is too large to carry two decimal places
///
/// # Examples
///
/// ```
/// use payroll_roster::calculation::compute_payroll;
/// use payroll_roster::models::{EmployeeRecord, GovernmentIds, RATE_COLUMN};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let mut columns = vec![String::new(); RATE_COLUMN + 1];
/// columns[RATE_COLUMN] = "100.00".to_string();
/// let record = EmployeeRecord {
///     id: "3".to_string(),
///     last_name: "Aquino".to_string(),
///     first_name: "Bianca".to_string(),
///     government_ids: GovernmentIds::default(),
///     columns,
/// };
///
/// let breakdown = compute_payroll(&record, 160).unwrap();
/// assert_eq!(breakdown.gross_pay, Decimal::from_str("16000.00").unwrap());
/// assert_eq!(breakdown.social_insurance, Decimal::from_str("720.00").unwrap());
/// assert_eq!(breakdown.health_insurance, Decimal::from_str("560.00").unwrap());
/// assert_eq!(breakdown.housing_fund, Decimal::from_str("320.00").unwrap());
/// assert_eq!(breakdown.net_pay, Decimal::from_str("14400.00").unwrap());
/// ```
pub fn compute_payroll(record: &EmployeeRecord, hours_worked: i64) -> EngineResult<PayrollBreakdown> {
    let hours = validate_hours(hours_worked)?;
    let hourly_rate = record.hourly_rate()?;

    let money = |amount: Option<Decimal>| {
        amount
            .and_then(round_money)
            .ok_or_else(|| EngineError::InvalidRate {
                employee_id: record.id.clone(),
                value: hourly_rate.to_string(),
            })
    };

    let gross_pay = money(Decimal::from(hours).checked_mul(hourly_rate))?;
    let contributions = calculate_contributions(gross_pay);
    let net_pay = gross_pay.checked_sub(contributions.total());

    Ok(PayrollBreakdown {
        employee_id: record.id.clone(),
        hours_worked: hours,
        hourly_rate: money(Some(hourly_rate))?,
        gross_pay,
        social_insurance: money(Some(contributions.social_insurance))?,
        health_insurance: money(Some(contributions.health_insurance))?,
        housing_fund: money(Some(contributions.housing_fund))?,
        net_pay: money(net_pay)?,
    })
}

/// Checks that hours worked is a positive whole number that fits `u32`.
pub fn validate_hours(hours_worked: i64) -> EngineResult<u32> {
    u32::try_from(hours_worked)
        .ok()
        .filter(|hours| *hours > 0)
        .ok_or_else(|| EngineError::InvalidHours {
            value: hours_worked.to_string(),
        })
}
