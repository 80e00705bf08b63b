//! Statutory contribution rates.
//!
//! Each contribution is a fixed fraction of gross pay. The rates are not
//! configurable.

use rust_decimal::Decimal;

/// Social insurance contribution: 4.5% of gross pay.
pub const SOCIAL_INSURANCE_RATE: Decimal = Decimal::from_parts(45, 0, 0, false, 3);

/// Health insurance contribution: 3.5% of gross pay.
pub const HEALTH_INSURANCE_RATE: Decimal = Decimal::from_parts(35, 0, 0, false, 3);

/// Housing fund contribution: 2% of gross pay.
pub const HOUSING_FUND_RATE: Decimal = Decimal::from_parts(2, 0, 0, false, 2);

/// Full-precision contribution amounts for one gross pay figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Contributions {
    /// Social insurance amount.
    pub social_insurance: Decimal,
    /// Health insurance amount.
    pub health_insurance: Decimal,
    /// Housing fund amount.
    pub housing_fund: Decimal,
}

impl Contributions {
    /// Returns the sum of all contributions.
    pub fn total(&self) -> Decimal {
        self.social_insurance + self.health_insurance + self.housing_fund
    }
}

/// Computes every contribution on `gross_pay` without rounding.
///
/// # Examples
///
/// ```
/// use payroll_roster::calculation::calculate_contributions;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let contributions = calculate_contributions(Decimal::from_str("1000").unwrap());
///
/// assert_eq!(contributions.social_insurance, Decimal::from_str("45").unwrap());
/// assert_eq!(contributions.health_insurance, Decimal::from_str("35").unwrap());
/// assert_eq!(contributions.housing_fund, Decimal::from_str("20").unwrap());
/// assert_eq!(contributions.total(), Decimal::from_str("100").unwrap());
/// ```
pub fn calculate_contributions(gross_pay: Decimal) -> Contributions {
    Contributions {
        social_insurance: gross_pay * SOCIAL_INSURANCE_RATE,
        health_insurance: gross_pay * HEALTH_INSURANCE_RATE,
        housing_fund: gross_pay * HOUSING_FUND_RATE,
    }
}
