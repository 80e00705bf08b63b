//! Payroll result models.
//!
//! This module contains the [`PayrollBreakdown`] produced by the payroll
//! engine and the [`PayrollStatement`] that pairs it with the month it was
//! requested for.

use chrono::Month;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Width of the label column in a rendered statement.
const LABEL_WIDTH: usize = 14;

/// Names printed for each contribution line of a pay statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatementLabels {
    /// Label of the social insurance line.
    pub social_insurance: String,
    /// Label of the health insurance line.
    pub health_insurance: String,
    /// Label of the housing fund line.
    pub housing_fund: String,
}

impl Default for StatementLabels {
    fn default() -> Self {
        Self {
            social_insurance: "SSS".to_string(),
            health_insurance: "PhilHealth".to_string(),
            housing_fund: "Pag-IBIG".to_string(),
        }
    }
}

/// The structured result of a payroll computation.
///
/// Every monetary field carries exactly two decimal places. Deductions and
/// net pay are derived from the rounded gross and rounded once each, so
/// `gross_pay - total_deductions()` may differ from `net_pay` by at most
/// one cent.
///
/// # Example
///
/// ```
/// use payroll_roster::models::PayrollBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = PayrollBreakdown {
///     employee_id: "3".to_string(),
///     hours_worked: 160,
///     hourly_rate: Decimal::new(10000, 2),
///     gross_pay: Decimal::new(1600000, 2),
///     social_insurance: Decimal::new(72000, 2),
///     health_insurance: Decimal::new(56000, 2),
///     housing_fund: Decimal::new(32000, 2),
///     net_pay: Decimal::new(1440000, 2),
/// };
/// assert_eq!(breakdown.total_deductions(), Decimal::new(160000, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// The employee the computation is for.
    pub employee_id: String,
    /// Whole hours worked in the month.
    pub hours_worked: u32,
    /// The hourly rate used.
    pub hourly_rate: Decimal,
    /// Hours worked times the hourly rate.
    pub gross_pay: Decimal,
    /// Social insurance contribution.
    pub social_insurance: Decimal,
    /// Health insurance contribution.
    pub health_insurance: Decimal,
    /// Housing fund contribution.
    pub housing_fund: Decimal,
    /// Gross pay less all contributions.
    pub net_pay: Decimal,
}

impl PayrollBreakdown {
    /// Returns the sum of the three contributions.
    pub fn total_deductions(&self) -> Decimal {
        self.social_insurance + self.health_insurance + self.housing_fund
    }

    /// Renders the fixed-width pay statement shown to the user.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_roster::models::{PayrollBreakdown, StatementLabels};
    /// use rust_decimal::Decimal;
    ///
    /// let breakdown = PayrollBreakdown {
    ///     employee_id: "3".to_string(),
    ///     hours_worked: 10,
    ///     hourly_rate: Decimal::new(1000, 2),
    ///     gross_pay: Decimal::new(10000, 2),
    ///     social_insurance: Decimal::new(450, 2),
    ///     health_insurance: Decimal::new(350, 2),
    ///     housing_fund: Decimal::new(200, 2),
    ///     net_pay: Decimal::new(9000, 2),
    /// };
    /// let text = breakdown.statement("P", &StatementLabels::default());
    /// assert!(text.starts_with("Employee Number: 3\n"));
    /// assert!(text.contains("SSS           : P4.50\n"));
    /// assert!(text.ends_with("Net Salary    : P90.00"));
    /// ```
    pub fn statement(&self, currency_symbol: &str, labels: &StatementLabels) -> String {
        let line = |label: &str, value: String| format!("{:<width$}: {}", label, value, width = LABEL_WIDTH);
        let money = |amount: Decimal| format!("{}{:.2}", currency_symbol, amount);
        [
            line("Employee Number", self.employee_id.clone()),
            line("Hours Worked", self.hours_worked.to_string()),
            line("Hourly Rate", money(self.hourly_rate)),
            line("Gross Salary", money(self.gross_pay)),
            line(&labels.social_insurance, money(self.social_insurance)),
            line(&labels.health_insurance, money(self.health_insurance)),
            line(&labels.housing_fund, money(self.housing_fund)),
            line("Net Salary", money(self.net_pay)),
        ]
        .join("\n")
    }
}

/// A payroll breakdown together with the month it covers.
///
/// The month does not affect the amounts; it labels the statement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollStatement {
    /// The month the hours were worked in.
    pub month: Month,
    /// The computed breakdown.
    pub breakdown: PayrollBreakdown,
}

impl PayrollStatement {
    /// Renders the statement with a heading naming the month.
    pub fn render(&self, currency_symbol: &str, labels: &StatementLabels) -> String {
        format!(
            "{:<width$}: {}\n{}",
            "Pay Month",
            self.month.name(),
            self.breakdown.statement(currency_symbol, labels),
            width = LABEL_WIDTH
        )
    }
}
