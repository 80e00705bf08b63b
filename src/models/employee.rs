//! Employee record model and related types.
//!
//! This module defines the [`EmployeeRecord`] held by the store, the
//! [`EditableFields`] accepted by the edit operation and the [`DisplayRow`]
//! projection used by the summary table.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::{EngineError, EngineResult};

/// Column holding the employee id.
pub const ID_COLUMN: usize = 0;
/// Column holding the last name.
pub const LAST_NAME_COLUMN: usize = 1;
/// Column holding the first name.
pub const FIRST_NAME_COLUMN: usize = 2;
/// First of the four consecutive government identifier columns.
pub const GOVERNMENT_ID_COLUMN: usize = 6;
/// Column holding the hourly rate.
pub const RATE_COLUMN: usize = 18;

/// Minimum column count for a row to be kept at all.
pub const MIN_COLUMNS: usize = 8;
/// Minimum column count for a row to appear in the summary table.
pub const DISPLAY_MIN_COLUMNS: usize = 18;

/// The four government identifiers carried by every employee.
///
/// Only presence is tracked; no format validation is applied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GovernmentIds {
    /// Social insurance number.
    pub social_insurance: String,
    /// Health insurance number.
    pub health_insurance: String,
    /// Tax identification number.
    pub tax: String,
    /// Housing fund number.
    pub housing_fund: String,
}

impl GovernmentIds {
    /// Reads the identifiers from their fixed columns, treating missing
    /// trailing columns as empty.
    pub fn from_columns(columns: &[String]) -> Self {
        let at = |offset: usize| {
            columns
                .get(GOVERNMENT_ID_COLUMN + offset)
                .cloned()
                .unwrap_or_default()
        };
        Self {
            social_insurance: at(0),
            health_insurance: at(1),
            tax: at(2),
            housing_fund: at(3),
        }
    }
}

/// An employee as held by the roster.
///
/// The named fields are the editable view of the record; `columns` keeps
/// the raw source row as it was read so that values without a named field
/// (the hourly rate among them) can still be located by position.
///
/// # Example
///
/// ```
/// use payroll_roster::models::{EmployeeRecord, GovernmentIds};
///
/// let record = EmployeeRecord {
///     id: "10001".to_string(),
///     last_name: "Garcia".to_string(),
///     first_name: "Manuel".to_string(),
///     government_ids: GovernmentIds::default(),
///     columns: vec![],
/// };
/// assert_eq!(record.numeric_id().unwrap(), 10001);
/// assert!(!record.is_displayable());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Unique employee id, trimmed. Never changed after load.
    pub id: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee's first name.
    pub first_name: String,
    /// Government identifiers.
    pub government_ids: GovernmentIds,
    /// The raw source row.
    pub columns: Vec<String>,
}

impl EmployeeRecord {
    /// Builds a record from a split source row.
    ///
    /// Returns `MalformedRecord` if the row has fewer than [`MIN_COLUMNS`]
    /// columns, or `InvalidIdFormat` if the trimmed id is not an integer.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_roster::models::EmployeeRecord;
    ///
    /// let columns: Vec<String> = ["7 ", "Lim", "Antonio", "", "", "", "44-01", "82-02"]
    ///     .iter()
    ///     .map(|s| s.to_string())
    ///     .collect();
    /// let record = EmployeeRecord::from_columns(columns, "line 2").unwrap();
    ///
    /// assert_eq!(record.id, "7");
    /// assert_eq!(record.government_ids.health_insurance, "82-02");
    /// assert_eq!(record.government_ids.tax, "");
    /// ```
    pub fn from_columns(columns: Vec<String>, context: &str) -> EngineResult<Self> {
        if columns.len() < MIN_COLUMNS {
            return Err(EngineError::MalformedRecord {
                context: context.to_string(),
                columns: columns.len(),
                required: MIN_COLUMNS,
            });
        }

        let id = columns[ID_COLUMN].trim().to_string();
        parse_numeric_id(&id)?;

        Ok(Self {
            last_name: columns[LAST_NAME_COLUMN].clone(),
            first_name: columns[FIRST_NAME_COLUMN].clone(),
            government_ids: GovernmentIds::from_columns(&columns),
            id,
            columns,
        })
    }

    /// Returns the id interpreted as an integer sort key.
    pub fn numeric_id(&self) -> EngineResult<i64> {
        parse_numeric_id(&self.id)
    }

    /// Returns true if the row is wide enough for the summary table.
    pub fn is_displayable(&self) -> bool {
        self.columns.len() >= DISPLAY_MIN_COLUMNS
    }

    /// Returns the raw hourly rate text.
    ///
    /// Fails with `MalformedRecord` when the row stops before the rate column.
    pub fn hourly_rate_text(&self) -> EngineResult<&str> {
        self.columns
            .get(RATE_COLUMN)
            .map(|s| s.trim())
            .ok_or_else(|| EngineError::MalformedRecord {
                context: format!("employee {}", self.id),
                columns: self.columns.len(),
                required: RATE_COLUMN + 1,
            })
    }

    /// Returns the hourly rate as a non-negative decimal.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_roster::models::{EmployeeRecord, GovernmentIds, RATE_COLUMN};
    /// use rust_decimal::Decimal;
    ///
    /// let mut columns = vec![String::new(); RATE_COLUMN + 1];
    /// columns[RATE_COLUMN] = "535.71".to_string();
    /// let record = EmployeeRecord {
    ///     id: "1".to_string(),
    ///     last_name: String::new(),
    ///     first_name: String::new(),
    ///     government_ids: GovernmentIds::default(),
    ///     columns,
    /// };
    /// assert_eq!(record.hourly_rate().unwrap(), Decimal::new(53571, 2));
    /// ```
    pub fn hourly_rate(&self) -> EngineResult<Decimal> {
        let text = self.hourly_rate_text()?;
        let invalid = || EngineError::InvalidRate {
            employee_id: self.id.clone(),
            value: text.to_string(),
        };

        let rate = Decimal::from_str(text).map_err(|_| invalid())?;
        if rate.is_sign_negative() && !rate.is_zero() {
            return Err(invalid());
        }
        Ok(rate)
    }

    /// Overwrites the editable fields. The id is left untouched.
    pub(crate) fn apply(&mut self, fields: &EditableFields) {
        self.last_name = fields.last_name.clone();
        self.first_name = fields.first_name.clone();
        self.government_ids = fields.government_ids.clone();
    }

    /// Projects the record into a summary-table row at `position`.
    pub fn display_row(&self, position: usize) -> DisplayRow {
        DisplayRow {
            position,
            id: self.id.clone(),
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            government_ids: self.government_ids.clone(),
        }
    }

    /// Returns the fields the edit form starts from.
    pub fn editable_fields(&self) -> EditableFields {
        EditableFields {
            id: self.id.clone(),
            last_name: self.last_name.clone(),
            first_name: self.first_name.clone(),
            government_ids: self.government_ids.clone(),
        }
    }
}

/// The editable portion of a record, submitted as one unit.
///
/// `id` locates the record being edited and is never written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EditableFields {
    /// The id of the record to edit.
    pub id: String,
    /// New last name.
    pub last_name: String,
    /// New first name.
    pub first_name: String,
    /// New government identifiers.
    pub government_ids: GovernmentIds,
}

/// A row of the employee summary table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DisplayRow {
    /// Position of the record in the store.
    pub position: usize,
    /// Employee id.
    pub id: String,
    /// Last name.
    pub last_name: String,
    /// First name.
    pub first_name: String,
    /// Government identifiers.
    #[serde(flatten)]
    pub government_ids: GovernmentIds,
}

fn parse_numeric_id(id: &str) -> EngineResult<i64> {
    id.trim()
        .parse::<i64>()
        .map_err(|_| EngineError::InvalidIdFormat { id: id.to_string() })
}
