use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A field-specific validation failure. The message is shown to the user
/// verbatim, so it names exactly the field that was rejected.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("amount must be a number greater than zero")]
    Amount,
    #[error("category must not be empty")]
    Category,
    #[error("date must be a valid calendar date (YYYY-MM-DD)")]
    Date,
}

/// One expense entry in the ledger.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub id: String,
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub note: String,
}

/// Validated field values for an expense, before an id is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseFields {
    pub amount: Decimal,
    pub category: String,
    pub date: NaiveDate,
    pub note: String,
}

/// Raw user input for a new expense. Nothing is checked until `validate`.
#[derive(Debug, Clone, Default)]
pub struct ExpenseDraft {
    pub amount: String,
    pub category: String,
    pub date: String,
    pub note: String,
}

impl ExpenseDraft {
    pub fn validate(&self) -> Result<ExpenseFields, ValidationError> {
        Ok(ExpenseFields {
            amount: parse_amount(&self.amount)?,
            category: parse_category(&self.category)?,
            date: parse_date(&self.date)?,
            note: self.note.trim().to_string(),
        })
    }
}

/// Raw user input for changing an existing expense. `None` fields are left
/// as they are.
#[derive(Debug, Clone, Default)]
pub struct ExpensePatch {
    pub amount: Option<String>,
    pub category: Option<String>,
    pub date: Option<String>,
    pub note: Option<String>,
}

impl ExpensePatch {
    pub fn is_empty(&self) -> bool {
        self.amount.is_none() && self.category.is_none() && self.date.is_none() && self.note.is_none()
    }

    /// Shallow merge onto an existing record: present fields overwrite,
    /// absent fields are retained. The merged record is validated before it
    /// is returned.
    pub fn apply_to(&self, existing: &Expense) -> Result<Expense, ValidationError> {
        let mut merged = existing.clone();
        if let Some(raw) = &self.amount {
            merged.amount = parse_amount(raw)?;
        }
        if let Some(raw) = &self.category {
            merged.category = parse_category(raw)?;
        }
        if let Some(raw) = &self.date {
            merged.date = parse_date(raw)?;
        }
        if let Some(raw) = &self.note {
            merged.note = raw.trim().to_string();
        }
        Ok(merged)
    }
}

fn parse_amount(raw: &str) -> Result<Decimal, ValidationError> {
    let amount: Decimal = raw.trim().parse().map_err(|_| ValidationError::Amount)?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::Amount);
    }
    Ok(amount)
}

fn parse_category(raw: &str) -> Result<String, ValidationError> {
    let category = raw.trim();
    if category.is_empty() {
        return Err(ValidationError::Category);
    }
    Ok(category.to_string())
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(ValidationError::Date);
    }
    raw.parse().map_err(|_| ValidationError::Date)
}
