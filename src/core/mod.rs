//! Core business logic: the expense ledger and its view projections.

pub mod config;
pub mod expense;
pub mod ledger;
pub mod log;
pub mod view;

// Re-export main types for cleaner imports
pub use expense::{Expense, ExpenseDraft, ExpensePatch, ValidationError};
pub use ledger::{LedgerError, LedgerStore};
pub use view::MonthFilter;
