use crate::core::expense::{Expense, ExpenseDraft, ExpensePatch, ValidationError};
use crate::store::LedgerSlot;
use chrono::Utc;
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("no expense found with id {0}")]
    NotFound(String),
    #[error("persistent storage unavailable: {0}")]
    Persistence(#[source] anyhow::Error),
}

/// Authoritative owner of the expense list. Every successful mutation is
/// written through to the slot before the in-memory list moves, so the two
/// cannot diverge: a failed write surfaces as `Persistence` and leaves the
/// ledger as it was.
pub struct LedgerStore {
    expenses: Vec<Expense>,
    slot: Box<dyn LedgerSlot>,
}

impl LedgerStore {
    /// Loads the ledger from the slot once. Missing or unreadable data
    /// starts an empty ledger; this never fails.
    pub fn open(slot: Box<dyn LedgerSlot>) -> Self {
        let expenses = match slot.read() {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(expenses) => expenses,
                Err(e) => {
                    warn!("Stored ledger is unreadable, starting empty: {e}");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Could not read ledger slot, starting empty: {e}");
                Vec::new()
            }
        };
        debug!("Loaded {} expense(s)", expenses.len());
        Self { expenses, slot }
    }

    /// Current snapshot. Ordering is incidental; anything user-facing goes
    /// through the view projections.
    pub fn list(&self) -> &[Expense] {
        &self.expenses
    }

    pub fn create(&mut self, draft: &ExpenseDraft) -> Result<Expense, LedgerError> {
        let fields = draft.validate()?;
        let expense = Expense {
            id: self.next_id(),
            amount: fields.amount,
            category: fields.category,
            date: fields.date,
            note: fields.note,
        };

        let mut next = self.expenses.clone();
        next.push(expense.clone());
        self.commit(next)?;
        debug!(id = %expense.id, "Created expense");
        Ok(expense)
    }

    pub fn update(&mut self, id: &str, patch: &ExpensePatch) -> Result<Expense, LedgerError> {
        let pos = self
            .expenses
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| LedgerError::NotFound(id.to_string()))?;
        let merged = patch.apply_to(&self.expenses[pos])?;

        let mut next = self.expenses.clone();
        next[pos] = merged.clone();
        self.commit(next)?;
        debug!(%id, "Updated expense");
        Ok(merged)
    }

    /// Removes the expense with the given id. An id with no match is a
    /// no-op, not an error; returns whether a record was removed.
    pub fn delete(&mut self, id: &str) -> Result<bool, LedgerError> {
        let mut next = self.expenses.clone();
        next.retain(|e| e.id != id);
        if next.len() == self.expenses.len() {
            debug!(%id, "Delete matched nothing");
            return Ok(false);
        }
        self.commit(next)?;
        debug!(%id, "Deleted expense");
        Ok(true)
    }

    fn commit(&mut self, next: Vec<Expense>) -> Result<(), LedgerError> {
        let bytes = serde_json::to_vec(&next).map_err(|e| LedgerError::Persistence(e.into()))?;
        self.slot.write(&bytes).map_err(LedgerError::Persistence)?;
        self.expenses = next;
        Ok(())
    }

    // Millisecond timestamp, bumped past any taken value. Unique for the
    // lifetime of the ledger within a session.
    fn next_id(&self) -> String {
        let mut candidate = Utc::now().timestamp_millis();
        while self.expenses.iter().any(|e| e.id == candidate.to_string()) {
            candidate += 1;
        }
        candidate.to_string()
    }
}
