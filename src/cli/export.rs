use crate::core::config::AppConfig;
use crate::core::expense::Expense;
use crate::core::ledger::LedgerStore;
use crate::core::view;
use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

pub fn run(
    ledger: &LedgerStore,
    config: &AppConfig,
    month: Option<&str>,
    output: Option<PathBuf>,
) -> Result<()> {
    let filter = super::parse_month_filter(month)?;
    let visible: Vec<&Expense> = view::filter_by_month(ledger.list(), filter).collect();

    if visible.is_empty() {
        println!("No expenses to export.");
        return Ok(());
    }

    let csv = view::to_csv(visible.iter().copied(), &config.date_format);
    let path = output.unwrap_or_else(|| PathBuf::from("expenses.csv"));
    fs::write(&path, &csv).with_context(|| format!("Failed to write {}", path.display()))?;

    info!(path = %path.display(), rows = visible.len(), "Exported CSV");
    println!("Exported {} expense(s) to {}", visible.len(), path.display());
    Ok(())
}
