use super::ui;
use crate::core::config::AppConfig;
use crate::core::expense::ExpenseDraft;
use crate::core::ledger::LedgerStore;
use crate::core::view;
use anyhow::Result;
use tracing::info;

pub fn run(ledger: &mut LedgerStore, config: &AppConfig, draft: ExpenseDraft) -> Result<()> {
    super::ensure_known_category(config, &draft.category)?;

    let expense = ledger.create(&draft)?;
    info!(id = %expense.id, "Recorded expense");

    println!(
        "Recorded {} for {} on {} (id {})",
        ui::style_text(
            &view::format_amount(expense.amount, &config.currency_symbol),
            ui::StyleType::TotalValue,
        ),
        expense.category,
        view::format_date(expense.date, &config.date_format),
        ui::style_text(&expense.id, ui::StyleType::Subtle),
    );
    Ok(())
}
