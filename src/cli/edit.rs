use super::ui;
use crate::core::config::AppConfig;
use crate::core::expense::ExpensePatch;
use crate::core::ledger::LedgerStore;
use crate::core::view;
use anyhow::{Result, bail};
use tracing::info;

pub fn run(
    ledger: &mut LedgerStore,
    config: &AppConfig,
    id: &str,
    patch: ExpensePatch,
) -> Result<()> {
    if patch.is_empty() {
        bail!("nothing to change; pass at least one of --amount, --category, --date, --note");
    }
    if let Some(category) = patch.category.as_deref() {
        super::ensure_known_category(config, category)?;
    }

    let expense = ledger.update(id, &patch)?;
    info!(%id, "Updated expense");

    println!(
        "Updated {}: {} for {} on {}",
        ui::style_text(&expense.id, ui::StyleType::Subtle),
        ui::style_text(
            &view::format_amount(expense.amount, &config.currency_symbol),
            ui::StyleType::TotalValue,
        ),
        expense.category,
        view::format_date(expense.date, &config.date_format),
    );
    Ok(())
}
