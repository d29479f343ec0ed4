use super::ui;
use crate::core::config::AppConfig;
use crate::core::ledger::LedgerStore;
use crate::core::view;
use anyhow::Result;
use comfy_table::Cell;

pub fn run(ledger: &LedgerStore, config: &AppConfig, month: Option<&str>) -> Result<()> {
    let filter = super::parse_month_filter(month)?;

    let visible = view::sort_by_date_desc(view::filter_by_month(ledger.list(), filter));
    let total = view::compute_total(visible.iter().copied());

    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("Id"),
        ui::header_cell("Date"),
        ui::header_cell("Category"),
        ui::header_cell("Amount"),
        ui::header_cell("Note"),
    ]);

    for expense in &visible {
        table.add_row(vec![
            ui::subtle_cell(&expense.id),
            Cell::new(view::format_date(expense.date, &config.date_format)),
            Cell::new(&expense.category),
            ui::amount_cell(&view::format_amount(expense.amount, &config.currency_symbol)),
            Cell::new(&expense.note),
        ]);
    }

    println!("{table}");
    println!(
        "\n{} {}",
        ui::style_text(
            &format!("Total ({}):", config.currency_symbol),
            ui::StyleType::TotalLabel,
        ),
        ui::style_text(&format!("{total:.2}"), ui::StyleType::TotalValue),
    );
    Ok(())
}
