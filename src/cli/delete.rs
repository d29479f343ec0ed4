use super::ui;
use crate::core::ledger::LedgerStore;
use anyhow::Result;
use console::Term;
use tracing::info;

pub fn run(ledger: &mut LedgerStore, id: &str, yes: bool) -> Result<()> {
    if !yes && !confirm(&format!("Delete expense {id}?"))? {
        println!("Cancelled.");
        return Ok(());
    }

    if ledger.delete(id)? {
        info!(%id, "Deleted expense");
        println!("Deleted expense {id}.");
    } else {
        println!(
            "{}",
            ui::style_text(
                &format!("No expense with id {id}; nothing to delete."),
                ui::StyleType::Subtle,
            )
        );
    }
    Ok(())
}

fn confirm(prompt: &str) -> Result<bool> {
    let term = Term::stdout();
    term.write_str(&format!("{prompt} [y/N] "))?;
    let answer = term.read_line()?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}
