pub mod cli;
pub mod core;
pub mod store;

use crate::core::config::AppConfig;
use crate::core::expense::{ExpenseDraft, ExpensePatch};
use crate::core::ledger::LedgerStore;
use anyhow::Result;
use std::path::PathBuf;
use tracing::{debug, info};

/// One UI event, decoupled from the clap surface in `main.rs` so the whole
/// flow can be driven from tests.
pub enum AppCommand {
    Add {
        amount: String,
        category: String,
        date: String,
        note: Option<String>,
    },
    List {
        month: Option<String>,
    },
    Edit {
        id: String,
        amount: Option<String>,
        category: Option<String>,
        date: Option<String>,
        note: Option<String>,
    },
    Delete {
        id: String,
        yes: bool,
    },
    Export {
        month: Option<String>,
        output: Option<PathBuf>,
    },
}

pub fn run_command(command: AppCommand, config_path: Option<&str>) -> Result<()> {
    info!("Expense Tracker starting...");

    let config = match config_path {
        Some(path) => AppConfig::load_from_path(path)?,
        None => AppConfig::load()?,
    };
    debug!("Loaded config: {config:#?}");

    let slot = store::disk::DiskSlot::open(&config.default_data_path()?)?;
    let mut ledger = LedgerStore::open(Box::new(slot));

    match command {
        AppCommand::Add {
            amount,
            category,
            date,
            note,
        } => {
            let draft = ExpenseDraft {
                amount,
                category,
                date,
                note: note.unwrap_or_default(),
            };
            cli::add::run(&mut ledger, &config, draft)
        }
        AppCommand::List { month } => cli::list::run(&ledger, &config, month.as_deref()),
        AppCommand::Edit {
            id,
            amount,
            category,
            date,
            note,
        } => {
            let patch = ExpensePatch {
                amount,
                category,
                date,
                note,
            };
            cli::edit::run(&mut ledger, &config, &id, patch)
        }
        AppCommand::Delete { id, yes } => cli::delete::run(&mut ledger, &id, yes),
        AppCommand::Export { month, output } => {
            cli::export::run(&ledger, &config, month.as_deref(), output)
        }
    }
}
