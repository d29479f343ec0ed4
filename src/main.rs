use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use xpense::core::log::init_logging;

#[derive(Parser)]
#[command(version, about)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to optional configuration file
    #[arg(long, global = true)]
    config_path: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl From<Commands> for xpense::AppCommand {
    fn from(cmd: Commands) -> xpense::AppCommand {
        match cmd {
            Commands::Add {
                amount,
                category,
                date,
                note,
            } => xpense::AppCommand::Add {
                amount,
                category,
                date,
                note,
            },
            Commands::List { month } => xpense::AppCommand::List { month },
            Commands::Edit {
                id,
                amount,
                category,
                date,
                note,
            } => xpense::AppCommand::Edit {
                id,
                amount,
                category,
                date,
                note,
            },
            Commands::Delete { id, yes } => xpense::AppCommand::Delete { id, yes },
            Commands::Export { month, output } => xpense::AppCommand::Export { month, output },
            Commands::Setup => unreachable!("Setup command should be handled separately"),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Create default configuration
    Setup,
    /// Record a new expense
    Add {
        /// Amount spent, e.g. 42.50
        #[arg(short, long)]
        amount: String,
        /// One of the configured categories
        #[arg(short, long)]
        category: String,
        /// Calendar date as YYYY-MM-DD
        #[arg(short, long)]
        date: String,
        /// Optional free-form note
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Show expenses in a table with a running total
    List {
        /// Only show expenses from this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
    },
    /// Change fields of an existing expense
    Edit {
        /// Id of the expense to change
        id: String,
        #[arg(short, long)]
        amount: Option<String>,
        #[arg(short, long)]
        category: Option<String>,
        #[arg(short, long)]
        date: Option<String>,
        #[arg(short, long)]
        note: Option<String>,
    },
    /// Delete an expense
    Delete {
        /// Id of the expense to delete
        id: String,
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Export expenses as CSV
    Export {
        /// Only export expenses from this month (YYYY-MM)
        #[arg(short, long)]
        month: Option<String>,
        /// Output file, defaults to expenses.csv
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let result = match cli.command {
        Some(Commands::Setup) => setup(),
        Some(cmd) => xpense::run_command(cmd.into(), cli.config_path.as_deref()),
        None => {
            Cli::command().print_help()?;
            Ok(())
        }
    };

    if let Err(e) = &result {
        tracing::error!(error = %e, "Application failed");
    }
    result
}

fn setup() -> anyhow::Result<()> {
    use anyhow::Context;
    use xpense::core::config::AppConfig;

    let path = AppConfig::default_config_path()?;

    if path.exists() {
        anyhow::bail!("Configuration file already exists at {}", path.display());
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    let default_config = r#"---
categories:
  - Food
  - Transport
  - Rent
  - Utilities
  - Entertainment
  - Health
  - Other

currency_symbol: "₹"
date_format: "%d/%m/%Y"
"#;

    std::fs::write(&path, default_config)
        .with_context(|| format!("Failed to write config file to {}", path.display()))?;

    tracing::info!("Created default configuration at {}", path.display());
    Ok(())
}
