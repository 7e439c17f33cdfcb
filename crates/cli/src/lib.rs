pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "trolley",
    about = "Trolley shopping-list engine CLI",
    long_about = "Price line items, rebuild purchase history, and query ranked product suggestions.",
    after_help = "Examples:\n  trolley price --qty 3 --unit u --unit-price 2,50 --promo 2x1\n  trolley history --data-dir ./data\n  trolley suggest --data-dir ./data \"oat\""
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Price one line item under a promotion")]
    Price {
        #[arg(long, help = "Quantity, locale-tolerant (e.g. 3 or 1,5)")]
        qty: String,
        #[arg(long, default_value = "u", help = "Unit: u, kg, or l")]
        unit: String,
        #[arg(long = "unit-price", help = "Unit price, locale-tolerant (e.g. 2,50)")]
        unit_price: String,
        #[arg(long, default_value = "none", help = "Promotion key: none, 2x1, 3x2, discount10, discount20")]
        promo: String,
        #[arg(long, help = "Currency code; defaults to the configured currency")]
        currency: Option<String>,
    },
    #[command(about = "Rebuild the aggregated product table from archived lists")]
    History {
        #[arg(long = "data-dir", default_value = "data", help = "Directory holding the persisted tables")]
        data_dir: PathBuf,
    },
    #[command(about = "Rank product suggestions for a query")]
    Suggest {
        query: String,
        #[arg(long = "data-dir", default_value = "data", help = "Directory holding the persisted tables")]
        data_dir: PathBuf,
        #[arg(long, help = "Record a selection for this product name into the learning store")]
        select: Option<String>,
    },
    #[command(about = "Show the effective configuration")]
    Config,
}

pub fn run() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Price { qty, unit, unit_price, promo, currency } => {
            commands::price::run(&qty, &unit, &unit_price, &promo, currency.as_deref())
        }
        Command::History { data_dir } => commands::history::run(&data_dir),
        Command::Suggest { query, data_dir, select } => {
            commands::suggest::run(&query, &data_dir, select.as_deref())
        }
        Command::Config => commands::config::run(),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}
