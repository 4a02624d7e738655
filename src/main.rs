mod analytics;
mod billing;
mod catalog;
mod cli;
mod db;
mod error;
mod fmt;
mod ledger;
mod models;
mod settings;
mod store;

use clap::Parser;

use cli::{Cli, Commands, ReportCommands};

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init { data_dir, shop_name } => cli::init::run(data_dir, shop_name),
        Commands::Catalog => cli::catalog::list(),
        Commands::Sell { date, entries } => cli::sell::run(date, &entries),
        Commands::Report { command } => match command {
            ReportCommands::Summary => cli::report::summary(),
            ReportCommands::Product { name } => cli::report::product(&name),
        },
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
