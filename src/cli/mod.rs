pub mod catalog;
pub mod init;
pub mod report;
pub mod sell;

use clap::{Parser, Subcommand};

use crate::error::{KiranaError, Result};

#[derive(Parser)]
#[command(
    name = "kirana",
    about = "Point-of-sale GST billing and sales analytics for small grocers."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Set up Kirana: choose a data directory and initialize the database.
    Init {
        /// Path for Kirana data (default: ~/Documents/kirana)
        #[arg(long = "data-dir")]
        data_dir: Option<String>,
        /// Shop name printed on bills
        #[arg(long = "shop-name")]
        shop_name: Option<String>,
    },
    /// Show the product catalog with unit prices.
    Catalog,
    /// Record sales for a date and generate the tax-inclusive bill.
    Sell {
        /// Sale date: YYYY-MM-DD (default: today)
        #[arg(long)]
        date: Option<String>,
        /// Line items as PRODUCT=QTY, e.g. apple=3 milk=2
        #[arg(required = true)]
        entries: Vec<String>,
    },
    /// Sales analytics over the full bill history.
    Report {
        #[command(subcommand)]
        command: ReportCommands,
    },
}

#[derive(Subcommand)]
pub enum ReportCommands {
    /// Overview metrics with per-product and per-date breakdowns.
    Summary,
    /// Drill-down report for one product.
    Product {
        /// Product name, e.g. apple
        name: String,
    },
}

/// Resolve an optional `YYYY-MM-DD` argument, defaulting to today.
pub(crate) fn resolve_date(date: Option<String>) -> Result<String> {
    match date {
        Some(d) => {
            chrono::NaiveDate::parse_from_str(&d, "%Y-%m-%d")
                .map_err(|_| KiranaError::Other(format!("invalid date '{d}' (expected YYYY-MM-DD)")))?;
            Ok(d)
        }
        None => Ok(chrono::Local::now().format("%Y-%m-%d").to_string()),
    }
}

/// Parse a `PRODUCT=QTY` entry argument.
pub(crate) fn parse_entry(raw: &str) -> Result<(String, i64)> {
    let (product, qty) = raw
        .split_once('=')
        .ok_or_else(|| KiranaError::Other(format!("invalid entry '{raw}' (expected PRODUCT=QTY)")))?;
    let quantity: i64 = qty
        .trim()
        .parse()
        .map_err(|_| KiranaError::Other(format!("invalid quantity in '{raw}'")))?;
    Ok((product.trim().to_string(), quantity))
}
