use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::billing::generate_bill;
use crate::catalog::Catalog;
use crate::db::get_connection;
use crate::error::Result;
use crate::fmt::money;
use crate::ledger::Ledger;
use crate::models::Bill;
use crate::settings::{get_data_dir, load_settings};
use crate::store::SqliteBillStore;

pub fn run(date: Option<String>, entries: &[String]) -> Result<()> {
    let date = super::resolve_date(date)?;
    let catalog = Catalog::standard()?;

    let mut ledger = Ledger::new();
    for raw in entries {
        let (product, quantity) = super::parse_entry(raw)?;
        // Zero means "none sold", same as leaving a form field untouched.
        if quantity == 0 {
            continue;
        }
        ledger.append(&catalog, &product, quantity, &date)?;
    }

    if ledger.is_empty() {
        println!("No transactions for {date}.");
        return Ok(());
    }

    let conn = get_connection(&get_data_dir().join("kirana.db"))?;
    let store = SqliteBillStore::new(conn);

    match generate_bill(&ledger, &date, &store)? {
        Some(bill) => render_bill(&bill),
        None => println!("No transactions for {date}."),
    }
    Ok(())
}

fn render_bill(bill: &Bill) {
    let settings = load_settings();

    let mut table = Table::new();
    table.set_header(vec!["Product", "Qty", "Price", "Amount", "CGST", "SGST", "Total"]);
    for line in &bill.transactions {
        table.add_row(vec![
            Cell::new(&line.product),
            Cell::new(line.quantity),
            Cell::new(money(line.unit_price)),
            Cell::new(money(line.amount)),
            Cell::new(money(line.cgst)),
            Cell::new(money(line.sgst)),
            Cell::new(money(line.total)),
        ]);
    }

    println!("{}", settings.shop_name.bold());
    println!("Bill for {}", bill.date);
    println!("{table}");
    println!("Total Amount:    {}", money(bill.total_amount));
    println!("Total CGST (9%): {}", money(bill.total_cgst));
    println!("Total SGST (9%): {}", money(bill.total_sgst));
    println!("{}    {}", "Grand Total:".green().bold(), money(bill.grand_total).bold());
    println!("Bill ID: {}", bill.id);
}
