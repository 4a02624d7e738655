use colored::Colorize;
use comfy_table::{Cell, Table};

use crate::analytics;
use crate::db::get_connection;
use crate::error::Result;
use crate::fmt::{bar, money};
use crate::settings::get_data_dir;
use crate::store::SqliteBillStore;

const BAR_WIDTH: usize = 24;

pub fn summary() -> Result<()> {
    let conn = get_connection(&get_data_dir().join("kirana.db"))?;
    let store = SqliteBillStore::new(conn);

    let Some(summary) = analytics::sales_summary(&store)? else {
        println!("No sales data to visualize.");
        return Ok(());
    };

    println!("{}", "Sales Overview".bold());
    println!("Total Sales:         {}", summary.total_quantity);
    println!("Total Revenue:       {}", money(summary.total_revenue));
    println!("Products Sold:       {}", summary.distinct_products);

    let max_qty = summary.quantity_by_product.values().copied().max().unwrap_or(0) as f64;
    let mut table = Table::new();
    table.set_header(vec!["Product", "Quantity", ""]);
    for (product, qty) in &summary.quantity_by_product {
        table.add_row(vec![
            Cell::new(product),
            Cell::new(qty),
            Cell::new(bar(*qty as f64, max_qty, BAR_WIDTH)),
        ]);
    }
    println!("\nSales Count by Product\n{table}");

    let max_amount = summary.amount_by_product.values().cloned().fold(0.0, f64::max);
    let mut table = Table::new();
    table.set_header(vec!["Product", "Amount", ""]);
    for (product, amount) in &summary.amount_by_product {
        table.add_row(vec![
            Cell::new(product),
            Cell::new(money(*amount)),
            Cell::new(bar(*amount, max_amount, BAR_WIDTH)),
        ]);
    }
    println!("\nSales Amount by Product\n{table}");

    let max_daily = summary.amount_by_date.values().cloned().fold(0.0, f64::max);
    let mut table = Table::new();
    table.set_header(vec!["Date", "Amount", ""]);
    for (date, amount) in &summary.amount_by_date {
        table.add_row(vec![
            Cell::new(date),
            Cell::new(money(*amount)),
            Cell::new(bar(*amount, max_daily, BAR_WIDTH)),
        ]);
    }
    println!("\nSales over Time\n{table}");
    Ok(())
}

pub fn product(name: &str) -> Result<()> {
    let conn = get_connection(&get_data_dir().join("kirana.db"))?;
    let store = SqliteBillStore::new(conn);

    let report = analytics::product_report(&store, name)?;
    if report.is_empty() {
        println!("No sales recorded for {}.", report.product);
        return Ok(());
    }

    println!("{}", format!("Report for {}", report.product).bold());
    println!("Total Sales Count:   {}", report.total_quantity);
    println!("Total Sales Amount:  {}", money(report.total_amount));

    let max_qty = report.quantity_by_date.values().copied().max().unwrap_or(0) as f64;
    let mut table = Table::new();
    table.set_header(vec!["Date", "Quantity", ""]);
    for (date, qty) in &report.quantity_by_date {
        table.add_row(vec![
            Cell::new(date),
            Cell::new(qty),
            Cell::new(bar(*qty as f64, max_qty, BAR_WIDTH)),
        ]);
    }
    println!("\nSales Count over Time\n{table}");

    let max_amount = report.amount_by_date.values().cloned().fold(0.0, f64::max);
    let mut table = Table::new();
    table.set_header(vec!["Date", "Amount", ""]);
    for (date, amount) in &report.amount_by_date {
        table.add_row(vec![
            Cell::new(date),
            Cell::new(money(*amount)),
            Cell::new(bar(*amount, max_amount, BAR_WIDTH)),
        ]);
    }
    println!("\nSales Amount over Time\n{table}");
    Ok(())
}
