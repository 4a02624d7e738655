use comfy_table::{Cell, Table};

use crate::catalog::Catalog;
use crate::error::Result;
use crate::fmt::money;

pub fn list() -> Result<()> {
    let catalog = Catalog::standard()?;

    let mut table = Table::new();
    table.set_header(vec!["Category", "Product", "Unit Price"]);
    for (category, products) in catalog.by_category() {
        for product in products {
            table.add_row(vec![
                Cell::new(category.label()),
                Cell::new(&product.name),
                Cell::new(money(product.unit_price)),
            ]);
        }
    }
    println!("Catalog ({} products)\n{table}", catalog.len());
    Ok(())
}
