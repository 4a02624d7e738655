use crate::catalog::Catalog;
use crate::error::{KiranaError, Result};
use crate::models::Transaction;

/// Session-scoped ledger of entered sale lines.
///
/// One CLI invocation = one session: the ledger lives only for the run
/// that created it and is never persisted itself. Only bills derived
/// from it reach the store.
#[derive(Default)]
pub struct Ledger {
    entries: Vec<Transaction>,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger::default()
    }

    /// Record a sale line. The unit price is captured from the catalog
    /// now; the entry flow skips zero quantities before calling this,
    /// but the check stays as a safety net.
    pub fn append(
        &mut self,
        catalog: &Catalog,
        product: &str,
        quantity: i64,
        date: &str,
    ) -> Result<Transaction> {
        let item = catalog
            .lookup(product)
            .ok_or_else(|| KiranaError::UnknownProduct(product.to_string()))?;
        if quantity <= 0 {
            return Err(KiranaError::InvalidQuantity {
                product: item.name.clone(),
                quantity,
            });
        }
        let tx = Transaction {
            product: item.name.clone(),
            quantity,
            unit_price: item.unit_price,
            amount: item.unit_price * quantity as f64,
            date: date.to_string(),
        };
        self.entries.push(tx.clone());
        Ok(tx)
    }

    /// Entries matching a date, in the order they were recorded. Entry
    /// order is display-only; billing groups by date alone.
    pub fn entries_for_date<'a>(&'a self, date: &'a str) -> impl Iterator<Item = &'a Transaction> {
        self.entries.iter().filter(move |t| t.date == date)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
