use std::collections::BTreeMap;

use crate::error::Result;
use crate::models::BillLine;
use crate::store::BillStore;

/// Aggregates over the full bill history. Derived on every call, never
/// stored. Amounts are pre-tax (the `Amount` column, not line totals).
pub struct SalesSummary {
    pub total_quantity: i64,
    pub total_revenue: f64,
    pub distinct_products: usize,
    pub quantity_by_product: BTreeMap<String, i64>,
    pub amount_by_product: BTreeMap<String, f64>,
    pub amount_by_date: BTreeMap<String, f64>,
}

/// Drill-down for a single product. Empty series and zero totals when
/// the product was never billed.
pub struct ProductReport {
    pub product: String,
    pub total_quantity: i64,
    pub total_amount: f64,
    pub quantity_by_date: BTreeMap<String, i64>,
    pub amount_by_date: BTreeMap<String, f64>,
}

impl ProductReport {
    pub fn is_empty(&self) -> bool {
        self.quantity_by_date.is_empty()
    }
}

fn all_lines(store: &dyn BillStore) -> Result<Vec<BillLine>> {
    let mut lines = Vec::new();
    for bill in store.all_bills()? {
        lines.extend(bill.transactions);
    }
    Ok(lines)
}

/// Overview metrics and grouped series across every persisted bill.
/// `Ok(None)` means no sales data yet, which is not an error.
pub fn sales_summary(store: &dyn BillStore) -> Result<Option<SalesSummary>> {
    let lines = all_lines(store)?;
    if lines.is_empty() {
        return Ok(None);
    }

    let mut quantity_by_product = BTreeMap::new();
    let mut amount_by_product = BTreeMap::new();
    let mut amount_by_date = BTreeMap::new();
    let mut total_quantity = 0;
    let mut total_revenue = 0.0;

    for line in &lines {
        total_quantity += line.quantity;
        total_revenue += line.amount;
        *quantity_by_product.entry(line.product.clone()).or_insert(0) += line.quantity;
        *amount_by_product.entry(line.product.clone()).or_insert(0.0) += line.amount;
        *amount_by_date.entry(line.date.clone()).or_insert(0.0) += line.amount;
    }

    Ok(Some(SalesSummary {
        total_quantity,
        total_revenue,
        distinct_products: quantity_by_product.len(),
        quantity_by_product,
        amount_by_product,
        amount_by_date,
    }))
}

pub fn product_report(store: &dyn BillStore, product: &str) -> Result<ProductReport> {
    let product = product.to_lowercase();
    let mut quantity_by_date = BTreeMap::new();
    let mut amount_by_date = BTreeMap::new();
    let mut total_quantity = 0;
    let mut total_amount = 0.0;

    for line in all_lines(store)? {
        if line.product != product {
            continue;
        }
        total_quantity += line.quantity;
        total_amount += line.amount;
        *quantity_by_date.entry(line.date.clone()).or_insert(0) += line.quantity;
        *amount_by_date.entry(line.date.clone()).or_insert(0.0) += line.amount;
    }

    Ok(ProductReport {
        product,
        total_quantity,
        total_amount,
        quantity_by_date,
        amount_by_date,
    })
}
