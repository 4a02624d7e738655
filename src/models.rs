use serde::{Deserialize, Serialize};

/// One entered sale line, held in the session ledger until billed.
/// The unit price is copied from the catalog at entry time and never
/// re-looked-up, so recorded lines are immune to later catalog changes.
#[derive(Debug, Clone)]
pub struct Transaction {
    pub product: String,
    pub quantity: i64,
    pub unit_price: f64,
    pub amount: f64,
    pub date: String,
}

/// A billed line: the transaction annotated with its tax split.
/// Field names match the persisted bill document layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillLine {
    #[serde(rename = "Product Name")]
    pub product: String,
    #[serde(rename = "Quantity")]
    pub quantity: i64,
    #[serde(rename = "Amount")]
    pub amount: f64,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Price")]
    pub unit_price: f64,
    #[serde(rename = "CGST")]
    pub cgst: f64,
    #[serde(rename = "SGST")]
    pub sgst: f64,
    #[serde(rename = "Total Amount")]
    pub total: f64,
}

/// Finalized, tax-inclusive summary of one date's transactions.
/// Immutable once created; persisted exactly as serialized here, keyed
/// by `id` (the id is the document key, not part of the document body).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Bill {
    #[serde(skip)]
    pub id: String,
    pub date: String,
    pub total_amount: f64,
    pub total_cgst: f64,
    pub total_sgst: f64,
    pub grand_total: f64,
    pub transactions: Vec<BillLine>,
}
