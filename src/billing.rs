use uuid::Uuid;

use crate::error::Result;
use crate::ledger::Ledger;
use crate::models::{Bill, BillLine};
use crate::store::BillStore;

// GST split for the single fixed jurisdiction: 9% central + 9% state.
pub const CGST_RATE: f64 = 0.09;
pub const SGST_RATE: f64 = 0.09;

/// Derive, persist, and return the bill for one date.
///
/// Returns `Ok(None)` when no ledger entry matches the date; nothing is
/// written in that case. The ledger is not cleared or marked: running
/// this again for the same date re-bills every matching entry and
/// persists a second bill document.
pub fn generate_bill(ledger: &Ledger, date: &str, store: &dyn BillStore) -> Result<Option<Bill>> {
    let lines: Vec<BillLine> = ledger
        .entries_for_date(date)
        .map(|tx| {
            let cgst = tx.amount * CGST_RATE;
            let sgst = tx.amount * SGST_RATE;
            BillLine {
                product: tx.product.clone(),
                quantity: tx.quantity,
                amount: tx.amount,
                date: tx.date.clone(),
                unit_price: tx.unit_price,
                cgst,
                sgst,
                total: tx.amount + cgst + sgst,
            }
        })
        .collect();

    if lines.is_empty() {
        return Ok(None);
    }

    let total_amount: f64 = lines.iter().map(|l| l.amount).sum();
    let total_cgst: f64 = lines.iter().map(|l| l.cgst).sum();
    let total_sgst: f64 = lines.iter().map(|l| l.sgst).sum();

    let bill = Bill {
        id: Uuid::new_v4().to_string(),
        date: date.to_string(),
        total_amount,
        total_cgst,
        total_sgst,
        grand_total: total_amount + total_cgst + total_sgst,
        transactions: lines,
    };

    // Single write, after all computation. A store failure here leaves
    // the ledger intact for retry.
    store.put_bill(&bill)?;
    Ok(Some(bill))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::store::test_support::MemoryBillStore;

    const EPS: f64 = 1e-9;

    fn ledger_with(entries: &[(&str, i64, &str)]) -> Ledger {
        let catalog = Catalog::standard().unwrap();
        let mut ledger = Ledger::new();
        for (product, qty, date) in entries {
            ledger.append(&catalog, product, *qty, date).unwrap();
        }
        ledger
    }

    #[test]
    fn test_single_line_bill() {
        let ledger = ledger_with(&[("apple", 3, "2024-01-01")]);
        let store = MemoryBillStore::new();
        let bill = generate_bill(&ledger, "2024-01-01", &store).unwrap().unwrap();

        assert!((bill.total_amount - 300.0).abs() < EPS);
        assert!((bill.total_cgst - 27.0).abs() < EPS);
        assert!((bill.total_sgst - 27.0).abs() < EPS);
        assert!((bill.grand_total - 354.0).abs() < EPS);
        assert_eq!(bill.transactions.len(), 1);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_multi_line_bill_totals() {
        let ledger = ledger_with(&[("milk", 2, "2024-01-02"), ("carrot", 5, "2024-01-02")]);
        let store = MemoryBillStore::new();
        let bill = generate_bill(&ledger, "2024-01-02", &store).unwrap().unwrap();

        assert!((bill.total_amount - 198.0).abs() < EPS);
        assert!((bill.grand_total - 233.64).abs() < EPS);
    }

    #[test]
    fn test_grand_total_invariant() {
        let ledger = ledger_with(&[
            ("mango", 4, "2024-02-10"),
            ("butter", 1, "2024-02-10"),
            ("spinach", 9, "2024-02-10"),
        ]);
        let store = MemoryBillStore::new();
        let bill = generate_bill(&ledger, "2024-02-10", &store).unwrap().unwrap();

        assert!(
            (bill.grand_total - (bill.total_amount + bill.total_cgst + bill.total_sgst)).abs() < EPS
        );
        assert!((bill.total_cgst - bill.total_amount * 0.09).abs() < EPS);
        assert!((bill.total_cgst - bill.total_sgst).abs() < EPS);

        // Summing per-line totals must agree with the totals block.
        let line_sum: f64 = bill.transactions.iter().map(|l| l.total).sum();
        assert!((bill.grand_total - line_sum).abs() < EPS);
    }

    #[test]
    fn test_only_matching_date_is_billed() {
        let ledger = ledger_with(&[
            ("apple", 1, "2024-01-01"),
            ("milk", 1, "2024-01-02"),
            ("apple", 2, "2024-01-01"),
        ]);
        let store = MemoryBillStore::new();
        let bill = generate_bill(&ledger, "2024-01-01", &store).unwrap().unwrap();

        assert_eq!(bill.transactions.len(), 2);
        assert!((bill.total_amount - 300.0).abs() < EPS);
    }

    #[test]
    fn test_empty_ledger_writes_nothing() {
        let ledger = Ledger::new();
        let store = MemoryBillStore::new();
        assert!(generate_bill(&ledger, "2024-01-01", &store).unwrap().is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_no_matching_date_writes_nothing() {
        let ledger = ledger_with(&[("apple", 3, "2024-01-01")]);
        let store = MemoryBillStore::new();
        assert!(generate_bill(&ledger, "2024-06-01", &store).unwrap().is_none());
        assert_eq!(store.len(), 0);
    }

    #[test]
    fn test_rebilling_same_date_persists_second_document() {
        let ledger = ledger_with(&[("apple", 3, "2024-01-01")]);
        let store = MemoryBillStore::new();
        let first = generate_bill(&ledger, "2024-01-01", &store).unwrap().unwrap();
        let second = generate_bill(&ledger, "2024-01-01", &store).unwrap().unwrap();

        assert_eq!(store.len(), 2);
        assert_ne!(first.id, second.id);
        assert!((first.grand_total - second.grand_total).abs() < EPS);
    }

    #[test]
    fn test_bill_ids_are_unique() {
        let ledger = ledger_with(&[("apple", 1, "2024-01-01")]);
        let store = MemoryBillStore::new();
        let mut ids = std::collections::HashSet::new();
        for _ in 0..50 {
            let bill = generate_bill(&ledger, "2024-01-01", &store).unwrap().unwrap();
            assert!(ids.insert(bill.id));
        }
    }
}
