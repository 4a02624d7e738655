use rusqlite::Connection;

use crate::error::Result;
use crate::models::Bill;

/// Narrow persistence seam for finalized bills: put-by-id and get-all.
/// Billing and analytics depend on this trait, not on a backend, so
/// both are testable against an in-memory fake.
pub trait BillStore {
    /// Persist a finalized bill under its id. Bills are write-once:
    /// nothing in this system updates or deletes a stored bill.
    fn put_bill(&self, bill: &Bill) -> Result<()>;

    /// Every persisted bill, full history, oldest first.
    fn all_bills(&self) -> Result<Vec<Bill>>;
}

/// Bills as JSON documents in a local sqlite table.
pub struct SqliteBillStore {
    conn: Connection,
}

impl SqliteBillStore {
    pub fn new(conn: Connection) -> SqliteBillStore {
        SqliteBillStore { conn }
    }
}

impl BillStore for SqliteBillStore {
    fn put_bill(&self, bill: &Bill) -> Result<()> {
        let doc = serde_json::to_string(bill)?;
        self.conn.execute(
            "INSERT INTO bills (id, date, doc) VALUES (?1, ?2, ?3)",
            rusqlite::params![bill.id, bill.date, doc],
        )?;
        Ok(())
    }

    fn all_bills(&self) -> Result<Vec<Bill>> {
        let mut stmt = self
            .conn
            .prepare("SELECT id, doc FROM bills ORDER BY date, created_at")?;
        let rows: Vec<(String, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?)))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        let mut bills = Vec::with_capacity(rows.len());
        for (id, doc) in rows {
            let mut bill: Bill = serde_json::from_str(&doc)?;
            bill.id = id;
            bills.push(bill);
        }
        Ok(bills)
    }
}
