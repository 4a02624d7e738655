use std::path::Path;

use rusqlite::Connection;

use crate::error::Result;

// One row per bill. The document body is stored verbatim as JSON; the
// id is the document key and lives only in the key column.
pub const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS bills (
    id TEXT PRIMARY KEY,
    date TEXT NOT NULL,
    doc TEXT NOT NULL,
    created_at TEXT DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_bills_date ON bills(date);
";

pub fn get_connection(db_path: &Path) -> Result<Connection> {
    let conn = Connection::open(db_path)?;
    conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA foreign_keys=ON;")?;
    Ok(conn)
}

pub fn init_db(conn: &Connection) -> Result<()> {
    conn.execute_batch(SCHEMA)?;
    Ok(())
}
