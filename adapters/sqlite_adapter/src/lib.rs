use chrono::{DateTime, Utc};
use rusqlite::{Connection, OpenFlags};
use shop_core::ports::{Result, ShopModel};
use std::path::Path;
use tracing::debug;

const CUSTOMERS_SINCE: &str = "SELECT COUNT(*) FROM customers WHERE timestamp > ?1";
const SALES_SINCE: &str = "SELECT COUNT(*) FROM sales WHERE timestamp > ?1";

/// SQLite implementation of the ShopModel trait
///
/// Timestamps are stored as Unix seconds. The connection is owned by the
/// adapter and closed when it is dropped.
pub struct SqliteShopModel {
    conn: Connection,
}

impl SqliteShopModel {
    /// Opens an existing database read-only; a missing file is an error
    pub fn open(db_path: impl AsRef<Path>) -> rusqlite::Result<Self> {
        let db_path = db_path.as_ref();
        let conn = Connection::open_with_flags(
            db_path,
            OpenFlags::SQLITE_OPEN_READ_ONLY | OpenFlags::SQLITE_OPEN_NO_MUTEX,
        )?;
        debug!(path = %db_path.display(), "opened shop database");
        Ok(Self { conn })
    }

    /// Wraps an already open connection
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    fn count_since(&self, query: &str, since: DateTime<Utc>) -> Result<i64> {
        let count: i64 = self
            .conn
            .query_row(query, [since.timestamp()], |row| row.get(0))?;
        Ok(count)
    }
}

/// Creates the `customers` and `sales` tables if they do not exist
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS customers (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            timestamp INTEGER NOT NULL
        );
        CREATE TABLE IF NOT EXISTS sales (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            amount REAL NOT NULL DEFAULT 0,
            timestamp INTEGER NOT NULL
        );
        CREATE INDEX IF NOT EXISTS idx_customers_timestamp ON customers(timestamp);
        CREATE INDEX IF NOT EXISTS idx_sales_timestamp ON sales(timestamp);
        "#,
    )
}

impl ShopModel for SqliteShopModel {
    fn count_customers(&self, since: DateTime<Utc>) -> Result<i64> {
        self.count_since(CUSTOMERS_SINCE, since)
    }

    fn count_sales(&self, since: DateTime<Utc>) -> Result<f64> {
        Ok(self.count_since(SALES_SINCE, since)? as f64)
    }
}
