//! Database schema initialization

use duckdb::Connection;

use crate::error::Result;

/// Name of the single table the application owns
pub const TABLE: &str = "distributions";

/// Create the `distributions` table if it does not exist yet
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        r"
        CREATE TABLE IF NOT EXISTS distributions (
            id INTEGER PRIMARY KEY,
            title TEXT,
            author TEXT,
            year INTEGER
        )
        ",
        [],
    )?;

    Ok(())
}
