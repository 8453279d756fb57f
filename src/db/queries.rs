//! Database query implementations for DuckDB

use duckdb::{params, Connection};

use crate::error::{Error, Result};
use crate::record::Record;

/// Remove every row, returning how many were deleted
pub fn delete_all(conn: &Connection) -> Result<usize> {
    let removed = conn.execute("DELETE FROM distributions", [])?;
    Ok(removed)
}

/// Insert one record using bound parameters
pub fn insert_record(conn: &Connection, record: &Record) -> Result<()> {
    conn.execute(
        "INSERT INTO distributions (id, title, author, year) VALUES (?1, ?2, ?3, ?4)",
        params![record.id, record.title, record.author, record.year],
    )?;

    Ok(())
}

/// Replace the table contents with `records`.
///
/// Returns the number of rows removed and one result per record, in order.
/// Inserts run in autocommit mode so a rejected row leaves the rest in place.
pub fn replace_all(conn: &Connection, records: &[Record]) -> Result<(usize, Vec<Result<()>>)> {
    let removed = delete_all(conn)?;
    let results = records.iter().map(|r| insert_record(conn, r)).collect();
    Ok((removed, results))
}

/// Read the whole table in whatever order the store returns it
pub fn fetch_all(conn: &Connection) -> Result<Vec<Record>> {
    let mut stmt = conn
        .prepare("SELECT id, title, author, year FROM distributions")
        .map_err(Error::QueryPrepare)?;

    let rows = stmt
        .query_map([], |row| {
            Ok(Record {
                id: i64::from(row.get::<_, i32>(0)?),
                title: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                author: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
                year: row.get::<_, Option<i32>>(3)?.unwrap_or_default(),
            })
        })
        .map_err(Error::QueryStep)?;

    let mut records = Vec::new();
    for row in rows {
        records.push(row.map_err(Error::QueryStep)?);
    }

    Ok(records)
}

/// Get the number of stored rows
pub fn count(conn: &Connection) -> Result<i64> {
    let mut stmt = conn
        .prepare("SELECT COUNT(*) FROM distributions")
        .map_err(Error::QueryPrepare)?;
    let count: i64 = stmt
        .query_row([], |row| row.get(0))
        .map_err(Error::QueryStep)?;
    Ok(count)
}
