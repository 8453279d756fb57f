//! Startup seeding: reset the table to the fixed reference list.

use tracing::{debug, warn};

use crate::db::{Database, TABLE};
use crate::error::Result;
use crate::record::{seed_records, Distribution, DISTRIBUTIONS};

/// Outcome of one seeding pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SeedReport {
    /// Rows removed before inserting.
    pub cleared: usize,
    /// Rows written successfully.
    pub inserted: usize,
    /// Rows that failed to insert, by id, with the error text.
    pub failures: Vec<(i64, String)>,
}

impl SeedReport {
    /// Every row of the reference list made it into the table.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Reset the table to [`DISTRIBUTIONS`].
pub async fn seed(db: &Database) -> Result<SeedReport> {
    seed_with(db, DISTRIBUTIONS).await
}

/// Reset the table to `entries`, assigning ids by 1-based position.
///
/// Table creation and the delete are required steps and return `Err`. A row
/// that fails to insert is logged and recorded in the report, and the
/// remaining rows are still written. The whole pass runs under one lock, so
/// a load never observes a partly seeded table.
pub async fn seed_with(db: &Database, entries: &[Distribution]) -> Result<SeedReport> {
    let records = seed_records(entries);
    let (cleared, results) = db.reset(&records).await?;
    debug!("cleared {cleared} rows from {TABLE}");

    let mut report = SeedReport {
        cleared,
        ..SeedReport::default()
    };

    for (record, result) in records.iter().zip(results) {
        match result {
            Ok(()) => report.inserted += 1,
            Err(e) => {
                warn!("failed to insert {} (id {}): {e}", record.title, record.id);
                report.failures.push((record.id, e.to_string()));
            }
        }
    }

    Ok(report)
}
