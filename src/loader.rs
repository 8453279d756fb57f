//! Background loading of the distribution table.
//!
//! [`spawn_load`] starts one tokio task that scans the whole table and sends
//! a single [`LoadOutcome`] back over a one-slot channel. The caller keeps a
//! [`PendingLoad`] and observes that outcome exactly once, either by awaiting
//! it or by polling from a UI loop.
//!
//! Loads cannot be cancelled and have no timeout. Dropping a `PendingLoad`
//! discards the result but the scan still runs to completion.

use std::time::Instant;

use async_channel::{Receiver, TryRecvError};
use tracing::{debug, warn};

use crate::db::Database;
use crate::record::Record;

/// What a finished load delivers to the foreground.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The scan succeeded. The list may legitimately be empty.
    Loaded(Vec<Record>),
    /// The scan failed to prepare or step.
    Failed(String),
    /// There was no store to read from.
    Unavailable,
}

impl LoadOutcome {
    /// Rows to render; empty for failed or unavailable loads.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        match self {
            Self::Loaded(records) => records,
            Self::Failed(_) | Self::Unavailable => &[],
        }
    }

    /// Whether the load completed against a working store.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        matches!(self, Self::Loaded(_))
    }

    /// Short status text for a footer or log line.
    #[must_use]
    pub fn status_line(&self) -> String {
        match self {
            Self::Loaded(records) if records.is_empty() => "No distributions stored".to_string(),
            Self::Loaded(records) => format!("{} distributions", records.len()),
            Self::Failed(err) => format!("Load failed: {err}"),
            Self::Unavailable => "Database unavailable".to_string(),
        }
    }
}

/// Handle to a load in flight. Yields its outcome at most once.
#[derive(Debug)]
pub struct PendingLoad {
    receiver: Option<Receiver<LoadOutcome>>,
}

impl PendingLoad {
    /// Wait for the outcome.
    pub async fn wait(mut self) -> LoadOutcome {
        match self.receiver.take() {
            Some(receiver) => receiver.recv().await.unwrap_or_else(|_| lost_delivery()),
            None => lost_delivery(),
        }
    }

    /// Take the outcome if it has arrived. Returns `Some` only on the first
    /// successful call.
    pub fn try_take(&mut self) -> Option<LoadOutcome> {
        let receiver = self.receiver.as_ref()?;
        let outcome = match receiver.try_recv() {
            Ok(outcome) => outcome,
            Err(TryRecvError::Empty) => return None,
            Err(TryRecvError::Closed) => lost_delivery(),
        };
        self.receiver = None;
        Some(outcome)
    }

    /// Whether the outcome has already been taken.
    #[must_use]
    pub const fn is_delivered(&self) -> bool {
        self.receiver.is_none()
    }
}

fn lost_delivery() -> LoadOutcome {
    LoadOutcome::Failed("load task ended without delivering a result".to_string())
}

/// Start a background scan of the table.
///
/// Must be called from within a tokio runtime. With `db = None` the task
/// delivers [`LoadOutcome::Unavailable`].
#[must_use = "the outcome is only observable through the returned handle"]
pub fn spawn_load(db: Option<Database>) -> PendingLoad {
    let (sender, receiver) = async_channel::bounded(1);

    tokio::spawn(async move {
        let outcome = match db {
            Some(db) => {
                let started = Instant::now();
                match db.fetch_all().await {
                    Ok(records) => {
                        debug!(
                            "loaded {} records in {}",
                            records.len(),
                            humantime::format_duration(started.elapsed())
                        );
                        LoadOutcome::Loaded(records)
                    }
                    Err(e) => {
                        warn!("failed to load distributions: {e}");
                        LoadOutcome::Failed(e.to_string())
                    }
                }
            }
            None => LoadOutcome::Unavailable,
        };

        // The receiver may already be gone; nothing else to do then
        let _ = sender.send(outcome).await;
    });

    PendingLoad {
        receiver: Some(receiver),
    }
}
