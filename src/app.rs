//! Startup wiring: open the store, seed it, then issue the one load.

use std::path::PathBuf;

use tracing::{error, info, warn};

use crate::config::{Config, DB_FILE_NAME};
use crate::db::Database;
use crate::error::Error;
use crate::loader::{spawn_load, PendingLoad};
use crate::seed::{seed, SeedReport};

/// State produced by [`on_startup`].
#[derive(Debug)]
pub struct Startup {
    /// Open store, if opening succeeded.
    pub db: Option<Database>,
    /// Why the store could not be opened; shown to the user.
    pub open_error: Option<Error>,
    /// Seeding result, when seeding ran and its required steps succeeded.
    pub seed: Option<SeedReport>,
    /// The load issued after seeding.
    pub pending: PendingLoad,
}

/// Open and seed the store, then start the background load.
///
/// Never fails: an unopenable store yields `db = None` with the error kept in
/// `open_error`, and the load then delivers an empty result.
pub async fn on_startup(config: &Config) -> Startup {
    let (db, open_error) = match open_store(config).await {
        Ok(db) => (Some(db), None),
        Err(e) => {
            error!("{e}");
            (None, Some(e))
        }
    };

    let seed = match db.as_ref() {
        Some(db) => seed_store(db).await,
        None => None,
    };

    let pending = spawn_load(db.clone());

    Startup {
        db,
        open_error,
        seed,
        pending,
    }
}

/// Open the store the way every entry point does.
///
/// An explicit `database.path` is used as is; otherwise the file lives under
/// the configured data directory. Every failure is a store-open error.
pub async fn open_store(config: &Config) -> crate::Result<Database> {
    // An explicit database path does not need a data directory
    let data_dir = match config.database.path {
        Some(_) => PathBuf::new(),
        None => config
            .data_dir()
            .map_err(|e| Error::store_open(DB_FILE_NAME, e))?,
    };
    Database::open(&config.database, &data_dir).await
}

async fn seed_store(db: &Database) -> Option<SeedReport> {
    match seed(db).await {
        Ok(report) if report.is_complete() => {
            info!("seeded {} distributions", report.inserted);
            Some(report)
        }
        Ok(report) => {
            warn!(
                "seeded {} distributions, {} failed",
                report.inserted,
                report.failures.len()
            );
            Some(report)
        }
        Err(e) => {
            error!("seeding failed: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::LoadOutcome;

    #[tokio::test]
    async fn test_unopenable_store_still_delivers() {
        let mut config = Config::default();
        config.database.path = Some("/dev/null/linux-distros/distributions.duckdb".to_string());

        let startup = on_startup(&config).await;
        assert!(startup.db.is_none());
        assert!(startup.seed.is_none());
        assert!(startup
            .open_error
            .as_ref()
            .is_some_and(Error::is_store_open));

        let outcome = startup.pending.wait().await;
        assert_eq!(outcome, LoadOutcome::Unavailable);
        assert!(outcome.records().is_empty());
    }

    #[tokio::test]
    async fn test_explicit_path_ignores_data_dir() {
        let dir = std::env::temp_dir().join(format!("linux-distros-app-{}", std::process::id()));
        let file = dir.join("explicit.duckdb");

        let mut config = Config::default();
        config.general.data_dir = Some(PathBuf::from("/dev/null/never-created"));
        config.database.path = Some(file.to_string_lossy().into_owned());

        let db = open_store(&config).await.unwrap();
        assert_eq!(db.path(), Some(file.as_path()));

        drop(db);
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[tokio::test]
    async fn test_default_path_lives_under_data_dir() {
        let dir = std::env::temp_dir().join(format!("linux-distros-data-{}", std::process::id()));

        let mut config = Config::default();
        config.general.data_dir = Some(dir.clone());

        let db = open_store(&config).await.unwrap();
        assert_eq!(db.path(), Some(dir.join(DB_FILE_NAME).as_path()));

        drop(db);
        let _ = std::fs::remove_dir_all(&dir);
    }
}
