//! Seed → load → render, end to end against real database files.

use std::path::PathBuf;
use std::time::Duration;

use linux_distros::config::{Config, DatabaseConfig};
use linux_distros::display::{deliver, RowView};
use linux_distros::seed::{seed, seed_with};
use linux_distros::{on_startup, spawn_load, Database, LoadOutcome, Record, DISTRIBUTIONS};

struct TempDir(PathBuf);

impl TempDir {
    fn new() -> Self {
        let dir = std::env::temp_dir().join(format!("linux-distros-{}", uuid::Uuid::new_v4()));
        std::fs::create_dir_all(&dir).unwrap();
        Self(dir)
    }

    fn config(&self) -> Config {
        let mut config = Config::default();
        config.general.data_dir = Some(self.0.clone());
        config
    }
}

impl Drop for TempDir {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.0);
    }
}

#[derive(Default)]
struct RecordingView {
    renders: Vec<Vec<Record>>,
}

impl RowView for RecordingView {
    fn render_rows(&mut self, records: &[Record]) {
        self.renders.push(records.to_vec());
    }
}

fn sorted(mut records: Vec<Record>) -> Vec<Record> {
    records.sort_by_key(|r| r.id);
    records
}

fn expected() -> Vec<(i64, &'static str, &'static str, i32)> {
    DISTRIBUTIONS
        .iter()
        .zip(1..)
        .map(|(d, id)| (id, d.title, d.author, d.year))
        .collect()
}

fn as_tuples(records: &[Record]) -> Vec<(i64, &str, &str, i32)> {
    records
        .iter()
        .map(|r| (r.id, r.title.as_str(), r.author.as_str(), r.year))
        .collect()
}

async fn open(dir: &TempDir) -> Database {
    Database::open(&DatabaseConfig::default(), &dir.0)
        .await
        .unwrap()
}

#[tokio::test]
async fn seed_completeness() {
    let dir = TempDir::new();
    let db = open(&dir).await;

    let report = seed(&db).await.unwrap();
    assert!(report.is_complete());

    let records = sorted(db.fetch_all().await.unwrap());
    assert_eq!(as_tuples(&records), expected());
}

#[tokio::test]
async fn seed_idempotence() {
    let dir = TempDir::new();
    let db = open(&dir).await;

    seed(&db).await.unwrap();
    let first = sorted(db.fetch_all().await.unwrap());
    seed(&db).await.unwrap();
    let second = sorted(db.fetch_all().await.unwrap());

    assert_eq!(first.len(), 13);
    assert_eq!(first, second);
}

#[tokio::test]
async fn seed_survives_process_restart() {
    let dir = TempDir::new();
    {
        let db = open(&dir).await;
        seed(&db).await.unwrap();
    }

    // A fresh handle to the same file sees 13 rows and reseeding keeps it at 13
    let db = open(&dir).await;
    assert_eq!(db.count().await.unwrap(), 13);
    let report = seed(&db).await.unwrap();
    assert_eq!(report.cleared, 13);
    assert_eq!(db.count().await.unwrap(), 13);
}

#[tokio::test]
async fn round_trip_keeps_non_ascii_and_apostrophes() {
    let db = Database::open_in_memory().unwrap();
    let entries = [
        linux_distros::Distribution {
            title: "Tux's Linux",
            author: "Seán O'Connor",
            year: 1999,
        },
        DISTRIBUTIONS[8],
        DISTRIBUTIONS[9],
    ];
    seed_with(&db, &entries).await.unwrap();

    let outcome = spawn_load(Some(db)).wait().await;
    let mut view = RecordingView::default();
    deliver(&outcome, &mut view);

    let rendered = sorted(view.renders.pop().unwrap());
    assert_eq!(
        as_tuples(&rendered),
        vec![
            (1, "Tux's Linux", "Seán O'Connor", 1999),
            (2, "Manjaro", "Philip Müller", 2011),
            (3, "elementary OS", "Daniel Foré", 2011),
        ]
    );
}

#[tokio::test]
async fn empty_table_loads_as_empty_not_error() {
    let db = Database::open_in_memory().unwrap();
    seed_with(&db, &[]).await.unwrap();

    let outcome = spawn_load(Some(db)).wait().await;
    assert_eq!(outcome, LoadOutcome::Loaded(Vec::new()));
}

#[tokio::test]
async fn single_load_delivers_exactly_once() {
    let db = Database::open_in_memory().unwrap();
    seed(&db).await.unwrap();

    let mut pending = spawn_load(Some(db));
    let mut view = RecordingView::default();
    for _ in 0..100 {
        if let Some(outcome) = pending.try_take() {
            deliver(&outcome, &mut view);
        }
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    assert_eq!(view.renders.len(), 1);
    assert_eq!(view.renders[0].len(), 13);
}

#[tokio::test]
async fn overlapping_loads_each_deliver_full_table() {
    let db = Database::open_in_memory().unwrap();
    seed(&db).await.unwrap();

    let loads: Vec<_> = (0..4).map(|_| spawn_load(Some(db.clone()))).collect();
    for pending in loads {
        assert_eq!(pending.wait().await.records().len(), 13);
    }
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn loads_racing_a_reseed_see_the_full_table() {
    let dir = TempDir::new();
    let db = open(&dir).await;
    seed(&db).await.unwrap();

    for _ in 0..25 {
        let reseed = {
            let db = db.clone();
            tokio::spawn(async move { seed(&db).await })
        };
        let loads: Vec<_> = (0..3).map(|_| spawn_load(Some(db.clone()))).collect();

        for pending in loads {
            let outcome = pending.wait().await;
            assert_eq!(outcome.records().len(), 13);
        }
        assert!(reseed.await.unwrap().unwrap().is_complete());
    }
}

#[tokio::test]
async fn startup_scenario_first_and_last() {
    let dir = TempDir::new();
    let startup = on_startup(&dir.config()).await;
    assert!(startup.open_error.is_none());
    assert!(startup.seed.as_ref().is_some_and(|r| r.inserted == 13));

    let outcome = startup.pending.wait().await;
    let records = sorted(outcome.records().to_vec());
    assert_eq!(records.len(), 13);
    assert_eq!(
        as_tuples(&records[..1]),
        vec![(1, "Ubuntu", "Mark Shuttleworth", 2004)]
    );
    assert_eq!(
        as_tuples(&records[12..]),
        vec![(13, "Slackware", "Patrick Volkerding", 1993)]
    );
}

#[tokio::test]
async fn open_failure_reports_and_loads_empty() {
    let mut config = Config::default();
    config.database.path = Some("/dev/null/linux-distros/distributions.duckdb".to_string());

    let startup = on_startup(&config).await;
    let err = startup.open_error.expect("open should fail");
    assert!(err.is_store_open());
    assert!(startup.db.is_none());

    let outcome = startup.pending.wait().await;
    let mut view = RecordingView::default();
    deliver(&outcome, &mut view);
    assert_eq!(view.renders, vec![Vec::<Record>::new()]);
}
