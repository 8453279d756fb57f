//! Interactive terminal table for Linux Distros
//!
//! Run with: `cargo run --bin linux-distros-tui --features tui`

use std::fs::{self, File};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use linux_distros::tui::{run, TableApp};
use linux_distros::{on_startup, Config};

fn main() -> Result<()> {
    let config = Config::load().context("failed to load configuration")?;
    config.validate()?;

    init_logging(&config);

    let runtime = tokio::runtime::Runtime::new().context("failed to create tokio runtime")?;
    // Reloads spawn onto this runtime from the draw loop
    let _guard = runtime.enter();

    let startup = runtime.block_on(on_startup(&config));
    let mut app = TableApp::new(startup);
    run(&mut app)
}

/// The alternate screen owns stdout and stderr, so logs go to a file in the
/// data directory. Logging is skipped if that file cannot be created.
fn init_logging(config: &Config) {
    let Ok(data_dir) = config.data_dir() else {
        return;
    };
    if fs::create_dir_all(&data_dir).is_err() {
        return;
    }
    let Ok(file) = File::create(data_dir.join("linux-distros-tui.log")) else {
        return;
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level)),
        )
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
}
