//! # Linux Distros
//!
//! A small catalogue of well-known Linux distributions.
//!
//! This crate provides:
//! - A fixed reference list of distributions (name, creator, year)
//! - Seeding of an embedded DuckDB table from that list on every start
//! - A background loader that reads the table back and delivers it once
//! - Text and terminal table views for the loaded rows
//!
//! ## Features
//!
//! - `tui` - Interactive terminal table (`linux-distros-tui`)

#![forbid(unsafe_code)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod config;
pub mod db;
pub mod display;
pub mod error;
pub mod loader;
pub mod record;
pub mod seed;
#[cfg(feature = "tui")]
pub mod tui;

pub use app::{on_startup, Startup};
pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use loader::{spawn_load, LoadOutcome, PendingLoad};
pub use record::{Distribution, Record, DISTRIBUTIONS};

/// Application version from Cargo.toml
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = "linux-distros";

/// Window and table title
pub const TITLE: &str = "Linux distributions database";
