//! Interactive terminal table for the distribution list.

mod app;
mod terminal;

pub use app::TableApp;
pub use terminal::run;
