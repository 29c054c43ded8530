//! Interactive TUI front-end

mod app;
mod rendering;

pub use app::{App, run_tui};
