//! Interactive TUI mode
//!
//! Terminal front end: board with staggered reveal, on-screen keyboard,
//! toasts and the help overlay.

mod app;
mod board;
pub mod config;
pub mod pacing;
mod rendering;

pub use app::{App, TuiGame, run_tui};
pub use board::{BoardView, CellView, HelpOverlay};
pub use config::UiConfig;
pub use rendering::KeyCap;
