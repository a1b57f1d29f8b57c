//! Terminal output formatting
//!
//! Display utilities for console mode and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    print_check_result, print_help, print_keyboard, print_round_over, print_row, print_stats,
    print_welcome,
};
