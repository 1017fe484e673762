//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_score_result, score_name};
pub use formatters::{feedback_row, keyboard_rows, share_grid};
