//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{print_hints, print_root, print_status, print_submission, print_survey};
pub use formatters::{rejection_message, rejection_title};
