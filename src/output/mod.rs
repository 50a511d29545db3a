//! Terminal output formatting
//!
//! Display utilities for the line-mode game and the status command.

pub mod display;
pub mod formatters;

pub use display::{print_session, print_share_link};
