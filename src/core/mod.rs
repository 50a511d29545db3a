//! Core domain types
//!
//! Validated words and per-tile feedback. Everything here is pure and
//! independent of sessions, storage and presentation.

mod pattern;
mod word;

pub use pattern::{Pattern, Tile};
pub use word::{WORD_LEN, Word, WordError};
