//! Adoble
//!
//! A Wordle-style game over a themed catalog of Adobe and design words: six
//! attempts to find a five-letter secret, with per-letter feedback, a session
//! that runs through the whole catalog, local persistence and share links.
//!
//! # Quick Start
//!
//! ```rust
//! use adoble::session::{MemoryStore, Session};
//! use adoble::wordlists::Catalog;
//!
//! let catalog = Catalog::embedded();
//! let mut session = Session::initialize(&catalog, MemoryStore::new(), None).unwrap();
//!
//! for letter in "pixel".chars() {
//!     session.input_letter(letter);
//! }
//! session.submit_guess();
//!
//! println!("{} guesses left", session.state().remaining_guesses());
//! ```

// Core domain types
pub mod core;

// Game-state engine
pub mod game;

// Storage form and share tokens
pub mod codec;

// Session controller and key-value stores
pub mod session;

// Word catalog
pub mod wordlists;

// Runtime configuration
pub mod config;

// Diagnostic logging
pub mod logging;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
