//! Play sessions
//!
//! `Session` drives the engine from user input and keeps the persisted record
//! in step with the live state.

pub mod controller;
pub mod store;

pub use controller::{RestoreSource, STORAGE_KEY, Session};
pub use store::{FileStore, KeyValueStore, MemoryStore, StoreError};
