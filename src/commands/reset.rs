//! Discard the saved session

use crate::session::{KeyValueStore, STORAGE_KEY, StoreError};
use tracing::info;

/// Remove the persisted record
///
/// Returns whether a record was present.
///
/// # Errors
///
/// Returns `StoreError` if the store cannot be read or modified.
pub fn reset_session<S: KeyValueStore + ?Sized>(store: &mut S) -> Result<bool, StoreError> {
    let existed = store.get(STORAGE_KEY)?.is_some();
    store.remove(STORAGE_KEY)?;
    info!(existed, "saved session removed");
    Ok(existed)
}
