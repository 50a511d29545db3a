//! Read-only view of a saved or shared session

use crate::codec::{decode_record, extract_token, from_share_token};
use crate::game::GameState;
use crate::session::{KeyValueStore, STORAGE_KEY};
use crate::wordlists::Catalog;
use anyhow::{Context, Result};
use tracing::debug;

/// Decode the persisted record without touching the store
///
/// Returns `None` when nothing is saved. A record that cannot be decoded is
/// reported and left in place.
///
/// # Errors
///
/// Returns an error if the store cannot be read or the record is invalid.
pub fn saved_state<S: KeyValueStore + ?Sized>(
    store: &S,
    catalog: &Catalog,
) -> Result<Option<GameState>> {
    let Some(text) = store.get(STORAGE_KEY)? else {
        debug!("no saved session");
        return Ok(None);
    };

    let state = decode_record(&text, catalog).context("saved game cannot be read")?;
    Ok(Some(state))
}

/// The shared session when `share_token` is given, else the saved one
///
/// Neither source is written back.
///
/// # Errors
///
/// Returns an error if the token or the saved record cannot be decoded.
pub fn viewed_state<S: KeyValueStore + ?Sized>(
    store: &S,
    catalog: &Catalog,
    share_token: Option<&str>,
) -> Result<Option<GameState>> {
    match share_token {
        Some(input) => from_share_token(extract_token(input), catalog)
            .map(Some)
            .context("shared game cannot be read"),
        None => saved_state(store, catalog),
    }
}
