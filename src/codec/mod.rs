//! State codec
//!
//! Two representations of a `GameState`:
//! - the storage form, a complete JSON record kept in the local store
//! - the share token, a compressed subset that travels in a link

pub mod share;
pub mod storage;

pub use share::{
    SharePayload, decode_payload, extract_token, from_share_token, share_url, to_share_token,
};
pub use storage::{StoredState, decode_record, encode_record, from_storage_form, to_storage_form};

use thiserror::Error;

/// Errors from decoding stored records and share tokens
#[derive(Debug, Error)]
pub enum CodecError {
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("record has no current word")]
    MissingCurrentWord,

    #[error("word {0} is not in the catalog")]
    WordNotInCatalog(String),

    #[error("{0} guesses exceed the per-round limit")]
    TooManyGuesses(usize),

    #[error("invalid share token: {0}")]
    InvalidShareToken(String),
}
