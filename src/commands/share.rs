//! Share links for a session

use crate::codec::{CodecError, share_url, to_share_token};
use crate::game::GameState;
use crate::session::{KeyValueStore, Session};
use crate::wordlists::Catalog;
use rand::Rng;
use tracing::info;

/// Share link for the current session under `base_url`
///
/// # Errors
///
/// Returns `CodecError` if the session cannot be encoded as a token.
pub fn share_link<S: KeyValueStore, R: Rng>(
    session: &Session<'_, S, R>,
    base_url: &str,
) -> Result<String, CodecError> {
    let token = session.make_share_token()?;
    info!(guesses = session.state().guesses.len(), "share link created");
    Ok(share_url(base_url, &token))
}

/// Share link for a state that is not backed by a live session
///
/// # Errors
///
/// Returns `CodecError` if the current word is not in `catalog`.
pub fn state_share_link(
    state: &GameState,
    catalog: &Catalog,
    base_url: &str,
) -> Result<String, CodecError> {
    let token = to_share_token(state, catalog)?;
    Ok(share_url(base_url, &token))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::{extract_token, from_share_token};
    use crate::session::MemoryStore;
    use crate::wordlists::Catalog;
    use crate::wordlists::loader::words_from_slice;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn link_restores_the_same_word() {
        let catalog = Catalog::new(words_from_slice(&["ADOBE", "PIXEL", "BRUSH"]));
        let session = Session::initialize_with_rng(
            &catalog,
            MemoryStore::new(),
            None,
            StdRng::seed_from_u64(5),
        )
        .unwrap();

        let url = share_link(&session, "https://adoble.example/").unwrap();
        assert!(url.starts_with("https://adoble.example/?id="));

        let restored = from_share_token(extract_token(&url), &catalog).unwrap();
        assert_eq!(restored.current_word, session.state().current_word);
        assert_eq!(restored.used_words, session.state().used_words);
    }

    #[test]
    fn saved_state_link_matches_session_link() {
        let catalog = Catalog::new(words_from_slice(&["ADOBE", "PIXEL", "BRUSH"]));
        let session = Session::initialize_with_rng(
            &catalog,
            MemoryStore::new(),
            None,
            StdRng::seed_from_u64(8),
        )
        .unwrap();

        assert_eq!(
            state_share_link(session.state(), &catalog, "https://adoble.example/").unwrap(),
            share_link(&session, "https://adoble.example/").unwrap()
        );
    }
}
