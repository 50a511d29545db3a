//! Session controller
//!
//! Owns the single current `GameState` and is the only place it changes.
//! Every operation computes the next snapshot with the pure engine, commits it
//! and writes the storage form to the key-value store.

use super::store::KeyValueStore;
use crate::codec::{self, CodecError};
use crate::core::{WORD_LEN, Word};
use crate::game::{GameError, GameState, GameStatus, evaluate};
use crate::wordlists::Catalog;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

/// Fixed key of the persisted record
pub const STORAGE_KEY: &str = "adobleGame";

/// Where the session state came from at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RestoreSource {
    ShareToken,
    Storage,
    Fresh,
}

/// A play session over one catalog
pub struct Session<'a, S: KeyValueStore, R: Rng = StdRng> {
    catalog: &'a Catalog,
    store: S,
    rng: R,
    state: GameState,
    source: RestoreSource,
}

impl<'a, S: KeyValueStore> Session<'a, S> {
    /// Start a session with an entropy-seeded RNG
    ///
    /// Restore order: `share_token` (a bare token or a share link), then the
    /// stored record, then a brand-new game.
    ///
    /// # Errors
    ///
    /// Returns `GameError::ExhaustedCatalog` only when a new game is needed and
    /// the catalog is empty.
    pub fn initialize(
        catalog: &'a Catalog,
        store: S,
        share_token: Option<&str>,
    ) -> Result<Self, GameError> {
        Self::initialize_with_rng(catalog, store, share_token, StdRng::from_rng(&mut rand::rng()))
    }
}

impl<'a, S: KeyValueStore, R: Rng> Session<'a, S, R> {
    /// Start a session drawing words from `rng`
    ///
    /// # Errors
    ///
    /// Returns `GameError::ExhaustedCatalog` only when a new game is needed and
    /// the catalog is empty.
    pub fn initialize_with_rng(
        catalog: &'a Catalog,
        mut store: S,
        share_token: Option<&str>,
        mut rng: R,
    ) -> Result<Self, GameError> {
        let (state, source) = match restore(catalog, &mut store, share_token) {
            Some(restored) => restored,
            None => (GameState::fresh(catalog, &mut rng)?, RestoreSource::Fresh),
        };

        info!(
            source = ?source,
            word_count = catalog.len(),
            used = state.used_words.len(),
            "session initialized"
        );

        let mut session = Self {
            catalog,
            store,
            rng,
            state,
            source,
        };
        session.persist();
        Ok(session)
    }

    /// Current snapshot
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        self.catalog
    }

    #[must_use]
    pub fn restored_from(&self) -> RestoreSource {
        self.source
    }

    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a letter to the in-progress guess
    ///
    /// Ignored unless the round takes guesses, the guess has room and `letter`
    /// is an ASCII letter. Returns whether the state changed.
    pub fn input_letter(&mut self, letter: char) -> bool {
        if !self.state.can_guess()
            || self.state.current_guess.len() >= WORD_LEN
            || !letter.is_ascii_alphabetic()
        {
            return false;
        }

        let mut next = self.state.clone();
        next.current_guess.push(letter.to_ascii_uppercase());
        self.commit(next);
        true
    }

    /// Drop the last letter of the in-progress guess
    ///
    /// Returns whether the state changed.
    pub fn backspace(&mut self) -> bool {
        if self.state.status != GameStatus::Playing || self.state.current_guess.is_empty() {
            return false;
        }

        let mut next = self.state.clone();
        next.current_guess.pop();
        self.commit(next);
        true
    }

    /// Submit the in-progress guess once it has `WORD_LEN` letters
    ///
    /// Returns whether the state changed.
    pub fn submit_guess(&mut self) -> bool {
        if !self.state.can_guess() || !self.state.guess_is_full() {
            return false;
        }

        let guess = match Word::new(self.state.current_guess.as_str()) {
            Ok(guess) => guess,
            Err(e) => {
                warn!(guess = %self.state.current_guess, error = %e, "unplayable guess");
                return false;
            }
        };

        match evaluate(&self.state, &guess, self.catalog.len()) {
            Ok(next) => {
                if next.is_round_over() {
                    info!(
                        word = %next.current_word,
                        status = %next.status,
                        attempts = next.guesses.len(),
                        "round finished"
                    );
                }
                self.commit(next);
                true
            }
            Err(e) => {
                debug!(error = %e, "guess ignored");
                false
            }
        }
    }

    /// Encode the session as a share token
    ///
    /// # Errors
    ///
    /// Returns `CodecError` if the current word has no catalog index.
    pub fn make_share_token(&self) -> Result<String, CodecError> {
        codec::to_share_token(&self.state, self.catalog)
    }

    /// Move on to the next round, or start over once the catalog is used up
    ///
    /// A new round keeps the won/lost tallies. Starting over discards the
    /// stored record and begins a brand-new session.
    ///
    /// # Errors
    ///
    /// Returns `GameError::ExhaustedCatalog` only if the catalog is empty.
    pub fn start_new_game(&mut self) -> Result<(), GameError> {
        let next_round = if self.state.used_words.len() >= self.catalog.len() {
            None
        } else {
            self.state.next_round(self.catalog, &mut self.rng).ok()
        };

        match next_round {
            Some(next) => {
                debug!(used = next.used_words.len(), "new round");
                self.commit(next);
            }
            None => {
                info!(
                    won = self.state.won_words.len(),
                    lost = self.state.lost_words.len(),
                    "catalog exhausted, starting a new session"
                );
                self.clear_storage();
                let fresh = GameState::fresh(self.catalog, &mut self.rng)?;
                self.commit(fresh);
            }
        }
        Ok(())
    }

    fn commit(&mut self, next: GameState) {
        self.state = next;
        self.persist();
    }

    fn persist(&mut self) {
        let result = codec::encode_record(&self.state)
            .map_err(|e| e.to_string())
            .and_then(|text| {
                self.store
                    .set(STORAGE_KEY, &text)
                    .map_err(|e| e.to_string())
            });

        if let Err(error) = result {
            warn!(%error, "failed to persist game state");
        }
    }

    fn clear_storage(&mut self) {
        if let Err(error) = self.store.remove(STORAGE_KEY) {
            warn!(%error, "failed to clear stored game state");
        }
    }
}

/// Try the share token, then the stored record
///
/// A stored record that cannot be decoded is removed.
fn restore<S: KeyValueStore>(
    catalog: &Catalog,
    store: &mut S,
    share_token: Option<&str>,
) -> Option<(GameState, RestoreSource)> {
    if let Some(input) = share_token {
        match codec::from_share_token(codec::extract_token(input), catalog) {
            Ok(state) => return Some((state, RestoreSource::ShareToken)),
            Err(error) => warn!(%error, "ignoring share token"),
        }
    }

    let decoded = store
        .get(STORAGE_KEY)
        .map_err(|e| e.to_string())
        .and_then(|record| {
            record
                .map(|text| codec::decode_record(&text, catalog))
                .transpose()
                .map_err(|e| e.to_string())
        });

    match decoded {
        Ok(Some(state)) => Some((state, RestoreSource::Storage)),
        Ok(None) => None,
        Err(error) => {
            warn!(%error, "discarding stored game state");
            if let Err(error) = store.remove(STORAGE_KEY) {
                warn!(%error, "failed to clear stored game state");
            }
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::store::{MemoryStore, StoreError};
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn catalog(words: &[&str]) -> Catalog {
        Catalog::new(words_from_slice(words))
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(11)
    }

    fn new_session<'a>(
        catalog: &'a Catalog,
        store: MemoryStore,
        token: Option<&str>,
    ) -> Session<'a, MemoryStore> {
        Session::initialize_with_rng(catalog, store, token, rng()).unwrap()
    }

    fn type_word<S: KeyValueStore, R: Rng>(session: &mut Session<'_, S, R>, text: &str) {
        for c in text.chars() {
            session.input_letter(c);
        }
    }

    fn guess<S: KeyValueStore, R: Rng>(session: &mut Session<'_, S, R>, text: &str) -> bool {
        type_word(session, text);
        session.submit_guess()
    }

    fn stored(session: &Session<'_, MemoryStore>) -> GameState {
        let text = session.store().entry(STORAGE_KEY).unwrap();
        codec::decode_record(text, session.catalog()).unwrap()
    }

    #[test]
    fn fresh_session_is_persisted() {
        let catalog = catalog(&["ADOBE", "PIXEL", "BRUSH"]);
        let session = new_session(&catalog, MemoryStore::new(), None);

        assert_eq!(session.restored_from(), RestoreSource::Fresh);
        assert_eq!(session.state().status, GameStatus::Playing);
        assert_eq!(session.state().used_words.len(), 1);
        assert!(catalog.contains(&session.state().current_word));
        assert_eq!(&stored(&session), session.state());
    }

    #[test]
    fn stored_record_is_restored() {
        let catalog = catalog(&["ADOBE", "PIXEL", "BRUSH"]);
        let mut saved = GameState::with_word(word("PIXEL"));
        saved.guesses.push(word("ADOBE"));
        saved.not_in_word_letters.extend(['A', 'D', 'O', 'B']);
        saved.wrong_pos_letters.insert('E');
        saved.current_guess = "BR".to_string();

        let store = MemoryStore::with_entry(STORAGE_KEY, &codec::encode_record(&saved).unwrap());
        let session = new_session(&catalog, store, None);

        assert_eq!(session.restored_from(), RestoreSource::Storage);
        assert_eq!(session.state(), &saved);
    }

    #[test]
    fn corrupt_record_is_replaced_by_fresh_game() {
        let catalog = catalog(&["ADOBE", "PIXEL", "BRUSH"]);
        let store = MemoryStore::with_entry(STORAGE_KEY, "{not json");
        let session = new_session(&catalog, store, None);

        assert_eq!(session.restored_from(), RestoreSource::Fresh);
        assert_eq!(&stored(&session), session.state());
    }

    #[test]
    fn record_for_another_catalog_is_discarded() {
        let catalog = catalog(&["ADOBE", "PIXEL"]);
        let store = MemoryStore::with_entry(STORAGE_KEY, r#"{"currentWord":"CRANE"}"#);
        let session = new_session(&catalog, store, None);

        assert_eq!(session.restored_from(), RestoreSource::Fresh);
        assert_ne!(session.state().current_word, "CRANE");
    }

    #[test]
    fn share_token_wins_over_storage() {
        let catalog = catalog(&["ADOBE", "PIXEL", "BRUSH"]);

        let mut shared = GameState::with_word(word("BRUSH"));
        shared.used_words = vec![word("ADOBE"), word("BRUSH")];
        shared.won_words = vec![word("ADOBE")];
        shared.guesses = vec![word("PIXEL")];
        let token = codec::to_share_token(&shared, &catalog).unwrap();

        let saved = GameState::with_word(word("PIXEL"));
        let store = MemoryStore::with_entry(STORAGE_KEY, &codec::encode_record(&saved).unwrap());

        let session = new_session(&catalog, store, Some(&token));

        assert_eq!(session.restored_from(), RestoreSource::ShareToken);
        assert_eq!(session.state().current_word, "BRUSH");
        assert_eq!(session.state().guesses, vec![word("PIXEL")]);
        assert!(session.state().not_in_word_letters.is_empty());
        // The shared session replaces the stored one
        assert_eq!(stored(&session).current_word, "BRUSH");
    }

    #[test]
    fn share_link_is_accepted() {
        let catalog = catalog(&["ADOBE", "PIXEL"]);
        let token = codec::to_share_token(&GameState::with_word(word("PIXEL")), &catalog).unwrap();
        let url = codec::share_url("https://adoble.example/", &token);

        let session = new_session(&catalog, MemoryStore::new(), Some(&url));
        assert_eq!(session.restored_from(), RestoreSource::ShareToken);
        assert_eq!(session.state().current_word, "PIXEL");
    }

    #[test]
    fn invalid_share_token_falls_back_to_storage() {
        let catalog = catalog(&["ADOBE", "PIXEL"]);
        let saved = GameState::with_word(word("ADOBE"));
        let store = MemoryStore::with_entry(STORAGE_KEY, &codec::encode_record(&saved).unwrap());

        let session = new_session(&catalog, store, Some("invalid-string"));
        assert_eq!(session.restored_from(), RestoreSource::Storage);
        assert_eq!(session.state(), &saved);
    }

    #[test]
    fn letter_input_guards() {
        let catalog = catalog(&["ADOBE"]);
        let mut session = new_session(&catalog, MemoryStore::new(), None);

        assert!(session.input_letter('a'));
        assert!(!session.input_letter('1'));
        assert!(!session.input_letter(' '));
        type_word(&mut session, "dobex");

        assert_eq!(session.state().current_guess, "ADOBE");
        assert_eq!(stored(&session).current_guess, "ADOBE");
    }

    #[test]
    fn backspace_guards() {
        let catalog = catalog(&["ADOBE"]);
        let mut session = new_session(&catalog, MemoryStore::new(), None);

        assert!(!session.backspace());
        type_word(&mut session, "AD");
        assert!(session.backspace());
        assert_eq!(session.state().current_guess, "A");
        assert!(session.backspace());
        assert!(!session.backspace());
        assert!(session.state().current_guess.is_empty());
    }

    #[test]
    fn submit_requires_a_full_guess() {
        let catalog = catalog(&["ADOBE", "PIXEL"]);
        let mut session = new_session(&catalog, MemoryStore::new(), None);

        type_word(&mut session, "ADOB");
        assert!(!session.submit_guess());
        assert!(session.state().guesses.is_empty());
        assert_eq!(session.state().current_guess, "ADOB");
    }

    #[test]
    fn winning_round_is_persisted_and_freezes_input() {
        let catalog = catalog(&["CRANE", "ADOBE", "PIXEL"]);
        let mut session = new_session(&catalog, MemoryStore::new(), None);
        let answer = session.state().current_word.to_string();

        assert!(guess(&mut session, &answer));

        let state = session.state();
        assert_eq!(state.status, GameStatus::Won);
        assert_eq!(state.won_words, vec![word(&answer)]);
        assert!(answer.chars().all(|c| state.correct_letters.contains(&c)));
        assert_eq!(stored(&session).status, GameStatus::Won);

        assert!(!session.input_letter('A'));
        assert!(!session.backspace());
        assert!(!session.submit_guess());
    }

    #[test]
    fn six_misses_lose_the_round() {
        let catalog = catalog(&["ADOBE", "PIXEL"]);
        let mut session = new_session(&catalog, MemoryStore::new(), None);
        let answer = session.state().current_word.clone();

        for _ in 0..6 {
            assert!(guess(&mut session, "ZZZZZ"));
        }

        assert_eq!(session.state().status, GameStatus::Lost);
        assert_eq!(session.state().lost_words, vec![answer]);
        assert!(!guess(&mut session, "ZZZZZ"));
    }

    #[test]
    fn new_game_keeps_tallies() {
        let catalog = catalog(&["ADOBE", "PIXEL", "BRUSH"]);
        let mut session = new_session(&catalog, MemoryStore::new(), None);
        let first = session.state().current_word.clone();
        guess(&mut session, first.text());

        session.start_new_game().unwrap();

        let state = session.state();
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.used_words.len(), 2);
        assert_eq!(state.used_words[0], first);
        assert_ne!(state.current_word, first);
        assert_eq!(state.used_words[1], state.current_word);
        assert_eq!(state.won_words, vec![first]);
        assert!(state.guesses.is_empty());
        assert!(state.guessed_letters.is_empty());
        assert_eq!(&stored(&session), session.state());
    }

    #[test]
    fn mid_round_new_game_abandons_the_round() {
        let catalog = catalog(&["ADOBE", "PIXEL", "BRUSH"]);
        let mut session = new_session(&catalog, MemoryStore::new(), None);
        type_word(&mut session, "ZZ");

        session.start_new_game().unwrap();

        assert!(session.state().current_guess.is_empty());
        assert!(session.state().won_words.is_empty());
        assert!(session.state().lost_words.is_empty());
        assert_eq!(session.state().used_words.len(), 2);
    }

    #[test]
    fn last_word_completes_then_restarts() {
        let catalog = catalog(&["ADOBE", "PIXEL"]);
        let mut session = new_session(&catalog, MemoryStore::new(), None);

        let first = session.state().current_word.clone();
        guess(&mut session, first.text());
        assert_eq!(session.state().status, GameStatus::Won);

        session.start_new_game().unwrap();
        let second = session.state().current_word.clone();
        assert_ne!(first, second);
        guess(&mut session, second.text());
        assert_eq!(session.state().status, GameStatus::Complete);
        assert_eq!(session.state().won_words, vec![first, second]);

        session.start_new_game().unwrap();
        let state = session.state();
        assert_eq!(state.status, GameStatus::Playing);
        assert_eq!(state.used_words.len(), 1);
        assert!(state.won_words.is_empty());
        assert!(state.lost_words.is_empty());
        assert_eq!(&stored(&session), session.state());
    }

    #[test]
    fn share_token_round_trips_through_session() {
        let catalog = catalog(&["ADOBE", "PIXEL", "BRUSH"]);
        let mut session = new_session(&catalog, MemoryStore::new(), None);
        guess(&mut session, "ZZZZZ");
        type_word(&mut session, "AB");

        let token = session.make_share_token().unwrap();
        let restored = new_session(&catalog, MemoryStore::new(), Some(&token));

        assert_eq!(restored.state().current_word, session.state().current_word);
        assert_eq!(restored.state().guesses, session.state().guesses);
        assert!(restored.state().current_guess.is_empty());
    }

    #[test]
    fn spent_shared_round_waits_for_a_new_game() {
        let catalog = catalog(&["ADOBE", "PIXEL", "BRUSH"]);

        let mut shared = GameState::with_word(word("BRUSH"));
        shared.used_words = vec![word("ADOBE"), word("PIXEL"), word("BRUSH")];
        shared.won_words = vec![word("ADOBE")];
        shared.lost_words = vec![word("PIXEL")];
        shared.guesses = words_from_slice(&["ZZZZZ"; 6]);
        let token = codec::to_share_token(&shared, &catalog).unwrap();

        let mut session = new_session(&catalog, MemoryStore::new(), Some(&token));
        assert_eq!(session.state().status, GameStatus::Playing);
        assert!(!session.input_letter('Z'));
        assert!(!guess(&mut session, "ZZZZZ"));
        assert_eq!(session.state().guesses.len(), 6);

        let record = session.store().entry(STORAGE_KEY).unwrap().to_string();
        let store = MemoryStore::with_entry(STORAGE_KEY, &record);
        let reopened = new_session(&catalog, store, None);
        assert_eq!(reopened.restored_from(), RestoreSource::Storage);
        assert_eq!(reopened.state().won_words, vec![word("ADOBE")]);
        assert_eq!(reopened.state().lost_words, vec![word("PIXEL")]);
        assert_eq!(reopened.state().used_words.len(), 3);

        session.start_new_game().unwrap();
        assert!(session.state().can_guess());
        assert_eq!(session.state().used_words.len(), 1);
    }

    struct BrokenStore;

    impl KeyValueStore for BrokenStore {
        fn get(&self, _key: &str) -> Result<Option<String>, StoreError> {
            Err(broken())
        }

        fn set(&mut self, _key: &str, _value: &str) -> Result<(), StoreError> {
            Err(broken())
        }

        fn remove(&mut self, _key: &str) -> Result<(), StoreError> {
            Err(broken())
        }
    }

    fn broken() -> StoreError {
        StoreError::Io {
            path: "broken".into(),
            source: std::io::Error::other("disk on fire"),
        }
    }

    #[test]
    fn storage_failures_never_stop_play() {
        let catalog = catalog(&["ADOBE"]);
        let mut session = Session::initialize_with_rng(&catalog, BrokenStore, None, rng()).unwrap();

        assert_eq!(session.restored_from(), RestoreSource::Fresh);
        assert!(guess(&mut session, "ADOBE"));
        assert_eq!(session.state().status, GameStatus::Complete);
        session.start_new_game().unwrap();
        assert_eq!(session.state().status, GameStatus::Playing);
    }

    #[test]
    fn empty_catalog_cannot_start() {
        let catalog = Catalog::new(Vec::new());
        assert!(matches!(
            Session::initialize_with_rng(&catalog, MemoryStore::new(), None, rng()),
            Err(GameError::ExhaustedCatalog)
        ));
    }
}
