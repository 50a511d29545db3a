//! Storage form of the game state
//!
//! The stored record is a JSON object with camelCase field names. Letter sets
//! become arrays of one-letter strings. Every field is optional on the way in;
//! missing fields take their empty default.

use super::CodecError;
use crate::core::{WORD_LEN, Word};
use crate::game::state::sorted;
use crate::game::{GameState, GameStatus, LetterSet, MAX_GUESSES};
use crate::wordlists::Catalog;
use serde::{Deserialize, Serialize};

/// Persisted record of a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoredState {
    pub current_word: Option<Word>,
    pub current_guess: String,
    pub guesses: Vec<Word>,
    pub status: GameStatus,
    pub used_words: Vec<Word>,
    pub won_words: Vec<Word>,
    pub lost_words: Vec<Word>,
    pub guessed_letters: Vec<char>,
    pub correct_letters: Vec<char>,
    pub wrong_pos_letters: Vec<char>,
    pub not_in_word_letters: Vec<char>,
}

/// Convert a state into its storage form
///
/// Letter sets are written in alphabetical order so records are stable.
#[must_use]
pub fn to_storage_form(state: &GameState) -> StoredState {
    StoredState {
        current_word: Some(state.current_word.clone()),
        current_guess: state.current_guess.clone(),
        guesses: state.guesses.clone(),
        status: state.status,
        used_words: state.used_words.clone(),
        won_words: state.won_words.clone(),
        lost_words: state.lost_words.clone(),
        guessed_letters: sorted(&state.guessed_letters),
        correct_letters: sorted(&state.correct_letters),
        wrong_pos_letters: sorted(&state.wrong_pos_letters),
        not_in_word_letters: sorted(&state.not_in_word_letters),
    }
}

/// Rebuild a state from its storage form
///
/// Letters are uppercased and anything that is not an ASCII letter is dropped.
/// The in-progress guess is cleaned the same way and cut to `WORD_LEN`.
///
/// # Errors
///
/// Returns `CodecError::MissingCurrentWord` or `CodecError::WordNotInCatalog`
/// when the record has no playable secret word, and
/// `CodecError::TooManyGuesses` when it holds more guesses than a round allows.
pub fn from_storage_form(record: StoredState, catalog: &Catalog) -> Result<GameState, CodecError> {
    let current_word = record.current_word.ok_or(CodecError::MissingCurrentWord)?;
    if !catalog.contains(&current_word) {
        return Err(CodecError::WordNotInCatalog(current_word.to_string()));
    }
    if record.guesses.len() > MAX_GUESSES {
        return Err(CodecError::TooManyGuesses(record.guesses.len()));
    }

    Ok(GameState {
        current_word,
        current_guess: clean_letters(record.current_guess.chars())
            .take(WORD_LEN)
            .collect(),
        guesses: record.guesses,
        status: record.status,
        used_words: record.used_words,
        won_words: record.won_words,
        lost_words: record.lost_words,
        guessed_letters: letter_set(record.guessed_letters),
        correct_letters: letter_set(record.correct_letters),
        wrong_pos_letters: letter_set(record.wrong_pos_letters),
        not_in_word_letters: letter_set(record.not_in_word_letters),
    })
}

/// Serialize a state to the JSON text kept in storage
///
/// # Errors
///
/// Returns `CodecError::Json` if serialization fails.
pub fn encode_record(state: &GameState) -> Result<String, CodecError> {
    Ok(serde_json::to_string(&to_storage_form(state))?)
}

/// Parse stored JSON text back into a state
///
/// # Errors
///
/// Returns `CodecError::Json` for unparseable text or mistyped fields, and the
/// errors of [`from_storage_form`] for records that parse but cannot be played.
pub fn decode_record(text: &str, catalog: &Catalog) -> Result<GameState, CodecError> {
    let record: StoredState = serde_json::from_str(text)?;
    from_storage_form(record, catalog)
}

fn clean_letters(letters: impl Iterator<Item = char>) -> impl Iterator<Item = char> {
    letters
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
}

fn letter_set(letters: Vec<char>) -> LetterSet {
    clean_letters(letters.into_iter()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::loader::words_from_slice;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    fn catalog() -> Catalog {
        Catalog::new(words_from_slice(&["ADOBE", "PIXEL", "BRUSH", "PHOTO"]))
    }

    fn sample_state() -> GameState {
        let mut state = GameState::with_word(word("BRUSH"));
        state.guesses = vec![word("ADOBE")];
        state.current_guess = "PHO".to_string();
        state.used_words = vec![word("ADOBE"), word("PIXEL"), word("BRUSH")];
        state.won_words = vec![word("ADOBE")];
        state.lost_words = vec![word("PIXEL")];
        state.guessed_letters = "ADOBE".chars().collect();
        state.correct_letters = ['B'].into_iter().collect();
        state.wrong_pos_letters = ['A'].into_iter().collect();
        state.not_in_word_letters = ['D', 'O', 'E'].into_iter().collect();
        state
    }

    #[test]
    fn storage_round_trip() {
        let state = sample_state();
        let restored = from_storage_form(to_storage_form(&state), &catalog()).unwrap();
        assert_eq!(restored, state);
    }

    #[test]
    fn record_round_trip_through_json() {
        let state = sample_state();
        let text = encode_record(&state).unwrap();
        assert_eq!(decode_record(&text, &catalog()).unwrap(), state);
    }

    #[test]
    fn record_uses_camel_case_and_letter_arrays() {
        let text = encode_record(&sample_state()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["currentWord"], "BRUSH");
        assert_eq!(value["currentGuess"], "PHO");
        assert_eq!(value["status"], "playing");
        assert_eq!(value["usedWords"], serde_json::json!(["ADOBE", "PIXEL", "BRUSH"]));
        assert_eq!(value["guessedLetters"], serde_json::json!(["A", "B", "D", "E", "O"]));
        assert_eq!(value["notInWordLetters"], serde_json::json!(["D", "E", "O"]));
        assert_eq!(value["wrongPosLetters"], serde_json::json!(["A"]));
    }

    #[test]
    fn missing_fields_default_to_empty() {
        let state = decode_record(r#"{"currentWord":"PIXEL"}"#, &catalog()).unwrap();

        assert_eq!(state.current_word, "PIXEL");
        assert_eq!(state.status, GameStatus::Playing);
        assert!(state.guesses.is_empty());
        assert!(state.current_guess.is_empty());
        assert!(state.used_words.is_empty());
        assert!(state.guessed_letters.is_empty());
        assert!(state.correct_letters.is_empty());
        assert!(state.wrong_pos_letters.is_empty());
        assert!(state.not_in_word_letters.is_empty());
    }

    #[test]
    fn record_from_the_web_game_is_accepted() {
        let text = r#"{
            "currentWord": "PHOTO",
            "guesses": ["ADOBE"],
            "currentGuess": "",
            "status": "playing",
            "usedWords": ["PHOTO"],
            "wonWords": [],
            "lostWords": [],
            "guessedLetters": ["A", "D", "O", "B", "E"],
            "correctLetters": [],
            "wrongPosLetters": ["O"],
            "notInWordLetters": ["A", "D", "B", "E"]
        }"#;

        let state = decode_record(text, &catalog()).unwrap();
        assert_eq!(state.guesses, vec![word("ADOBE")]);
        assert!(state.wrong_pos_letters.contains(&'O'));
        assert_eq!(state.not_in_word_letters.len(), 4);
    }

    #[test]
    fn letters_are_normalized() {
        let text = r#"{"currentWord":"PIXEL","currentGuess":"ph0tos!","correctLetters":["p","1","X"]}"#;
        let state = decode_record(text, &catalog()).unwrap();

        assert_eq!(state.current_guess, "PHTOS");
        assert_eq!(sorted(&state.correct_letters), vec!['P', 'X']);
    }

    #[test]
    fn malformed_records_are_rejected() {
        let catalog = catalog();

        assert!(matches!(
            decode_record("not json", &catalog),
            Err(CodecError::Json(_))
        ));
        assert!(matches!(
            decode_record(r#"{"currentWord":"PIXEL","guesses":"ADOBE"}"#, &catalog),
            Err(CodecError::Json(_))
        ));
        assert!(matches!(
            decode_record(r#"{"currentWord":"PIXEL","status":"paused"}"#, &catalog),
            Err(CodecError::Json(_))
        ));
        assert!(matches!(
            decode_record(r#"{"currentWord":"PIX"}"#, &catalog),
            Err(CodecError::Json(_))
        ));
        assert!(matches!(
            decode_record("{}", &catalog),
            Err(CodecError::MissingCurrentWord)
        ));
        assert!(matches!(
            decode_record(r#"{"currentWord":"CRANE"}"#, &catalog),
            Err(CodecError::WordNotInCatalog(w)) if w == "CRANE"
        ));
    }

    #[test]
    fn too_many_guesses_is_rejected() {
        let text = r#"{"currentWord":"PIXEL","guesses":["ADOBE","ADOBE","ADOBE","ADOBE","ADOBE","ADOBE","ADOBE"]}"#;
        assert!(matches!(
            decode_record(text, &catalog()),
            Err(CodecError::TooManyGuesses(7))
        ));
    }
}
