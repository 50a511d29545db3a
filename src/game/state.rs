//! Game state snapshot
//!
//! `GameState` is plain data. It is replaced wholesale on every transition:
//! the evaluator produces a new snapshot per guess and `next_round` produces a
//! new snapshot per round.

use super::GameError;
use super::selector::pick_word;
use crate::core::{WORD_LEN, Word};
use crate::wordlists::Catalog;
use rand::Rng;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Attempts allowed per round
pub const MAX_GUESSES: usize = 6;

/// Letter-level feedback set
pub type LetterSet = FxHashSet<char>;

/// Status of the active round
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameStatus {
    #[default]
    Playing,
    Won,
    Lost,
    /// Every catalog word has been played
    Complete,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Playing => "playing",
            Self::Won => "won",
            Self::Lost => "lost",
            Self::Complete => "complete",
        };
        f.write_str(name)
    }
}

/// What is known about a single letter, in display precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterStatus {
    Correct,
    WrongPosition,
    NotInWord,
    Unused,
}

/// Canonical snapshot of a play session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    pub current_word: Word,
    pub current_guess: String,
    pub guesses: Vec<Word>,
    pub status: GameStatus,
    pub used_words: Vec<Word>,
    pub won_words: Vec<Word>,
    pub lost_words: Vec<Word>,
    pub guessed_letters: LetterSet,
    pub correct_letters: LetterSet,
    pub wrong_pos_letters: LetterSet,
    pub not_in_word_letters: LetterSet,
}

impl GameState {
    /// New session whose first secret is `word`
    ///
    /// Session tallies are empty and `word` is the only used word.
    #[must_use]
    pub fn with_word(word: Word) -> Self {
        Self {
            used_words: vec![word.clone()],
            current_word: word,
            current_guess: String::new(),
            guesses: Vec::new(),
            status: GameStatus::Playing,
            won_words: Vec::new(),
            lost_words: Vec::new(),
            guessed_letters: LetterSet::default(),
            correct_letters: LetterSet::default(),
            wrong_pos_letters: LetterSet::default(),
            not_in_word_letters: LetterSet::default(),
        }
    }

    /// Brand-new session with a randomly chosen first word
    ///
    /// # Errors
    ///
    /// Returns `GameError::ExhaustedCatalog` if the catalog is empty.
    pub fn fresh<R: Rng + ?Sized>(catalog: &Catalog, rng: &mut R) -> Result<Self, GameError> {
        pick_word(catalog, &[], rng).map(Self::with_word)
    }

    /// Next round of the same session
    ///
    /// Picks an unused word, clears round-scoped fields and keeps the won/lost
    /// tallies. `used_words` gains the new word.
    ///
    /// # Errors
    ///
    /// Returns `GameError::ExhaustedCatalog` when every catalog word is used.
    pub fn next_round<R: Rng + ?Sized>(
        &self,
        catalog: &Catalog,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let word = pick_word(catalog, &self.used_words, rng)?;

        let mut used_words = self.used_words.clone();
        used_words.push(word.clone());

        Ok(Self {
            used_words,
            won_words: self.won_words.clone(),
            lost_words: self.lost_words.clone(),
            ..Self::with_word(word)
        })
    }

    /// Feedback for one letter, correct taking precedence
    #[must_use]
    pub fn letter_status(&self, letter: char) -> LetterStatus {
        if self.correct_letters.contains(&letter) {
            LetterStatus::Correct
        } else if self.wrong_pos_letters.contains(&letter) {
            LetterStatus::WrongPosition
        } else if self.not_in_word_letters.contains(&letter) {
            LetterStatus::NotInWord
        } else {
            LetterStatus::Unused
        }
    }

    /// Sorted letters known to be in the word
    #[must_use]
    pub fn matched_letters(&self) -> Vec<char> {
        let mut letters: Vec<char> = self
            .correct_letters
            .union(&self.wrong_pos_letters)
            .copied()
            .collect();
        letters.sort_unstable();
        letters
    }

    /// Sorted letters known to be absent
    #[must_use]
    pub fn absent_letters(&self) -> Vec<char> {
        sorted(&self.not_in_word_letters)
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        MAX_GUESSES.saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub fn is_round_over(&self) -> bool {
        self.status != GameStatus::Playing
    }

    /// Whether another guess can be typed and submitted
    ///
    /// A shared round restores as `Playing` even when all its guesses are
    /// spent. Such a round only accepts a new game.
    #[must_use]
    pub fn can_guess(&self) -> bool {
        self.status == GameStatus::Playing && self.guesses.len() < MAX_GUESSES
    }

    /// Whether the player may move on to the next word
    ///
    /// Skipping a word before guessing anything is not allowed.
    #[must_use]
    pub fn can_start_new_game(&self) -> bool {
        self.is_round_over()
            || !self.guessed_letters.is_empty()
            || !self.guesses.is_empty()
    }

    /// Whether the in-progress guess has all its letters
    #[must_use]
    pub fn guess_is_full(&self) -> bool {
        self.current_guess.len() == WORD_LEN
    }
}

/// Letters of a set in alphabetical order
#[must_use]
pub fn sorted(set: &LetterSet) -> Vec<char> {
    let mut letters: Vec<char> = set.iter().copied().collect();
    letters.sort_unstable();
    letters
}
