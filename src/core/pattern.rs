//! Per-position tile feedback for a submitted guess
//!
//! Each tile of a guess row is scored independently against the answer:
//! - `Correct`: the letter sits at this exact position in the answer
//! - `Present`: the letter occurs somewhere else in the answer
//! - `Absent`: the letter does not occur in the answer
//!
//! Scoring is per position and does not budget repeated letters, matching the
//! letter-level feedback sets kept in the game state.

use super::{WORD_LEN, Word};

/// Feedback for a single tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tile {
    Correct,
    Present,
    Absent,
}

impl Tile {
    /// Emoji square used in round summaries
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback pattern for a whole guess row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern([Tile; WORD_LEN]);

impl Pattern {
    /// All tiles correct
    pub const PERFECT: Self = Self([Tile::Correct; WORD_LEN]);

    /// Score `guess` against `answer`
    ///
    /// # Examples
    /// ```
    /// use adoble::core::{Pattern, Tile, Word};
    ///
    /// let guess = Word::new("might").unwrap();
    /// let answer = Word::new("light").unwrap();
    /// let pattern = Pattern::score(&guess, &answer);
    ///
    /// assert_eq!(pattern.tiles()[0], Tile::Absent);
    /// assert_eq!(pattern.tiles()[1], Tile::Correct);
    /// assert!(!pattern.is_perfect());
    /// ```
    #[must_use]
    pub fn score(guess: &Word, answer: &Word) -> Self {
        let mut tiles = [Tile::Absent; WORD_LEN];

        for (i, (tile, letter)) in tiles.iter_mut().zip(guess.letters()).enumerate() {
            *tile = if answer.char_at(i) == letter {
                Tile::Correct
            } else if answer.has_letter(letter) {
                Tile::Present
            } else {
                Tile::Absent
            };
        }

        Self(tiles)
    }

    /// Tiles in position order
    #[inline]
    #[must_use]
    pub const fn tiles(&self) -> &[Tile; WORD_LEN] {
        &self.0
    }

    /// Check if this is a perfect match
    #[inline]
    #[must_use]
    pub fn is_perfect(self) -> bool {
        self == Self::PERFECT
    }

    /// Convert pattern to emoji string
    ///
    /// # Examples
    /// ```
    /// use adoble::core::Pattern;
    ///
    /// assert_eq!(Pattern::PERFECT.to_emoji(), "🟩🟩🟩🟩🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0.iter().map(|t| t.emoji()).collect()
    }
}
