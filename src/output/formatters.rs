//! Formatting utilities shared by the terminal front ends

use crate::core::{Pattern, Word};
use crate::game::{GameState, GameStatus, MAX_GUESSES};

/// Format a scored guess as an emoji row
#[must_use]
pub fn pattern_to_emoji(guess: &Word, answer: &Word) -> String {
    Pattern::score(guess, answer).to_emoji()
}

/// Emoji summary of the round so far, one row per guess
#[must_use]
pub fn round_summary(state: &GameState) -> String {
    state
        .guesses
        .iter()
        .map(|guess| pattern_to_emoji(guess, &state.current_word))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Attempts used to solve the round as `n/6`, or `X/6` when it was not solved
///
/// # Examples
/// ```
/// use adoble::core::Word;
/// use adoble::game::GameState;
/// use adoble::output::formatters::round_score;
///
/// let mut state = GameState::with_word(Word::new("LIGHT").unwrap());
/// state.guesses = vec![Word::new("MIGHT").unwrap(), Word::new("LIGHT").unwrap()];
/// assert_eq!(round_score(&state), "2/6");
/// ```
#[must_use]
pub fn round_score(state: &GameState) -> String {
    let solved_at = state
        .guesses
        .iter()
        .position(|guess| Pattern::score(guess, &state.current_word).is_perfect());

    match solved_at {
        Some(index) => format!("{}/{MAX_GUESSES}", index + 1),
        None => format!("X/{MAX_GUESSES}"),
    }
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: usize, max: usize, width: usize) -> String {
    let filled = if max == 0 {
        0
    } else {
        (value.min(max) * width) / max
    };

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Letters separated by spaces, `-` when there are none
#[must_use]
pub fn letter_list(letters: &[char]) -> String {
    if letters.is_empty() {
        return "-".to_string();
    }

    letters
        .iter()
        .map(char::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Words separated by commas, `-` when there are none
#[must_use]
pub fn word_list(words: &[Word]) -> String {
    if words.is_empty() {
        return "-".to_string();
    }

    words
        .iter()
        .map(Word::text)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Outcome line for a finished round, `None` while playing
#[must_use]
pub fn round_message(status: GameStatus) -> Option<&'static str> {
    match status {
        GameStatus::Playing => None,
        GameStatus::Won => Some("You guessed it!"),
        GameStatus::Lost => Some("Out of guesses this round."),
        GameStatus::Complete => Some("Game over - no words left."),
    }
}
