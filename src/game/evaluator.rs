//! Guess evaluation
//!
//! Turns a submitted guess into the next game state snapshot.
//!
//! # Feedback rules
//!
//! For every position of the guess:
//! 1. Exact match: the letter joins `correct_letters` and leaves
//!    `wrong_pos_letters`.
//! 2. Letter elsewhere in the word: the letter joins `wrong_pos_letters`,
//!    unless it is already correct. A confirmed letter is never downgraded.
//! 3. Otherwise the letter joins `not_in_word_letters`.
//!
//! Feedback sets are per letter, not per position, so a repeated letter that is
//! both placed and misplaced in one guess only ever shows as correct.

use super::GameError;
use super::state::{GameState, GameStatus, MAX_GUESSES};
use crate::core::Word;
use tracing::debug;

/// Evaluate `guess` against `state` and return the next snapshot
///
/// `catalog_size` decides whether a finished round also finishes the session:
/// once every catalog word has been used, the terminal status is `Complete`
/// rather than `Won` or `Lost`.
///
/// # Errors
///
/// Returns `GameError::RoundOver` if the round is not being played and
/// `GameError::NoGuessesLeft` if it already holds `MAX_GUESSES` guesses.
///
/// # Examples
/// ```
/// use adoble::core::Word;
/// use adoble::game::{GameState, GameStatus, evaluate};
///
/// let state = GameState::with_word(Word::new("CRANE").unwrap());
/// let next = evaluate(&state, &Word::new("CRANE").unwrap(), 10).unwrap();
///
/// assert_eq!(next.status, GameStatus::Won);
/// assert_eq!(next.correct_letters.len(), 5);
/// ```
pub fn evaluate(
    state: &GameState,
    guess: &Word,
    catalog_size: usize,
) -> Result<GameState, GameError> {
    if state.status != GameStatus::Playing {
        return Err(GameError::RoundOver(state.status));
    }
    if state.guesses.len() >= MAX_GUESSES {
        return Err(GameError::NoGuessesLeft);
    }

    let mut next = state.clone();
    let answer = &state.current_word;

    for (i, letter) in guess.letters().enumerate() {
        if answer.char_at(i) == letter {
            next.correct_letters.insert(letter);
            next.wrong_pos_letters.remove(&letter);
        } else if answer.has_letter(letter) {
            if !next.correct_letters.contains(&letter) {
                next.wrong_pos_letters.insert(letter);
            }
        } else {
            next.not_in_word_letters.insert(letter);
        }
    }

    next.guessed_letters.extend(guess.letters());
    next.guesses.push(guess.clone());
    next.current_guess.clear();

    let won = guess == answer;
    let lost = !won && next.guesses.len() >= MAX_GUESSES;
    let exhausted = next.used_words.len() >= catalog_size;

    if won {
        next.won_words.push(answer.clone());
        next.status = if exhausted {
            GameStatus::Complete
        } else {
            GameStatus::Won
        };
    } else if lost {
        next.lost_words.push(answer.clone());
        next.status = if exhausted {
            GameStatus::Complete
        } else {
            GameStatus::Lost
        };
    }

    debug!(
        guess = %guess,
        attempt = next.guesses.len(),
        status = %next.status,
        "guess evaluated"
    );

    Ok(next)
}
