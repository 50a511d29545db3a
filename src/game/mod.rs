//! Game-state engine
//!
//! Pure transitions over `GameState` snapshots: word selection, guess
//! evaluation and round resets. Nothing here performs I/O.

pub mod evaluator;
pub mod selector;
pub mod state;

pub use evaluator::evaluate;
pub use selector::pick_word;
pub use state::{GameState, GameStatus, LetterSet, LetterStatus, MAX_GUESSES};

use thiserror::Error;

/// Precondition violations in the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("every catalog word has already been used")]
    ExhaustedCatalog,
    #[error("round is over (status: {0})")]
    RoundOver(GameStatus),
    #[error("every guess of this round is used")]
    NoGuessesLeft,
}
