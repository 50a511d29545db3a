//! Secret word selection

use super::GameError;
use crate::core::Word;
use crate::wordlists::Catalog;
use rand::Rng;
use rand::seq::IndexedRandom;

/// Pick an unused catalog word uniformly at random
///
/// # Errors
///
/// Returns `GameError::ExhaustedCatalog` when `used` covers the whole catalog.
/// Callers starting a new round must check for exhaustion first and begin a new
/// session instead.
///
/// # Examples
/// ```
/// use adoble::core::Word;
/// use adoble::game::pick_word;
/// use adoble::wordlists::{Catalog, loader::words_from_slice};
///
/// let catalog = Catalog::new(words_from_slice(&["ADOBE", "PIXEL"]));
/// let used = [Word::new("ADOBE").unwrap()];
///
/// let word = pick_word(&catalog, &used, &mut rand::rng()).unwrap();
/// assert_eq!(word.text(), "PIXEL");
/// ```
pub fn pick_word<R: Rng + ?Sized>(
    catalog: &Catalog,
    used: &[Word],
    rng: &mut R,
) -> Result<Word, GameError> {
    let unused: Vec<&Word> = catalog
        .words()
        .iter()
        .filter(|word| !used.contains(word))
        .collect();

    unused
        .choose(rng)
        .map(|&word| word.clone())
        .ok_or(GameError::ExhaustedCatalog)
}
