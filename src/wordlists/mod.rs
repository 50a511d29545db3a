//! Word catalog
//!
//! The catalog is the fixed, ordered vocabulary secret words are drawn from.
//! Order matters: share tokens refer to the current word by catalog index.

mod embedded;
pub mod loader;

pub use embedded::{CATALOG, CATALOG_COUNT};

use crate::core::Word;
use std::path::Path;

/// Ordered, immutable list of candidate secret words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    words: Vec<Word>,
}

impl Catalog {
    /// Build a catalog from words, dropping repeats (first occurrence wins)
    #[must_use]
    pub fn new(words: impl IntoIterator<Item = Word>) -> Self {
        let mut unique: Vec<Word> = Vec::new();
        for word in words {
            if !unique.contains(&word) {
                unique.push(word);
            }
        }
        Self { words: unique }
    }

    /// The catalog compiled into the binary
    ///
    /// # Examples
    /// ```
    /// use adoble::wordlists::{CATALOG_COUNT, Catalog};
    ///
    /// let catalog = Catalog::embedded();
    /// assert_eq!(catalog.len(), CATALOG_COUNT);
    /// ```
    #[must_use]
    pub fn embedded() -> Self {
        Self::new(loader::words_from_slice(CATALOG))
    }

    /// Load a catalog from a word-per-line file
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be read.
    pub fn from_file<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        loader::load_from_file(path).map(Self::new)
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Word at a catalog index
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Word> {
        self.words.get(index)
    }

    /// Catalog index of a word
    #[must_use]
    pub fn index_of(&self, word: &Word) -> Option<usize> {
        self.words.iter().position(|w| w == word)
    }

    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_count_matches_const() {
        assert_eq!(CATALOG.len(), CATALOG_COUNT);
    }

    #[test]
    fn catalog_entries_are_valid_words() {
        for &word in CATALOG {
            assert_eq!(word.len(), 5, "Word '{word}' is not 5 letters");
            assert!(
                word.chars().all(|c| c.is_ascii_uppercase()),
                "Word '{word}' contains non-uppercase chars"
            );
        }
    }

    #[test]
    fn embedded_catalog_has_no_duplicates() {
        let catalog = Catalog::embedded();
        assert_eq!(catalog.len(), CATALOG_COUNT);
        assert!(!catalog.is_empty());
    }

    #[test]
    fn catalog_drops_repeats_keeping_order() {
        let catalog = Catalog::new(loader::words_from_slice(&["ADOBE", "PIXEL", "ADOBE", "BRUSH"]));
        let texts: Vec<&str> = catalog.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["ADOBE", "PIXEL", "BRUSH"]);
    }

    #[test]
    fn catalog_index_lookup() {
        let catalog = Catalog::new(loader::words_from_slice(&["ADOBE", "PIXEL", "BRUSH"]));
        let pixel = Word::new("PIXEL").unwrap();

        assert_eq!(catalog.index_of(&pixel), Some(1));
        assert_eq!(catalog.get(1), Some(&pixel));
        assert_eq!(catalog.get(3), None);
        assert_eq!(catalog.index_of(&Word::new("CRANE").unwrap()), None);
        assert!(catalog.contains(&pixel));
    }
}
