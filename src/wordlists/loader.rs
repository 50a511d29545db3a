//! Catalog loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use crate::core::Word;
use std::fs;
use std::io;
use std::path::Path;

/// Load words from a file
///
/// Returns a vector of valid Word instances, skipping blank lines, `#` comments
/// and any invalid entries.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be read or opened.
///
/// # Examples
/// ```no_run
/// use adoble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/catalog.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> io::Result<Vec<Word>> {
    let content = fs::read_to_string(path)?;
    Ok(words_from_lines(content.lines()))
}

/// Convert embedded string slice to Word vector
///
/// # Examples
/// ```
/// use adoble::wordlists::loader::words_from_slice;
/// use adoble::wordlists::CATALOG;
///
/// let words = words_from_slice(CATALOG);
/// assert_eq!(words.len(), CATALOG.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<Word> {
    words_from_lines(slice.iter().copied())
}

fn words_from_lines<'s>(lines: impl Iterator<Item = &'s str>) -> Vec<Word> {
    lines
        .filter_map(|line| {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                None
            } else {
                Word::new(trimmed).ok()
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn words_from_slice_converts_valid_words() {
        let input = &["adobe", "pixel", "BRUSH"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].text(), "ADOBE");
        assert_eq!(words[1].text(), "PIXEL");
        assert_eq!(words[2].text(), "BRUSH");
    }

    #[test]
    fn words_from_slice_skips_invalid() {
        let input = &["adobe", "toolong", "abc", "pixel"];
        let words = words_from_slice(input);

        assert_eq!(words.len(), 2);
        assert_eq!(words[0].text(), "ADOBE");
        assert_eq!(words[1].text(), "PIXEL");
    }

    #[test]
    fn words_from_slice_empty() {
        let input: &[&str] = &[];
        assert!(words_from_slice(input).is_empty());
    }

    #[test]
    fn load_from_file_skips_comments_and_blanks() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "# theme: photography").unwrap();
        writeln!(file, "photo").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "  light  ").unwrap();
        writeln!(file, "lens").unwrap();

        let words = load_from_file(file.path()).unwrap();
        assert_eq!(words, vec![Word::new("PHOTO").unwrap(), Word::new("LIGHT").unwrap()]);
    }

    #[test]
    fn load_from_missing_file_is_error() {
        assert!(load_from_file("/definitely/not/here.txt").is_err());
    }
}
