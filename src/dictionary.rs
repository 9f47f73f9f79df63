//! Reading word lists: one word per line, UTF-8.

use crate::error::{Error, Result};
use crate::word::{Language, Word};
use log::{debug, info};
use std::path::Path;

/// Parse a word list, keeping file order and duplicates.
///
/// Lines are normalized for `language` first. Lines that are not exactly
/// [`crate::WORD_LENGTH`] letters of its alphabet are skipped; this drops
/// hyphenated words.
pub fn parse_words(text: &str, language: Language) -> Vec<Word> {
    let mut skipped = 0usize;
    let words: Vec<Word> = text
        .lines()
        .filter(|line| !line.trim().is_empty())
        .filter_map(|line| match language.parse_word(line) {
            Ok(word) => Some(word),
            Err(_) => {
                skipped += 1;
                None
            }
        })
        .collect();
    debug!("skipped {} lines that are not {}-letter words", skipped, crate::WORD_LENGTH);
    words
}

/// Load the dictionary file at `path`.
pub fn load_words(path: impl AsRef<Path>, language: Language) -> Result<Vec<Word>> {
    let path = path.as_ref();
    let text = std::fs::read_to_string(path).map_err(|source| Error::Dictionary {
        path: path.to_path_buf(),
        source,
    })?;
    let words = parse_words(&text, language);
    info!("loaded {} words from {}", words.len(), path.display());
    Ok(words)
}
