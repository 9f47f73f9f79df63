//! Fixed-length words and the languages they are spelled in.

use crate::error::{Error, Result};
use crate::feedback::MarkSymbols;
use crate::WORD_LENGTH;
use std::fmt;
use std::ops::Index;

/// A word of exactly [`WORD_LENGTH`] characters.
///
/// Words are stored already normalized; build them through
/// [`Language::parse_word`] or the dictionary loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Word([char; WORD_LENGTH]);

impl Word {
    pub fn new(chars: [char; WORD_LENGTH]) -> Self {
        Self(chars)
    }

    pub fn chars(&self) -> &[char; WORD_LENGTH] {
        &self.0
    }

    /// Number of times `c` occurs in the word.
    pub fn count(&self, c: char) -> usize {
        self.0.iter().filter(|&&x| x == c).count()
    }

    pub fn contains(&self, c: char) -> bool {
        self.0.contains(&c)
    }

    /// Distinct letters with their multiplicity, in order of first occurrence.
    pub fn letter_counts(&self) -> Vec<(char, usize)> {
        let mut counts: Vec<(char, usize)> = Vec::with_capacity(WORD_LENGTH);
        for &c in &self.0 {
            match counts.iter_mut().find(|(x, _)| *x == c) {
                Some((_, n)) => *n += 1,
                None => counts.push((c, 1)),
            }
        }
        counts
    }
}

impl Index<usize> for Word {
    type Output = char;

    fn index(&self, index: usize) -> &char {
        &self.0[index]
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0 {
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

/// The alphabet, normalization and feedback symbols of one game variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// "5 букв": Cyrillic letters with `ё` folded into `е`.
    #[default]
    Russian,
    /// Classic Wordle: ASCII `a`-`z`.
    English,
}

impl Language {
    /// Lowercase, trim, and fold letter variants the game treats as equal.
    pub fn normalize(self, s: &str) -> String {
        let lower = s.trim().to_lowercase();
        match self {
            Language::Russian => lower.replace('ё', "е"),
            Language::English => lower,
        }
    }

    /// Whether `c` belongs to the alphabet once normalized.
    pub fn is_letter(self, c: char) -> bool {
        match self {
            Language::Russian => ('а'..='я').contains(&c),
            Language::English => c.is_ascii_lowercase(),
        }
    }

    pub fn symbols(self) -> MarkSymbols {
        match self {
            Language::Russian => MarkSymbols::RUSSIAN,
            Language::English => MarkSymbols::LATIN,
        }
    }

    /// Normalize `s` and check it is a [`WORD_LENGTH`]-letter word of this alphabet.
    pub fn parse_word(self, s: &str) -> Result<Word> {
        let normalized = self.normalize(s);
        let chars: Vec<char> = normalized.chars().collect();
        let invalid = |reason: String| Error::InvalidWord {
            word: s.to_string(),
            reason,
        };

        if let Some(&c) = chars.iter().find(|&&c| !self.is_letter(c)) {
            return Err(invalid(format!("'{}' is not a letter of the alphabet", c)));
        }
        let chars: [char; WORD_LENGTH] = chars.try_into().map_err(|chars: Vec<char>| {
            invalid(format!(
                "expected {} letters, got {}",
                WORD_LENGTH,
                chars.len()
            ))
        })?;
        Ok(Word(chars))
    }
}
