//! Static letter-frequency weights.
//!
//! A word is worth the sum, over its distinct letters, of how many dictionary
//! words contain that letter. Repeats of a letter earn geometrically less,
//! since a second copy narrows the search less than a fresh letter does.

use crate::word::Word;
use std::collections::HashMap;

/// For each letter, the number of dictionary words that contain it at least once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterFrequency {
    counts: HashMap<char, u32>,
}

impl LetterFrequency {
    pub fn from_words<'a>(words: impl IntoIterator<Item = &'a Word>) -> Self {
        let mut counts = HashMap::new();
        for word in words {
            for (c, _) in word.letter_counts() {
                *counts.entry(c).or_insert(0) += 1;
            }
        }
        Self { counts }
    }

    /// `N(c)`; zero for letters no word contains.
    pub fn get(&self, c: char) -> u32 {
        self.counts.get(&c).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

/// `1 + 1/2 + ... + (1/2)^(m-1)`, in closed form `2 * (1 - 2^-m)`.
pub fn repeat_penalty(m: usize) -> f64 {
    2.0 * (1.0 - 0.5_f64.powi(m as i32))
}

pub fn score_word(word: &Word, frequency: &LetterFrequency) -> f64 {
    word.letter_counts()
        .into_iter()
        .map(|(c, m)| frequency.get(c) as f64 * repeat_penalty(m))
        .sum()
}
