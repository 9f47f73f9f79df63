//! Feedback marks for a guess.
//!
//! This module handles parsing the marks a player types in and computing the
//! authoritative marks for a guess against a known secret.

use crate::error::{Error, Result};
use crate::word::Word;
use crate::WORD_LENGTH;

/// Represents the feedback for a single letter position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Correct letter in correct position (green)
    Exact,
    /// Correct letter in wrong position (yellow)
    Present,
    /// Letter not in word, or a surplus repeat of one that is (gray)
    Absent,
}

impl Mark {
    /// Convert to a character for display
    pub fn to_emoji(self) -> char {
        match self {
            Mark::Exact => '🟩',
            Mark::Present => '🟨',
            Mark::Absent => '⬛',
        }
    }
}

/// The characters a player types for each mark.
///
/// The first character of each list is the canonical one used for display;
/// the rest are accepted aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MarkSymbols {
    pub exact: &'static [char],
    pub present: &'static [char],
    pub absent: &'static [char],
}

impl MarkSymbols {
    /// ж = буква на месте, б = буква есть, с = буквы нет.
    pub const RUSSIAN: Self = Self {
        exact: &['ж'],
        present: &['б'],
        absent: &['с'],
    };

    /// g=green, y=yellow, b=black/gray, or the digits 2/1/0.
    pub const LATIN: Self = Self {
        exact: &['g', '2'],
        present: &['y', '1'],
        absent: &['b', 'x', '0'],
    };

    pub fn mark(&self, c: char) -> Option<Mark> {
        let c = c.to_lowercase().next().unwrap_or(c);
        if self.exact.contains(&c) {
            Some(Mark::Exact)
        } else if self.present.contains(&c) {
            Some(Mark::Present)
        } else if self.absent.contains(&c) {
            Some(Mark::Absent)
        } else {
            None
        }
    }

    pub fn symbol(&self, mark: Mark) -> char {
        let list = match mark {
            Mark::Exact => self.exact,
            Mark::Present => self.present,
            Mark::Absent => self.absent,
        };
        list.first().copied().unwrap_or('?')
    }
}

/// The marks for one guess, aligned by position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LENGTH]);

impl Feedback {
    /// The feedback indicating all correct (winning)
    pub const ALL_EXACT: Self = Self([Mark::Exact; WORD_LENGTH]);

    pub fn new(marks: [Mark; WORD_LENGTH]) -> Self {
        Self(marks)
    }

    pub fn marks(&self) -> &[Mark; WORD_LENGTH] {
        &self.0
    }

    /// Calculate the feedback for a guess against a secret word.
    ///
    /// This implements the standard game rules:
    /// - Exact: letter is in the correct position
    /// - Present: letter is in the word but wrong position
    /// - Absent: letter is not in the word (or all instances accounted for)
    pub fn calculate(guess: &Word, secret: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LENGTH];
        let mut unmatched: [Option<char>; WORD_LENGTH] = [None; WORD_LENGTH];

        for i in 0..WORD_LENGTH {
            if guess[i] == secret[i] {
                marks[i] = Mark::Exact;
            } else {
                unmatched[i] = Some(secret[i]);
            }
        }

        for i in 0..WORD_LENGTH {
            if marks[i] == Mark::Exact {
                continue;
            }
            if let Some(slot) = unmatched.iter_mut().find(|s| **s == Some(guess[i])) {
                *slot = None;
                marks[i] = Mark::Present;
            }
        }

        Self(marks)
    }

    /// Check if this feedback represents a win (all exact)
    pub fn is_win(&self) -> bool {
        *self == Self::ALL_EXACT
    }

    /// Parse feedback typed with the given symbols, e.g. "жжбсб" or "gybbb".
    pub fn parse(s: &str, symbols: &MarkSymbols) -> Result<Self> {
        let invalid = |reason: String| Error::InvalidFeedback {
            feedback: s.to_string(),
            reason,
        };

        let marks = s
            .trim()
            .chars()
            .map(|c| {
                symbols
                    .mark(c)
                    .ok_or_else(|| invalid(format!("unknown mark '{}'", c)))
            })
            .collect::<Result<Vec<_>>>()?;
        let marks: [Mark; WORD_LENGTH] = marks.try_into().map_err(|marks: Vec<Mark>| {
            invalid(format!(
                "expected {} marks, got {}",
                WORD_LENGTH,
                marks.len()
            ))
        })?;
        Ok(Self(marks))
    }

    /// Render with the canonical symbol of each mark.
    pub fn to_symbol_string(&self, symbols: &MarkSymbols) -> String {
        self.0.iter().map(|&m| symbols.symbol(m)).collect()
    }

    /// Display as emoji string
    pub fn to_emoji_string(&self) -> String {
        self.0.iter().map(|m| m.to_emoji()).collect()
    }
}

impl std::fmt::Display for Feedback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_emoji_string())
    }
}
