//! # Five Letters
//!
//! An assistant for "5 букв", the Russian five-letter word game, and for
//! classic Wordle.
//!
//! The solver keeps one [`Constraints`] value per game and folds each round's
//! feedback into it. Dictionary words are ranked once by a static
//! letter-frequency score, and the best guess is the highest-ranked word the
//! constraints still allow.

pub mod constraints;
pub mod dictionary;
pub mod error;
pub mod feedback;
pub mod score;
pub mod solver;
pub mod stats;
mod update;
pub mod word;

pub use constraints::Constraints;
pub use dictionary::{load_words, parse_words};
pub use error::{Error, Result};
pub use feedback::{Feedback, Mark, MarkSymbols};
pub use score::{repeat_penalty, score_word, LetterFrequency};
pub use solver::{benchmark, BenchmarkReport, GameOutcome, RankedDictionary, ScoredWord, Session};
pub use stats::Distribution;
pub use word::{Language, Word};

/// Word length for the game
pub const WORD_LENGTH: usize = 5;
