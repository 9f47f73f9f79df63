//! Folding one round of feedback into [`Constraints`].
//!
//! Repeated letters are the hard part. A gray mark on a letter that is also
//! green or yellow elsewhere in the same guess means "no more copies of this
//! letter", not "this letter does not occur". The update therefore tallies
//! marks per letter for the current guess before deciding what a gray means.

use crate::constraints::Constraints;
use crate::error::Result;
use crate::feedback::{Feedback, Mark};
use crate::word::{Language, Word};
use crate::WORD_LENGTH;
use log::{debug, warn};

/// Per-letter mark counts within a single guess.
#[derive(Debug, Clone, Copy)]
struct Tally {
    letter: char,
    green: usize,
    yellow: usize,
    gray: usize,
}

impl Tally {
    /// Copies of the letter the secret is known to contain.
    fn non_gray(&self) -> usize {
        self.green + self.yellow
    }
}

fn tally(guess: &Word, feedback: &Feedback) -> Vec<Tally> {
    let mut tallies: Vec<Tally> = Vec::with_capacity(WORD_LENGTH);
    for (&letter, &mark) in guess.chars().iter().zip(feedback.marks()) {
        let index = match tallies.iter().position(|t| t.letter == letter) {
            Some(index) => index,
            None => {
                tallies.push(Tally {
                    letter,
                    green: 0,
                    yellow: 0,
                    gray: 0,
                });
                tallies.len() - 1
            }
        };
        let t = &mut tallies[index];
        match mark {
            Mark::Exact => t.green += 1,
            Mark::Present => t.yellow += 1,
            Mark::Absent => t.gray += 1,
        }
    }
    tallies
}

impl Constraints {
    /// Update the constraints with one round of feedback.
    ///
    /// Rounds must be applied one at a time in the order they were played: how
    /// a gray mark is read depends on which letters earlier rounds proved present.
    pub fn apply(&mut self, guess: &Word, feedback: &Feedback) {
        let tallies = tally(guess, feedback);
        let non_gray = |c: char| {
            tallies
                .iter()
                .find(|t| t.letter == c)
                .map_or(0, Tally::non_gray)
        };

        for (i, (&c, &mark)) in guess.chars().iter().zip(feedback.marks()).enumerate() {
            match mark {
                Mark::Exact => self.set_exact(i, c),
                Mark::Present => self.forbid(i, c),
                Mark::Absent => {
                    if non_gray(c) > 0 || self.present.contains(&c) {
                        // Surplus repeat: the letter is real, this copy is extra.
                        self.forbid(i, c);
                    } else {
                        self.absent.insert(c);
                    }
                }
            }
        }

        for t in tallies.iter().filter(|t| t.non_gray() > 0) {
            self.present.insert(t.letter);
            self.absent.remove(&t.letter);
        }

        for t in &tallies {
            let seen = t.non_gray();
            if seen > 0 {
                let min = self.min_count.entry(t.letter).or_insert(0);
                *min = (*min).max(seen);
            }
            if t.gray > 0 {
                if seen == 0 {
                    self.max_count.insert(t.letter, 0);
                    self.absent.insert(t.letter);
                    self.present.remove(&t.letter);
                } else {
                    let max = self.max_count.entry(t.letter).or_insert(seen);
                    *max = (*max).min(seen);
                }
            }
        }

        debug!(
            "applied {} {}: present={:?} absent={:?} exact={:?} forbidden={:?}",
            guess, feedback, self.present, self.absent, self.exact, self.forbidden_at
        );
        if !self.is_consistent() {
            warn!(
                "feedback {} for {} contradicts earlier rounds; no word can match",
                feedback, guess
            );
        }
    }

    /// Parse a typed guess and feedback string, then apply them.
    ///
    /// Nothing is changed if either fails to parse.
    pub fn apply_input(
        &mut self,
        guess: &str,
        feedback: &str,
        language: Language,
    ) -> Result<(Word, Feedback)> {
        let guess = language.parse_word(guess)?;
        let feedback = Feedback::parse(feedback, &language.symbols())?;
        self.apply(&guess, &feedback);
        Ok((guess, feedback))
    }

    fn set_exact(&mut self, i: usize, c: char) {
        self.forbidden_at.remove(&(i, c));
        self.exact.insert((i, c));
    }

    fn forbid(&mut self, i: usize, c: char) {
        if !self.exact.contains(&(i, c)) {
            self.forbidden_at.insert((i, c));
        }
    }
}
