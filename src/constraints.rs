//! Everything the feedback so far says about the secret word.

use crate::word::Word;
use std::collections::{BTreeMap, BTreeSet};

/// Accumulated knowledge about the secret for one solving session.
///
/// The updates in [`Constraints::apply`] keep these invariants:
/// - `present` and `absent` are disjoint;
/// - a `(position, letter)` pair is never both in `exact` and in `forbidden_at`.
///
/// `min_count[c] <= max_count[c]` holds as long as the feedback is
/// consistent. Contradictory input can break it, and then no word is allowed
/// (see [`Constraints::is_consistent`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Constraints {
    /// Letters that occur at least once.
    pub present: BTreeSet<char>,
    /// Letters that do not occur at all.
    pub absent: BTreeSet<char>,
    /// The secret has this letter at this position.
    pub exact: BTreeSet<(usize, char)>,
    /// The secret does not have this letter at this position.
    pub forbidden_at: BTreeSet<(usize, char)>,
    /// Lower bound on how many times a letter occurs.
    pub min_count: BTreeMap<char, usize>,
    /// Upper bound on how many times a letter occurs; no entry means unbounded.
    pub max_count: BTreeMap<char, usize>,
}

impl Constraints {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if a word satisfies every known constraint.
    pub fn allows(&self, word: &Word) -> bool {
        let chars = word.chars();

        self.present.iter().all(|&c| word.contains(c))
            && !self.absent.iter().any(|&c| word.contains(c))
            && self.exact.iter().all(|&(i, c)| chars.get(i) == Some(&c))
            && self.forbidden_at.iter().all(|&(i, c)| chars.get(i) != Some(&c))
            && self.min_count.iter().all(|(&c, &n)| word.count(c) >= n)
            && self.max_count.iter().all(|(&c, &n)| word.count(c) <= n)
    }

    /// True before any feedback has been applied.
    pub fn is_empty(&self) -> bool {
        self.present.is_empty()
            && self.absent.is_empty()
            && self.exact.is_empty()
            && self.forbidden_at.is_empty()
            && self.min_count.is_empty()
            && self.max_count.is_empty()
    }

    /// Whether the constraints can be satisfied by some arrangement of letters.
    ///
    /// This does not consult a dictionary; it only catches constraints that
    /// contradict each other outright.
    pub fn is_consistent(&self) -> bool {
        if !self.present.is_disjoint(&self.absent) {
            return false;
        }
        if self.exact.iter().any(|pair| self.forbidden_at.contains(pair)) {
            return false;
        }
        // Two different letters pinned to the same position.
        let mut pinned = BTreeMap::new();
        for &(i, c) in &self.exact {
            if *pinned.entry(i).or_insert(c) != c {
                return false;
            }
        }
        self.min_count
            .iter()
            .all(|(c, &min)| self.max_count.get(c).map_or(true, |&max| min <= max))
    }
}
