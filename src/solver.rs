//! Ranking the dictionary and playing sessions against it.
//!
//! The dictionary is scored once by letter frequency and sorted best first.
//! Every round after that is a linear scan of the same order for words that
//! still satisfy the session's [`Constraints`]; no lookahead is done.

use crate::constraints::Constraints;
use crate::error::{Error, Result};
use crate::feedback::Feedback;
use crate::score::{score_word, LetterFrequency};
use crate::stats::Distribution;
use crate::word::Word;
use log::info;
use rayon::prelude::*;
use std::time::{Duration, Instant};

/// A word with its static weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredWord {
    pub word: Word,
    pub score: f64,
}

/// The dictionary sorted by descending score; equal scores keep file order.
#[derive(Debug, Clone)]
pub struct RankedDictionary {
    ranked: Vec<ScoredWord>,
    frequency: LetterFrequency,
}

impl RankedDictionary {
    pub fn new(words: &[Word]) -> Self {
        let frequency = LetterFrequency::from_words(words);
        let mut ranked: Vec<ScoredWord> = words
            .par_iter()
            .map(|&word| ScoredWord {
                word,
                score: score_word(&word, &frequency),
            })
            .collect();
        // `sort_by` is stable, which is what keeps ties in dictionary order.
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));

        info!(
            "ranked {} words over {} distinct letters",
            ranked.len(),
            frequency.len()
        );
        Self { ranked, frequency }
    }

    pub fn frequency(&self) -> &LetterFrequency {
        &self.frequency
    }

    pub fn ranked(&self) -> &[ScoredWord] {
        &self.ranked
    }

    pub fn len(&self) -> usize {
        self.ranked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranked.is_empty()
    }

    /// The highest-ranked word the constraints allow, if any.
    pub fn best(&self, constraints: &Constraints) -> Option<&ScoredWord> {
        self.ranked.iter().find(|s| constraints.allows(&s.word))
    }

    /// All allowed words, best first.
    pub fn candidates<'a>(
        &'a self,
        constraints: &'a Constraints,
    ) -> impl Iterator<Item = &'a ScoredWord> + 'a {
        self.ranked.iter().filter(|s| constraints.allows(&s.word))
    }

    pub fn count_candidates(&self, constraints: &Constraints) -> usize {
        self.candidates(constraints).count()
    }
}

/// The guesses made in one game and whether the last one won.
#[derive(Debug, Clone, PartialEq)]
pub struct GameOutcome {
    pub secret: Option<Word>,
    pub guesses: Vec<(Word, Feedback)>,
    pub solved: bool,
}

impl GameOutcome {
    pub fn moves(&self) -> usize {
        self.guesses.len()
    }
}

/// One solving attempt: owns its constraints, borrows the shared ranking.
#[derive(Debug, Clone)]
pub struct Session<'a> {
    dictionary: &'a RankedDictionary,
    constraints: Constraints,
    history: Vec<(Word, Feedback)>,
}

impl<'a> Session<'a> {
    pub fn new(dictionary: &'a RankedDictionary) -> Self {
        Self {
            dictionary,
            constraints: Constraints::new(),
            history: Vec::new(),
        }
    }

    pub fn constraints(&self) -> &Constraints {
        &self.constraints
    }

    pub fn history(&self) -> &[(Word, Feedback)] {
        &self.history
    }

    pub fn is_solved(&self) -> bool {
        self.history.last().map_or(false, |(_, f)| f.is_win())
    }

    pub fn reset(&mut self) {
        self.constraints = Constraints::new();
        self.history.clear();
    }

    pub fn apply_feedback(&mut self, guess: &Word, feedback: &Feedback) {
        self.constraints.apply(guess, feedback);
        self.history.push((*guess, *feedback));
    }

    /// The next word to play, or [`Error::NoCandidates`] if the constraints
    /// rule out the whole dictionary.
    pub fn best_guess(&self) -> Result<&'a ScoredWord> {
        let dictionary: &'a RankedDictionary = self.dictionary;
        dictionary.best(&self.constraints).ok_or(Error::NoCandidates)
    }

    pub fn candidates(&self) -> impl Iterator<Item = &ScoredWord> + '_ {
        self.dictionary.candidates(&self.constraints)
    }

    pub fn remaining_count(&self) -> usize {
        self.dictionary.count_candidates(&self.constraints)
    }

    /// Play the best guess each round, asking `get_feedback` for its marks.
    ///
    /// Stops on a win, when no candidate is left, or after `max_moves`
    /// guesses. Without a limit, `get_feedback` must be truthful or the game
    /// may not end.
    pub fn solve_with_feedback<F>(
        &mut self,
        max_moves: Option<usize>,
        mut get_feedback: F,
    ) -> GameOutcome
    where
        F: FnMut(&Word) -> Feedback,
    {
        let start = self.history.len();

        while max_moves.map_or(true, |max| self.history.len() - start < max) {
            let guess = match self.best_guess() {
                Ok(best) => best.word,
                Err(_) => break,
            };
            let feedback = get_feedback(&guess);
            self.apply_feedback(&guess, &feedback);
            if feedback.is_win() {
                break;
            }
        }

        GameOutcome {
            secret: None,
            guesses: self.history[start..].to_vec(),
            solved: self.is_solved(),
        }
    }

    /// Solve a puzzle knowing the secret word (for testing/benchmarking)
    pub fn solve_for_target(&mut self, secret: &Word, max_moves: Option<usize>) -> GameOutcome {
        let mut outcome =
            self.solve_with_feedback(max_moves, |guess| Feedback::calculate(guess, secret));
        outcome.secret = Some(*secret);
        outcome
    }
}

/// Results of playing a fresh session against every secret.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub outcomes: Vec<GameOutcome>,
    pub elapsed: Duration,
}

impl BenchmarkReport {
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Move counts of the solved games.
    pub fn solved_steps(&self) -> Vec<usize> {
        self.outcomes
            .iter()
            .filter(|o| o.solved)
            .map(GameOutcome::moves)
            .collect()
    }

    /// Secrets the solver did not find.
    pub fn failed(&self) -> Vec<Word> {
        self.outcomes
            .iter()
            .filter(|o| !o.solved)
            .filter_map(|o| o.secret)
            .collect()
    }

    /// Solved secrets that took more than `moves` guesses, fewest moves first,
    /// then alphabetically.
    pub fn slower_than(&self, moves: usize) -> Vec<(Word, usize)> {
        let mut slow: Vec<(Word, usize)> = self
            .outcomes
            .iter()
            .filter(|o| o.solved && o.moves() > moves)
            .filter_map(|o| o.secret.map(|s| (s, o.moves())))
            .collect();
        slow.sort_by(|a, b| a.1.cmp(&b.1).then(a.0.cmp(&b.0)));
        slow
    }

    pub fn distribution(&self) -> Distribution {
        Distribution::from_steps(&self.solved_steps())
    }
}

/// Play every secret in parallel, each in its own [`Session`].
///
/// `on_game` is called from worker threads as each game finishes.
pub fn benchmark<P>(
    dictionary: &RankedDictionary,
    secrets: &[Word],
    max_moves: Option<usize>,
    on_game: P,
) -> BenchmarkReport
where
    P: Fn(&GameOutcome) + Sync,
{
    let start = Instant::now();
    let outcomes: Vec<GameOutcome> = secrets
        .par_iter()
        .map(|secret| {
            let outcome = Session::new(dictionary).solve_for_target(secret, max_moves);
            on_game(&outcome);
            outcome
        })
        .collect();
    let elapsed = start.elapsed();

    info!("played {} games in {:.2?}", outcomes.len(), elapsed);
    BenchmarkReport { outcomes, elapsed }
}
