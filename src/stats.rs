//! Summary statistics over the number of moves games took.

use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct Distribution {
    pub n: usize,
    pub mean: f64,
    pub median: usize,
    pub p90: usize,
    pub p95: usize,
    /// Moves → number of games solved in that many moves.
    pub histogram: BTreeMap<usize, usize>,
}

impl Distribution {
    pub fn from_steps(steps: &[usize]) -> Self {
        let mut sorted = steps.to_vec();
        sorted.sort_unstable();

        let mut histogram = BTreeMap::new();
        for &s in &sorted {
            *histogram.entry(s).or_insert(0) += 1;
        }

        let n = sorted.len();
        let mean = if n == 0 {
            0.0
        } else {
            sorted.iter().sum::<usize>() as f64 / n as f64
        };

        Self {
            n,
            mean,
            median: percentile(&sorted, 50.0),
            p90: percentile(&sorted, 90.0),
            p95: percentile(&sorted, 95.0),
            histogram,
        }
    }

    /// Fraction of games, in `[0, 1]`, solved in at most `moves` moves.
    pub fn share_within(&self, moves: usize) -> f64 {
        if self.n == 0 {
            return 0.0;
        }
        let within: usize = self.histogram.range(..=moves).map(|(_, c)| c).sum();
        within as f64 / self.n as f64
    }
}

/// Nearest-rank percentile of an ascending slice; 0 when empty.
pub fn percentile(sorted: &[usize], p: f64) -> usize {
    if sorted.is_empty() {
        return 0;
    }
    let rank = (p / 100.0 * sorted.len() as f64).ceil() as isize - 1;
    let index = rank.clamp(0, sorted.len() as isize - 1) as usize;
    sorted[index]
}
