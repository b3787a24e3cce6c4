//! Counting nodes per importance bin

use serde::{Deserialize, Serialize};

use crate::binning::{Bin, BinEdges};
use crate::centrality::CentralityScores;
use crate::error::{AnalysisError, Result};

/// Node counts for the Low and High bins
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Histogram {
    /// Boundaries the counts were taken against
    pub edges: BinEdges,

    /// Nodes in `[0, split]`
    pub low: usize,

    /// Nodes in `(split, max]`
    pub high: usize,
}

impl Histogram {
    /// Bin every score around `split * max`.
    ///
    /// Fails on an empty score table and on any NaN or infinite score; no node
    /// is dropped, so `low + high` always equals the number of scores.
    pub fn from_scores(scores: &CentralityScores, split: f64) -> Result<Self> {
        if scores.is_empty() {
            return Err(AnalysisError::EmptyInput);
        }

        if let Some((node, score)) = scores.iter().find(|(_, score)| !score.is_finite()) {
            return Err(AnalysisError::NonComparableScore { node, score });
        }

        let max = scores.values.iter().copied().fold(f64::MIN, f64::max);
        let edges = BinEdges::new(max, split);

        let (mut low, mut high) = (0, 0);
        for &score in &scores.values {
            match edges.assign(score) {
                Bin::Low => low += 1,
                Bin::High => high += 1,
            }
        }

        debug_assert_eq!(low + high, scores.len());
        log::info!(
            "Binned {} nodes around {} (max {}): {} low, {} high",
            scores.len(),
            edges.split,
            max,
            low,
            high
        );

        Ok(Self { edges, low, high })
    }

    /// Number of nodes in a bin
    pub fn count(&self, bin: Bin) -> usize {
        match bin {
            Bin::Low => self.low,
            Bin::High => self.high,
        }
    }

    /// Total nodes binned
    pub fn total(&self) -> usize {
        self.low + self.high
    }

    /// `(bin, count)` pairs in ascending bin order
    pub fn counts(&self) -> impl Iterator<Item = (Bin, usize)> + '_ {
        Bin::ALL.into_iter().map(move |bin| (bin, self.count(bin)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(values: &[f64]) -> CentralityScores {
        let ids = (1..=values.len() as i64).collect();
        CentralityScores::from_values(ids, values.to_vec())
    }

    #[test]
    fn chain_scores_split_two_to_one() {
        let hist = Histogram::from_scores(&scores(&[0.0, 0.5, 0.0]), 0.5).unwrap();
        assert_eq!((hist.low, hist.high), (2, 1));
        assert_eq!(hist.edges.upper, 0.5);
        assert_eq!(hist.edges.split, 0.25);
    }

    #[test]
    fn single_zero_score_is_low() {
        let hist = Histogram::from_scores(&scores(&[0.0]), 0.5).unwrap();
        assert_eq!((hist.low, hist.high), (1, 0));
    }

    #[test]
    fn all_zero_scores_are_low() {
        let hist = Histogram::from_scores(&scores(&[0.0; 5]), 0.5).unwrap();
        assert_eq!((hist.low, hist.high), (5, 0));
    }

    #[test]
    fn counts_are_conserved_and_ordered() {
        let hist = Histogram::from_scores(&scores(&[0.1, 0.2, 0.3, 0.9, 1.0, 0.5]), 0.5).unwrap();
        assert_eq!(hist.total(), 6);
        let counts: Vec<_> = hist.counts().collect();
        assert_eq!(counts, vec![(Bin::Low, 4), (Bin::High, 2)]);
    }

    #[test]
    fn empty_scores_fail() {
        let err = Histogram::from_scores(&scores(&[]), 0.5).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
    }

    #[test]
    fn nan_score_fails_loudly() {
        let err = Histogram::from_scores(&scores(&[0.2, f64::NAN, 0.1]), 0.5).unwrap_err();
        match err {
            AnalysisError::NonComparableScore { node, score } => {
                assert_eq!(node, 2);
                assert!(score.is_nan());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn infinite_score_fails_loudly() {
        let err = Histogram::from_scores(&scores(&[f64::INFINITY]), 0.5).unwrap_err();
        assert!(matches!(err, AnalysisError::NonComparableScore { node: 1, .. }));
    }
}
