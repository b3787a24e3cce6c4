//! Centrality analysis module

pub mod betweenness;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

pub use betweenness::betweenness_centrality;

/// Per-node centrality scores, indexed like the graph they were computed on
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CentralityScores {
    /// Original node ids
    pub node_ids: Vec<i64>,

    /// Score per node, aligned with `node_ids`
    pub values: Vec<f64>,

    /// Requested number of pivots
    pub k: usize,

    /// Pivots actually used
    pub pivots: usize,

    /// Seed the pivots were drawn with (`None` when every node was a pivot)
    pub seed: Option<u64>,
}

impl CentralityScores {
    /// Wrap precomputed scores, e.g. from an exact computation
    pub fn from_values(node_ids: Vec<i64>, values: Vec<f64>) -> Self {
        assert_eq!(node_ids.len(), values.len(), "one score per node");
        let n = values.len();
        Self {
            node_ids,
            values,
            k: n,
            pivots: n,
            seed: None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the estimate used every node as a pivot
    pub fn is_exact(&self) -> bool {
        self.pivots == self.len()
    }

    /// Iterate `(node_id, score)` pairs in graph order
    pub fn iter(&self) -> impl Iterator<Item = (i64, f64)> + '_ {
        self.node_ids.iter().copied().zip(self.values.iter().copied())
    }

    /// Score of an original node id (linear scan)
    pub fn get(&self, node: i64) -> Option<f64> {
        self.iter().find(|&(id, _)| id == node).map(|(_, score)| score)
    }

    /// Largest score, ignoring NaN; `None` when empty
    pub fn max(&self) -> Option<f64> {
        self.values.iter().copied().filter(|v| !v.is_nan()).reduce(f64::max)
    }

    /// The `n` highest-scoring nodes, ties broken by node id
    pub fn top(&self, n: usize) -> Vec<(i64, f64)> {
        self.iter()
            .sorted_by(|a, b| b.1.total_cmp(&a.1).then(a.0.cmp(&b.0)))
            .take(n)
            .collect()
    }
}
