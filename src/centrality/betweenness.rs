//! Sampled betweenness centrality (Brandes accumulation over BFS pivots)

use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

use crate::centrality::CentralityScores;
use crate::config::{OversamplePolicy, SamplingConfig};
use crate::error::{AnalysisError, Result};
use crate::graph::algorithms::{shortest_path_dag, PathWorkspace};
use crate::graph::CompressedGraph;

/// Per-worker buffers: one BFS workspace plus the dependency vector
struct BrandesWorkspace {
    paths: PathWorkspace,
    delta: Vec<f64>,
}

impl BrandesWorkspace {
    fn new(node_count: usize) -> Self {
        Self {
            paths: PathWorkspace::new(node_count),
            delta: vec![0.0; node_count],
        }
    }

    /// Add the dependencies of every node on `source` into `acc`
    fn accumulate(&mut self, graph: &CompressedGraph, source: usize, acc: &mut [f64]) {
        shortest_path_dag(graph, source, &mut self.paths);

        let dist = &self.paths.dist;
        let sigma = &self.paths.sigma;
        let order = &self.paths.order;

        // Successors at the next BFS level are finished before their predecessors
        for &w in order.iter().rev() {
            let w = w as usize;
            let next = dist[w] + 1;
            let mut dependency = 0.0;
            for &x in graph.outgoing_edges(w) {
                let x = x as usize;
                if dist[x] == next {
                    dependency += sigma[w] / sigma[x] * (1.0 + self.delta[x]);
                }
            }
            self.delta[w] = dependency;
            if w != source {
                acc[w] += dependency;
            }
        }

        for &w in order {
            self.delta[w as usize] = 0.0;
        }
    }
}

/// Choose the pivot set; returns the sorted pivots and the seed they were drawn with
fn select_pivots(node_count: usize, sampling: &SamplingConfig) -> Result<(Vec<usize>, Option<u64>)> {
    if sampling.k < 1 {
        return Err(AnalysisError::InvalidArgument(format!(
            "k must be at least 1, got {}",
            sampling.k
        )));
    }

    if sampling.k >= node_count {
        return match sampling.oversample {
            OversamplePolicy::Exact => {
                log::info!(
                    "k={} covers all {} nodes, computing exact betweenness",
                    sampling.k,
                    node_count
                );
                Ok(((0..node_count).collect(), None))
            }
            OversamplePolicy::Reject if sampling.k > node_count => {
                Err(AnalysisError::InvalidArgument(format!(
                    "k={} exceeds the {} nodes in the graph",
                    sampling.k, node_count
                )))
            }
            OversamplePolicy::Reject => Ok(((0..node_count).collect(), None)),
        };
    }

    let seed = sampling.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut pivots = rand::seq::index::sample(&mut rng, node_count, sampling.k).into_vec();
    pivots.sort_unstable();

    log::info!("Sampled {} pivots with seed {}", pivots.len(), seed);
    Ok((pivots, Some(seed)))
}

/// Normalization for directed betweenness estimated from `pivots` sources
fn scale_factor(node_count: usize, pivots: usize) -> f64 {
    if node_count <= 2 {
        return 1.0;
    }
    let n = node_count as f64;
    let pairs = (n - 1.0) * (n - 2.0);
    n / (pairs * pivots as f64)
}

/// Estimate betweenness centrality for every node of a directed graph.
///
/// `k` pivots are drawn uniformly without replacement; from each a BFS
/// computes shortest-path counts and Brandes' backward pass credits every
/// intermediate node. Scores are normalized by `1 / ((n-1)(n-2))` and scaled
/// by `n / pivots`, so with `k >= n` the result is exact normalized
/// betweenness. Path endpoints never earn credit.
///
/// Pivots are split into one contiguous chunk per rayon worker, so memory
/// stays at one workspace per thread regardless of `k`. Partial sums are
/// combined in chunk order.
pub fn betweenness_centrality(
    graph: &CompressedGraph,
    sampling: &SamplingConfig,
) -> Result<CentralityScores> {
    let n = graph.node_count;
    if n == 0 {
        return Err(AnalysisError::EmptyInput);
    }

    let (pivots, seed) = select_pivots(n, sampling)?;

    let workers = rayon::current_num_threads().max(1);
    let chunk_size = pivots.len().div_ceil(workers).max(1);
    log::info!(
        "Computing betweenness from {} pivots over {} nodes ({} per worker)",
        pivots.len(),
        n,
        chunk_size
    );

    let partials: Vec<Vec<f64>> = pivots
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut ws = BrandesWorkspace::new(n);
            let mut acc = vec![0.0; n];
            for &source in chunk {
                ws.accumulate(graph, source, &mut acc);
            }
            acc
        })
        .collect();

    // Summed in chunk order so a fixed thread count always yields the same bits
    let mut values = vec![0.0; n];
    for partial in &partials {
        for (total, p) in values.iter_mut().zip(partial) {
            *total += p;
        }
    }

    let scale = scale_factor(n, pivots.len());
    for value in &mut values {
        *value *= scale;
    }

    Ok(CentralityScores {
        node_ids: graph.node_ids.clone(),
        values,
        k: sampling.k,
        pivots: pivots.len(),
        seed,
    })
}
