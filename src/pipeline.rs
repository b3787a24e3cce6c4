//! End-to-end analysis: load, build, estimate, bin

use crate::binning::Histogram;
use crate::centrality::{betweenness_centrality, CentralityScores};
use crate::config::Config;
use crate::data::edgelist::load_edge_list;
use crate::data::Edge;
use crate::error::Result;
use crate::graph::CompressedGraph;
use crate::report::Report;

/// Everything one run produces
#[derive(Debug, Clone)]
pub struct Analysis {
    /// Edges read from the input, before parallel-edge handling
    pub input_edges: usize,

    /// Nodes in the graph
    pub node_count: usize,

    /// Edges stored in the graph
    pub edge_count: usize,

    /// Per-node centrality estimate
    pub scores: CentralityScores,

    /// Stdout report
    pub report: Report,
}

/// Run the full pipeline on the configured edge list
pub fn run(config: &Config) -> Result<Analysis> {
    config.validate()?;
    let edges = load_edge_list(&config.input_path)?;
    analyze_edges(&edges, config)
}

/// Run every stage after loading; `config.input_path` is ignored
pub fn analyze_edges(edges: &[Edge], config: &Config) -> Result<Analysis> {
    config.validate()?;

    let graph = CompressedGraph::from_edges(edges, config.edge_policy);
    log::info!(
        "Built graph with {} nodes and {} edges ({:.1} MiB)",
        graph.node_count,
        graph.edge_count(),
        graph.memory_usage() as f64 / (1024.0 * 1024.0)
    );

    let scores = betweenness_centrality(&graph, &config.sampling())?;
    let histogram = Histogram::from_scores(&scores, config.bin_split)?;

    Ok(Analysis {
        input_edges: edges.len(),
        node_count: graph.node_count,
        edge_count: graph.edge_count(),
        scores,
        report: Report {
            k: config.k,
            histogram,
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AnalysisError;

    fn edges(pairs: &[(i64, i64)]) -> Vec<Edge> {
        pairs.iter().map(|&(s, t)| Edge::new(s, t)).collect()
    }

    fn config(k: usize) -> Config {
        Config::new("unused").with_k(k).with_seed(Some(11))
    }

    #[test]
    fn chain_reports_two_low_one_high() {
        let analysis = analyze_edges(&edges(&[(1, 2), (2, 3)]), &config(3)).unwrap();
        assert_eq!(analysis.node_count, 3);
        assert_eq!((analysis.report.histogram.low, analysis.report.histogram.high), (2, 1));
        assert!(analysis.report.to_string().starts_with("k=3\n"));
    }

    #[test]
    fn triangle_with_shortcut_is_all_low() {
        let analysis = analyze_edges(&edges(&[(1, 2), (2, 3), (1, 3)]), &config(3)).unwrap();
        assert_eq!((analysis.report.histogram.low, analysis.report.histogram.high), (3, 0));
    }

    #[test]
    fn self_loop_with_default_k() {
        let analysis = analyze_edges(&edges(&[(5, 5)]), &config(100)).unwrap();
        assert_eq!(analysis.node_count, 1);
        assert_eq!(analysis.report.histogram.edges.upper, 0.0);
        assert_eq!((analysis.report.histogram.low, analysis.report.histogram.high), (1, 0));
    }

    #[test]
    fn empty_edge_list_is_empty_input() {
        let err = analyze_edges(&[], &config(100)).unwrap_err();
        assert!(matches!(err, AnalysisError::EmptyInput));
    }

    #[test]
    fn invalid_config_fails_before_work() {
        let err = analyze_edges(&edges(&[(1, 2)]), &config(0)).unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidArgument(_)));
    }

    #[test]
    fn counts_input_edges_before_collapsing() {
        let analysis = analyze_edges(&edges(&[(1, 2), (1, 2), (2, 3)]), &config(3)).unwrap();
        assert_eq!(analysis.input_edges, 3);
        assert_eq!(analysis.edge_count, 2);
    }
}
