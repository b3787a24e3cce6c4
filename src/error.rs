//! Error types for the centrality pipeline

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the pipeline stages
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The edge list does not exist
    #[error("edge list not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// A line did not hold exactly two integer node ids
    #[error("{}:{line}: expected two integer node ids, found {content:?}", .path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        content: String,
    },

    /// A parameter is out of range for the graph it is applied to
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// The graph (or score table) has no nodes
    #[error("graph has no nodes")]
    EmptyInput,

    /// A centrality score is NaN or infinite and cannot be binned
    #[error("centrality score of node {node} cannot be compared: {score}")]
    NonComparableScore { node: i64, score: f64 },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the library
pub type Result<T> = std::result::Result<T, AnalysisError>;
