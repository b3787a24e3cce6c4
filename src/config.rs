//! Configuration management for the centrality analyzer

use std::path::{Path, PathBuf};

use crate::error::{AnalysisError, Result};

/// Environment variable overriding the dataset root directory
pub const DATASET_ENV_VAR: &str = "RAPIDS_DATASET_ROOT_DIR";

/// Name of the citation edge list inside the dataset root
pub const DATASET_FILE_NAME: &str = "cit-Patents.csv";

/// Default number of pivots sampled by the estimator
pub const DEFAULT_K: usize = 100;

/// Default position of the Low/High boundary as a fraction of the max score
pub const DEFAULT_BIN_SPLIT: f64 = 0.5;

/// How parallel edges between the same pair of nodes are stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgePolicy {
    /// Parallel edges collapse into one (simple digraph)
    #[default]
    Collapse,

    /// Parallel edges are kept and count as distinct shortest paths
    Multi,
}

/// What the estimator does when `k` is not smaller than the node count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OversamplePolicy {
    /// Use every node as a pivot, yielding exact betweenness
    #[default]
    Exact,

    /// Fail with an invalid-argument error
    Reject,
}

/// Parameters of the sampled betweenness estimator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SamplingConfig {
    /// Number of pivots
    pub k: usize,

    /// RNG seed; `None` draws one from entropy
    pub seed: Option<u64>,

    /// Behavior when `k >= node_count`
    pub oversample: OversamplePolicy,
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            k: DEFAULT_K,
            seed: None,
            oversample: OversamplePolicy::default(),
        }
    }
}

/// Full pipeline configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Path to the whitespace-delimited edge list
    pub input_path: PathBuf,

    /// Number of pivots
    pub k: usize,

    /// RNG seed for pivot sampling
    pub seed: Option<u64>,

    /// Low/High boundary as a fraction of the max score
    pub bin_split: f64,

    /// Parallel edge handling
    pub edge_policy: EdgePolicy,

    /// Behavior when `k` reaches the node count
    pub oversample: OversamplePolicy,

    /// Directory receiving summary.json and scores.parquet, if any
    pub output_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input_path: dataset_path(default_dataset_root()),
            k: DEFAULT_K,
            seed: None,
            bin_split: DEFAULT_BIN_SPLIT,
            edge_policy: EdgePolicy::default(),
            oversample: OversamplePolicy::default(),
            output_dir: None,
        }
    }
}

impl Config {
    /// Create a configuration reading from the given edge list
    pub fn new(input_path: impl Into<PathBuf>) -> Self {
        Self {
            input_path: input_path.into(),
            ..Self::default()
        }
    }

    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_bin_split(mut self, bin_split: f64) -> Self {
        self.bin_split = bin_split;
        self
    }

    pub fn with_edge_policy(mut self, edge_policy: EdgePolicy) -> Self {
        self.edge_policy = edge_policy;
        self
    }

    pub fn with_oversample(mut self, oversample: OversamplePolicy) -> Self {
        self.oversample = oversample;
        self
    }

    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        self.output_dir = output_dir;
        self
    }

    /// Estimator parameters derived from this configuration
    pub fn sampling(&self) -> SamplingConfig {
        SamplingConfig {
            k: self.k,
            seed: self.seed,
            oversample: self.oversample,
        }
    }

    /// Reject parameters that no graph could satisfy
    pub fn validate(&self) -> Result<()> {
        if self.k < 1 {
            return Err(AnalysisError::InvalidArgument(format!(
                "k must be at least 1, got {}",
                self.k
            )));
        }

        // Also rejects NaN
        if !(self.bin_split > 0.0 && self.bin_split < 1.0) {
            return Err(AnalysisError::InvalidArgument(format!(
                "bin split must lie strictly between 0 and 1, got {}",
                self.bin_split
            )));
        }

        Ok(())
    }
}

/// Join the dataset root with the fixed edge list file name
pub fn dataset_path(root: impl AsRef<Path>) -> PathBuf {
    root.as_ref().join(DATASET_FILE_NAME)
}

/// Dataset root from the environment, falling back to the executable's directory
pub fn default_dataset_root() -> PathBuf {
    if let Some(root) = std::env::var_os(DATASET_ENV_VAR) {
        return PathBuf::from(root);
    }

    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_original_script() {
        let config = Config::new("edges.txt");
        assert_eq!(config.k, 100);
        assert_eq!(config.bin_split, 0.5);
        assert_eq!(config.edge_policy, EdgePolicy::Collapse);
        assert_eq!(config.oversample, OversamplePolicy::Exact);
        assert!(config.seed.is_none());
        assert!(config.output_dir.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn dataset_path_appends_file_name() {
        let path = dataset_path("/data/snap");
        assert_eq!(path, PathBuf::from("/data/snap/cit-Patents.csv"));
    }

    #[test]
    fn zero_k_is_rejected() {
        let err = Config::new("x").with_k(0).validate().unwrap_err();
        assert!(matches!(err, AnalysisError::InvalidArgument(_)));
    }

    #[test]
    fn bin_split_must_be_inside_unit_interval() {
        for split in [0.0, 1.0, -0.25, 1.5, f64::NAN] {
            let err = Config::new("x").with_bin_split(split).validate().unwrap_err();
            assert!(matches!(err, AnalysisError::InvalidArgument(_)), "split={split}");
        }
        assert!(Config::new("x").with_bin_split(0.9).validate().is_ok());
    }

    #[test]
    fn sampling_carries_estimator_fields() {
        let sampling = Config::new("x")
            .with_k(7)
            .with_seed(Some(3))
            .with_oversample(OversamplePolicy::Reject)
            .sampling();
        assert_eq!(
            sampling,
            SamplingConfig {
                k: 7,
                seed: Some(3),
                oversample: OversamplePolicy::Reject,
            }
        );
    }
}
