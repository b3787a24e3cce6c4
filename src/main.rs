use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use citation_centrality_analyzer::config::{
    self, Config, EdgePolicy, OversamplePolicy, DEFAULT_BIN_SPLIT, DEFAULT_K,
};
use citation_centrality_analyzer::{pipeline, storage};

#[derive(Parser, Debug)]
#[clap(
    name = "citation-centrality-analyzer",
    about = "Approximate betweenness centrality of the cit-Patents citation graph"
)]
struct Cli {
    /// Directory containing cit-Patents.csv (defaults to the executable's directory)
    #[clap(long, env = "RAPIDS_DATASET_ROOT_DIR")]
    dataset_root: Option<PathBuf>,

    /// Number of pivots sampled for the betweenness estimate
    #[clap(short, long, default_value_t = DEFAULT_K)]
    k: usize,

    /// Seed for pivot sampling (random if omitted)
    #[clap(long)]
    seed: Option<u64>,

    /// Low/High boundary as a fraction of the max score
    #[clap(long, default_value_t = DEFAULT_BIN_SPLIT)]
    bin_split: f64,

    /// Keep parallel edges instead of collapsing them
    #[clap(long)]
    keep_parallel_edges: bool,

    /// Fail when k exceeds the node count instead of computing exactly
    #[clap(long)]
    strict_sampling: bool,

    /// Write summary.json and scores.parquet to this directory
    #[clap(long)]
    output_dir: Option<PathBuf>,

    /// Number of worker threads (0 = use all available cores)
    #[clap(long, default_value = "0")]
    threads: usize,

    /// Verbose logging
    #[clap(long, short)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let root = self.dataset_root.unwrap_or_else(config::default_dataset_root);
        let edge_policy = if self.keep_parallel_edges {
            EdgePolicy::Multi
        } else {
            EdgePolicy::Collapse
        };
        let oversample = if self.strict_sampling {
            OversamplePolicy::Reject
        } else {
            OversamplePolicy::Exact
        };

        Config::new(config::dataset_path(root))
            .with_k(self.k)
            .with_seed(self.seed)
            .with_bin_split(self.bin_split)
            .with_edge_policy(edge_policy)
            .with_oversample(oversample)
            .with_output_dir(self.output_dir)
    }
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Cli::parse();

    // Configure logging
    let log_level = if args.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::Builder::new()
        .filter_level(log_level)
        .format_timestamp_millis()
        .init();

    // Set number of threads
    let num_threads = if args.threads > 0 {
        args.threads
    } else {
        // If threads = 0, use all available cores
        num_cpus::get()
    };

    log::info!("Using {} worker threads", num_threads);
    rayon::ThreadPoolBuilder::new()
        .num_threads(num_threads)
        .build_global()?;

    let config = args.into_config();
    log::info!("Starting betweenness centrality analysis");
    log::info!("Input: {}", config.input_path.display());

    let analysis = pipeline::run(&config)?;

    print!("{}", analysis.report);

    if let Some(output_dir) = &config.output_dir {
        storage::save_results(&analysis, output_dir)?;
    }

    log::info!("Analysis complete");

    Ok(())
}
