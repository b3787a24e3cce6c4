//! Results persistence module

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use polars::prelude::ParquetWriter;
use serde_json::{json, to_string_pretty};
use statrs::statistics::Statistics;

use crate::binning::Bin;
use crate::centrality::CentralityScores;
use crate::pipeline::Analysis;

/// Number of most central nodes listed in the summary
const TOP_NODES: usize = 10;

/// Save analysis results to the specified directory
pub fn save_results(analysis: &Analysis, output_dir: &Path) -> Result<()> {
    log::info!("Saving centrality results to {}", output_dir.display());

    // Ensure output directory exists
    fs::create_dir_all(output_dir)?;

    save_summary(analysis, output_dir)?;
    save_scores(&analysis.scores, output_dir)?;

    log::info!("Results saved successfully");

    Ok(())
}

/// Save run parameters, score statistics and bin counts
fn save_summary(analysis: &Analysis, output_dir: &Path) -> Result<()> {
    log::info!("Saving summary information");

    let path = output_dir.join("summary.json");
    let mut file = File::create(path)?;

    let scores = &analysis.scores;
    let histogram = &analysis.report.histogram;

    let bins: Vec<_> = histogram
        .counts()
        .map(|(bin, count)| {
            json!({
                "bin": bin,
                "interval": histogram.edges.interval(bin),
                "count": count,
            })
        })
        .collect();

    let top_nodes: Vec<_> = scores
        .top(TOP_NODES)
        .into_iter()
        .map(|(node, bc)| json!({ "node": node, "bc": bc }))
        .collect();

    let summary = json!({
        "sampling": {
            "k": scores.k,
            "pivots": scores.pivots,
            "seed": scores.seed,
            "exact": scores.is_exact(),
        },
        "graph_stats": {
            "input_edge_count": analysis.input_edges,
            "node_count": analysis.node_count,
            "edge_count": analysis.edge_count,
        },
        "score_stats": {
            "max": histogram.edges.upper,
            "mean": scores.values.iter().mean(),
            "std_dev": scores.values.iter().population_std_dev(),
            "high_fraction": histogram.count(Bin::High) as f64 / histogram.total() as f64,
        },
        "bin_edges": histogram.edges,
        "bins": bins,
        "top_nodes": top_nodes,
    });

    file.write_all(to_string_pretty(&summary)?.as_bytes())?;

    Ok(())
}

/// Save the per-node score table as Parquet
fn save_scores(scores: &CentralityScores, output_dir: &Path) -> Result<()> {
    log::info!("Saving {} node scores", scores.len());

    let path = output_dir.join("scores.parquet");
    let file = File::create(path)?;

    let mut df = polars::df!(
        "node" => &scores.node_ids,
        "bc" => &scores.values,
    )?;

    ParquetWriter::new(file).finish(&mut df)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::data::Edge;
    use crate::pipeline::analyze_edges;
    use polars::prelude::{ParquetReader, SerReader};

    fn chain_analysis() -> Analysis {
        let edges = vec![Edge::new(1, 2), Edge::new(2, 3)];
        analyze_edges(&edges, &Config::new("unused").with_k(3)).unwrap()
    }

    #[test]
    fn writes_summary_and_scores() {
        let dir = tempfile::tempdir().unwrap();
        let analysis = chain_analysis();

        save_results(&analysis, dir.path()).unwrap();

        let text = fs::read_to_string(dir.path().join("summary.json")).unwrap();
        let summary: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(summary["sampling"]["k"], 3);
        assert_eq!(summary["sampling"]["exact"], true);
        assert_eq!(summary["graph_stats"]["node_count"], 3);
        assert_eq!(summary["bins"][0]["bin"], "Low");
        assert_eq!(summary["bins"][0]["count"], 2);
        assert_eq!(summary["bins"][1]["count"], 1);
        assert_eq!(summary["top_nodes"][0]["node"], 2);

        let file = File::open(dir.path().join("scores.parquet")).unwrap();
        let df = ParquetReader::new(file).finish().unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 2);
        assert_eq!(df.column("node").unwrap().i64().unwrap().get(1), Some(2));
    }

    #[test]
    fn creates_missing_output_directory() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("runs").join("latest");

        save_results(&chain_analysis(), &nested).unwrap();
        assert!(nested.join("summary.json").exists());
    }
}
