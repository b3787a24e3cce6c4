//! End-to-end runs of the analyzer binary against fixture edge lists.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn dataset(contents: &str) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("cit-Patents.csv"), contents).unwrap();
    dir
}

fn analyzer(root: &Path) -> Command {
    let mut cmd = Command::cargo_bin("citation-centrality-analyzer").unwrap();
    cmd.env("RAPIDS_DATASET_ROOT_DIR", root);
    cmd
}

#[test]
fn chain_prints_k_and_ordered_bins() {
    let root = dataset("1 2\n2 3\n");

    analyzer(root.path())
        .args(["-k", "3"])
        .assert()
        .success()
        .stdout("k=3\nLow [0, 0.25]: 2\nHigh (0.25, 0.5]: 1\n");
}

#[test]
fn default_invocation_reads_dataset_root_from_env() {
    let root = dataset("5 5\n");

    analyzer(root.path())
        .assert()
        .success()
        .stdout("k=100\nLow [0, 0]: 1\nHigh (0, 0]: 0\n");
}

#[test]
fn missing_file_exits_non_zero() {
    let root = TempDir::new().unwrap();

    analyzer(root.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn malformed_line_exits_non_zero() {
    let root = dataset("1 2\n3 x\n");

    analyzer(root.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(":2: expected two integer node ids"));
}

#[test]
fn empty_edge_list_prints_no_bins() {
    let root = dataset("");

    analyzer(root.path())
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("graph has no nodes"));
}

#[test]
fn strict_sampling_rejects_oversized_k() {
    let root = dataset("1 2\n2 3\n");

    analyzer(root.path())
        .args(["--strict-sampling", "-k", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid argument"));
}

#[test]
fn seeded_runs_print_identical_reports() {
    let pairs: String = (0..200).map(|i| format!("{} {}\n", i % 70, (i * 11 + 5) % 70)).collect();
    let root = dataset(&pairs);

    let first = analyzer(root.path())
        .args(["-k", "10", "--seed", "99", "--threads", "2"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    analyzer(root.path())
        .args(["-k", "10", "--seed", "99", "--threads", "2"])
        .assert()
        .success()
        .stdout(first);
}

#[test]
fn output_dir_receives_results() {
    let root = dataset("1 2\n2 3\n3 4\n");
    let out = TempDir::new().unwrap();

    analyzer(root.path())
        .args(["-k", "4", "--output-dir"])
        .arg(out.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("k=4\n"));

    assert!(out.path().join("summary.json").exists());
    assert!(out.path().join("scores.parquet").exists());
}
