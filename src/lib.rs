//! Core library functions for the citation centrality analyzer

pub mod binning;
pub mod centrality;
pub mod config;
pub mod data;
pub mod error;
pub mod graph;
pub mod pipeline;
pub mod report;
pub mod storage;

pub use error::{AnalysisError, Result};
