//! Edge list file handling for citation data

use std::fs::File;
use std::io;
use std::path::Path;

use memmap2::Mmap;

use crate::data::Edge;
use crate::error::{AnalysisError, Result};

/// Load a headerless two-column edge list into an ordered sequence of edges
pub fn load_edge_list(path: impl AsRef<Path>) -> Result<Vec<Edge>> {
    let path = path.as_ref();
    log::info!("Reading edge list: {}", path.display());

    let file = File::open(path).map_err(|err| match err.kind() {
        io::ErrorKind::NotFound => AnalysisError::FileNotFound(path.to_path_buf()),
        _ => AnalysisError::Io(err),
    })?;

    // Mapping a zero-length file is not portable
    if file.metadata()?.len() == 0 {
        log::info!("Edge list is empty");
        return Ok(Vec::new());
    }

    // SAFETY: the mapping is read-only and dropped before returning
    let mmap = unsafe { Mmap::map(&file)? };
    let edges = parse_edges(&mmap, path)?;

    log::info!("Loaded {} edges", edges.len());
    Ok(edges)
}

/// Parse edge list bytes; `path` is only used for error reporting
pub fn parse_edges(bytes: &[u8], path: &Path) -> Result<Vec<Edge>> {
    // Citation lines are rarely shorter than this
    let mut edges = Vec::with_capacity(bytes.len() / 16);

    for (line_idx, raw) in bytes.split(|&b| b == b'\n').enumerate() {
        let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
        let malformed = || AnalysisError::Parse {
            path: path.to_path_buf(),
            line: line_idx + 1,
            content: String::from_utf8_lossy(raw).into_owned(),
        };

        let line = std::str::from_utf8(raw).map_err(|_| malformed())?;
        if line.trim().is_empty() {
            continue;
        }

        let mut tokens = line.split_ascii_whitespace();
        let (Some(src), Some(dst), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(malformed());
        };

        let source = src.parse::<i64>().map_err(|_| malformed())?;
        let target = dst.parse::<i64>().map_err(|_| malformed())?;
        edges.push(Edge { source, target });
    }

    Ok(edges)
}
