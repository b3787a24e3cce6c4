//! Console report of the binned centrality scores

use std::fmt;

use crate::binning::Histogram;

/// What the analyzer prints on stdout
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Report {
    /// Requested number of pivots
    pub k: usize,

    /// Node counts per bin
    pub histogram: Histogram,
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "k={}", self.k)?;
        for (bin, count) in self.histogram.counts() {
            writeln!(f, "{} {}: {}", bin, self.histogram.edges.interval(bin), count)?;
        }
        Ok(())
    }
}
