//! Score binning module

pub mod histogram;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use histogram::Histogram;

/// One of the two importance bins, in ascending order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Bin {
    /// `[0, split]`
    Low,

    /// `(split, max]`
    High,
}

impl Bin {
    /// All bins in ascending score order
    pub const ALL: [Bin; 2] = [Bin::Low, Bin::High];
}

impl fmt::Display for Bin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bin::Low => f.write_str("Low"),
            Bin::High => f.write_str("High"),
        }
    }
}

/// Boundaries of the two bins: Low = `[lower, split]`, High = `(split, upper]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BinEdges {
    pub lower: f64,
    pub split: f64,
    pub upper: f64,
}

impl BinEdges {
    /// Edges for a score range `[0, max]` split at `fraction * max`
    pub fn new(max: f64, fraction: f64) -> Self {
        Self {
            lower: 0.0,
            split: max * fraction,
            upper: max,
        }
    }

    /// Bin a score falls into
    pub fn assign(&self, score: f64) -> Bin {
        // Zero-width range: everything sits on the inclusive lower edge
        if self.upper <= self.lower {
            return Bin::Low;
        }

        if score <= self.split {
            Bin::Low
        } else {
            Bin::High
        }
    }

    /// Interval label, e.g. `[0, 0.25]` or `(0.25, 0.5]`
    pub fn interval(&self, bin: Bin) -> String {
        match bin {
            Bin::Low => format!("[{}, {}]", self.lower, self.split),
            Bin::High => format!("({}, {}]", self.split, self.upper),
        }
    }
}
