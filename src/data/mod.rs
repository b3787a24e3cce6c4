//! Input data module

pub mod edgelist;

/// A directed citation: `source` cites `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub source: i64,
    pub target: i64,
}

impl Edge {
    pub fn new(source: i64, target: i64) -> Self {
        Self { source, target }
    }
}
