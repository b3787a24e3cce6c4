//! Memory-efficient graph representation

use std::collections::HashMap;
use std::mem;

use crate::config::EdgePolicy;
use crate::data::Edge;
use crate::graph::builder::GraphBuilder;

/// Compressed sparse representation of a directed graph optimized for memory efficiency
#[derive(Debug, Clone)]
pub struct CompressedGraph {
    /// Number of nodes in the graph
    pub node_count: usize,

    /// Offset array: index where each node's edges begin
    /// offsets[i] to offsets[i+1] defines the edge range for node i
    pub offsets: Vec<u32>,

    /// Edge array: concatenated, sorted lists of target nodes
    pub edges: Vec<u32>,

    /// Mapping from internal node indices to original node ids
    pub node_ids: Vec<i64>,

    /// Reverse of `node_ids`
    id_to_index: HashMap<i64, u32>,
}

impl CompressedGraph {
    /// Assemble a graph from CSR parts built elsewhere
    pub(crate) fn from_parts(
        offsets: Vec<u32>,
        edges: Vec<u32>,
        node_ids: Vec<i64>,
        id_to_index: HashMap<i64, u32>,
    ) -> Self {
        Self {
            node_count: node_ids.len(),
            offsets,
            edges,
            node_ids,
            id_to_index,
        }
    }

    /// Build a graph from an ordered edge sequence
    pub fn from_edges(edges: &[Edge], policy: EdgePolicy) -> Self {
        let mut builder = GraphBuilder::with_capacity(edges.len() / 4);
        for edge in edges {
            builder.add_edge(edge.source, edge.target);
        }
        builder.build(policy)
    }

    /// Number of stored edges (after parallel-edge handling)
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Get outgoing edges for a node
    pub fn outgoing_edges(&self, node: usize) -> &[u32] {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        &self.edges[start..end]
    }

    /// Check if there's an edge from src to dst
    pub fn has_edge(&self, src: usize, dst: u32) -> bool {
        let edges = self.outgoing_edges(src);
        edges.binary_search(&dst).is_ok()
    }

    /// Get out-degree of a node
    pub fn out_degree(&self, node: usize) -> usize {
        let start = self.offsets[node] as usize;
        let end = self.offsets[node + 1] as usize;
        end - start
    }

    /// Internal index of an original node id
    pub fn index_of(&self, id: i64) -> Option<usize> {
        self.id_to_index.get(&id).map(|&idx| idx as usize)
    }

    /// Original node id of an internal index
    pub fn node_id(&self, index: usize) -> i64 {
        self.node_ids[index]
    }

    /// Estimate memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        let base = mem::size_of::<Self>();
        let offsets = self.offsets.capacity() * mem::size_of::<u32>();
        let edges = self.edges.capacity() * mem::size_of::<u32>();
        let ids = self.node_ids.capacity() * mem::size_of::<i64>();
        let lookup = self.id_to_index.capacity() * (mem::size_of::<i64>() + mem::size_of::<u32>());

        base + offsets + edges + ids + lookup
    }
}
