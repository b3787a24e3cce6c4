//! Graph construction module

use std::collections::HashMap;

use crate::config::EdgePolicy;
use crate::graph::CompressedGraph;

/// Builder for incrementally constructing a CompressedGraph
pub struct GraphBuilder {
    /// Mapping from original ids to node indices
    id_to_index: HashMap<i64, u32>,

    /// Original ids in order of first appearance
    node_ids: Vec<i64>,

    /// Adjacency lists for each node
    adjacency_lists: Vec<Vec<u32>>,
}

impl GraphBuilder {
    /// Create a new graph builder with the given node capacity
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id_to_index: HashMap::with_capacity(capacity),
            node_ids: Vec::with_capacity(capacity),
            adjacency_lists: Vec::with_capacity(capacity),
        }
    }

    /// Get or create a node index for the given id
    pub fn get_or_create_node(&mut self, id: i64) -> u32 {
        if let Some(&idx) = self.id_to_index.get(&id) {
            return idx;
        }

        let idx = self.node_ids.len() as u32;
        self.id_to_index.insert(id, idx);
        self.node_ids.push(id);
        self.adjacency_lists.push(Vec::new());

        idx
    }

    /// Add an edge from one node to another
    pub fn add_edge(&mut self, src_id: i64, dst_id: i64) {
        let src_idx = self.get_or_create_node(src_id);
        let dst_idx = self.get_or_create_node(dst_id);

        self.adjacency_lists[src_idx as usize].push(dst_idx);
    }

    /// Number of distinct nodes seen so far
    pub fn node_count(&self) -> usize {
        self.node_ids.len()
    }

    /// Build the compressed graph
    pub fn build(mut self, policy: EdgePolicy) -> CompressedGraph {
        for list in &mut self.adjacency_lists {
            // Sort for binary search efficiency
            list.sort_unstable();
            if policy == EdgePolicy::Collapse {
                list.dedup();
            }
        }

        let edge_count: usize = self.adjacency_lists.iter().map(Vec::len).sum();
        log::debug!(
            "Building CSR with {} nodes and {} edges ({:?})",
            self.node_ids.len(),
            edge_count,
            policy
        );

        // Create offsets array
        let mut offsets = Vec::with_capacity(self.node_ids.len() + 1);
        offsets.push(0);

        let mut offset = 0;
        for list in &self.adjacency_lists {
            offset += list.len() as u32;
            offsets.push(offset);
        }

        // Create edges array, releasing each list as it is copied
        let mut edges = Vec::with_capacity(edge_count);
        for list in self.adjacency_lists.drain(..) {
            edges.extend_from_slice(&list);
        }

        CompressedGraph::from_parts(offsets, edges, self.node_ids, self.id_to_index)
    }
}
