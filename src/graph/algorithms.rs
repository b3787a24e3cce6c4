//! Graph algorithms for analysis

use std::collections::VecDeque;

use crate::graph::CompressedGraph;

const UNREACHED: u32 = u32::MAX;

/// Reusable buffers for single-source shortest paths on an unweighted graph.
///
/// After [`shortest_path_dag`] the workspace holds, for every node reached
/// from the source, its BFS distance and the number of distinct shortest
/// paths leading to it. `order` lists reached nodes by non-decreasing
/// distance, which is the order Brandes' accumulation walks backwards.
pub struct PathWorkspace {
    /// BFS distance per node, `u32::MAX` if unreached
    pub dist: Vec<u32>,

    /// Number of shortest paths from the source per node
    pub sigma: Vec<f64>,

    /// Reached nodes in visiting order
    pub order: Vec<u32>,

    queue: VecDeque<u32>,
}

impl PathWorkspace {
    /// Allocate buffers for a graph with `node_count` nodes
    pub fn new(node_count: usize) -> Self {
        Self {
            dist: vec![UNREACHED; node_count],
            sigma: vec![0.0; node_count],
            order: Vec::new(),
            queue: VecDeque::new(),
        }
    }

    /// Whether `node` was reached by the last search
    pub fn reached(&self, node: usize) -> bool {
        self.dist[node] != UNREACHED
    }

    /// Reset only the entries touched by the previous search
    fn reset(&mut self) {
        for &node in &self.order {
            self.dist[node as usize] = UNREACHED;
            self.sigma[node as usize] = 0.0;
        }
        self.order.clear();
        self.queue.clear();
    }
}

/// Breadth-first search from `source` counting shortest paths to every reachable node.
///
/// Runs in O(V + E) over the reached part of the graph. Parallel edges (if the
/// graph kept them) each contribute a distinct path.
pub fn shortest_path_dag(graph: &CompressedGraph, source: usize, ws: &mut PathWorkspace) {
    ws.reset();

    ws.dist[source] = 0;
    ws.sigma[source] = 1.0;
    ws.queue.push_back(source as u32);

    while let Some(v) = ws.queue.pop_front() {
        let v = v as usize;
        ws.order.push(v as u32);
        let next = ws.dist[v] + 1;

        for &w in graph.outgoing_edges(v) {
            let w = w as usize;
            if ws.dist[w] == UNREACHED {
                ws.dist[w] = next;
                ws.queue.push_back(w as u32);
            }
            if ws.dist[w] == next {
                ws.sigma[w] += ws.sigma[v];
            }
        }
    }
}
