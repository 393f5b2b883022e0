use std::collections::BTreeSet;

use super::dijkstra_data::DijkstraData;
use crate::graphs::{multi_graph::MultiGraph, Vertex};

/// Vertices that have not been finalized yet.
///
/// Kept ordered so that selection scans vertices in ascending id order.
pub struct UnvisitedSet {
    vertices: BTreeSet<Vertex>,
}

impl UnvisitedSet {
    pub fn new(graph: &MultiGraph) -> Self {
        UnvisitedSet {
            vertices: graph.vertices().collect(),
        }
    }

    pub fn contains(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    pub fn remove(&mut self, vertex: Vertex) -> bool {
        self.vertices.remove(&vertex)
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// The unvisited vertex with the smallest known distance. Ties go to the
    /// smallest vertex id. Returns `None` if no unvisited vertex was reached.
    pub fn closest(&self, data: &DijkstraData) -> Option<Vertex> {
        self.vertices
            .iter()
            .filter_map(|&vertex| Some((data.get_distance(vertex)?, vertex)))
            .min_by_key(|&(distance, _)| distance)
            .map(|(_, vertex)| vertex)
    }
}
