use std::fmt;

use ahash::{HashMap, HashMapExt};
use itertools::Itertools;
use log::info;

use super::{edge::WeightedEdge, Cost, Vertex};
use crate::error::{Error, Result};

/// Costs of all parallel edges to each neighbor, in insertion order.
pub type Adjacency = HashMap<Vertex, Vec<Cost>>;

/// Undirected multigraph keyed by vertex id.
///
/// Every edge is stored in both directions, so the cost list of `u` towards
/// `v` always equals the cost list of `v` towards `u`.
#[derive(Clone, Debug, Default)]
pub struct MultiGraph {
    adjacencies: HashMap<Vertex, Adjacency>,
    number_of_edges: u32,
}

impl MultiGraph {
    pub fn new() -> Self {
        MultiGraph {
            adjacencies: HashMap::new(),
            number_of_edges: 0,
        }
    }

    pub fn from_edges(edges: &[WeightedEdge]) -> MultiGraph {
        let mut graph = MultiGraph::new();
        edges.iter().for_each(|edge| graph.add_edge(edge));
        info!(
            "built multigraph with {} vertices and {} edges",
            graph.number_of_vertices(),
            graph.number_of_edges()
        );
        graph
    }

    /// Returns the adjacency of `vertex`, creating an empty one if the vertex
    /// is new.
    pub fn add_vertex(&mut self, vertex: Vertex) -> &Adjacency {
        self.adjacency_mut(vertex)
    }

    fn adjacency_mut(&mut self, vertex: Vertex) -> &mut Adjacency {
        self.adjacencies.entry(vertex).or_default()
    }

    /// Appends the edge cost to both endpoints. Self-loops are stored once.
    pub fn add_edge(&mut self, edge: &WeightedEdge) {
        self.number_of_edges += 1;
        self.adjacency_mut(edge.tail())
            .entry(edge.head())
            .or_default()
            .push(edge.cost());

        if edge.is_loop() {
            return;
        }

        self.adjacency_mut(edge.head())
            .entry(edge.tail())
            .or_default()
            .push(edge.cost());
    }

    pub fn number_of_vertices(&self) -> u32 {
        self.adjacencies.len() as u32
    }

    /// Counts parallel edges individually.
    pub fn number_of_edges(&self) -> u32 {
        self.number_of_edges
    }

    pub fn contains_vertex(&self, vertex: Vertex) -> bool {
        self.adjacencies.contains_key(&vertex)
    }

    pub fn get_vertex(&self, vertex: Vertex) -> Option<&Adjacency> {
        self.adjacencies.get(&vertex)
    }

    /// All vertices in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> {
        self.adjacencies.keys().copied().sorted_unstable()
    }

    /// Neighbors of `vertex` in ascending order, each with the costs of all
    /// parallel edges towards it.
    pub fn neighbors(
        &self,
        vertex: Vertex,
    ) -> Result<impl Iterator<Item = (Vertex, &[Cost])> + '_> {
        let adjacency = self
            .get_vertex(vertex)
            .ok_or(Error::UnknownVertex(vertex))?;

        Ok(adjacency
            .iter()
            .map(|(&neighbor, costs)| (neighbor, costs.as_slice()))
            .sorted_unstable_by_key(|&(neighbor, _)| neighbor))
    }
}

impl fmt::Display for MultiGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for vertex in self.vertices() {
            let neighbors = self
                .adjacencies
                .get(&vertex)
                .into_iter()
                .flat_map(|adjacency| adjacency.iter())
                .sorted_unstable_by_key(|&(&neighbor, _)| neighbor)
                .map(|(neighbor, costs)| format!("{} {:?}", neighbor, costs))
                .join(", ");
            writeln!(f, "{}: {}", vertex, neighbors)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edge(tail: Vertex, head: Vertex, cost: Cost) -> WeightedEdge {
        WeightedEdge::new(tail, head, cost).unwrap()
    }

    #[test]
    fn parallel_edges_are_symmetric() {
        let mut graph = MultiGraph::new();
        graph.add_edge(&edge(1, 2, 5));
        graph.add_edge(&edge(1, 2, 3));
        graph.add_edge(&edge(2, 1, 8));

        assert_eq!(graph.get_vertex(1).unwrap()[&2], vec![5, 3, 8]);
        assert_eq!(graph.get_vertex(2).unwrap()[&1], vec![5, 3, 8]);
        assert_eq!(graph.number_of_vertices(), 2);
        assert_eq!(graph.number_of_edges(), 3);
    }

    #[test]
    fn add_vertex_is_idempotent() {
        let mut graph = MultiGraph::new();
        graph.add_edge(&edge(1, 2, 4));
        assert_eq!(graph.add_vertex(1).len(), 1);
        assert!(graph.add_vertex(7).is_empty());
        assert_eq!(graph.number_of_vertices(), 3);
    }

    #[test]
    fn adjacency_stays_symmetric() {
        let mut graph = MultiGraph::new();
        graph.add_vertex(1);
        graph.add_edge(&edge(1, 2, 5));
        graph.add_vertex(2);
        graph.add_vertex(3);
        graph.add_edge(&edge(3, 1, 2));
        graph.add_edge(&edge(2, 2, 1));
        graph.add_edge(&edge(2, 1, 4));

        for vertex in graph.vertices() {
            for (neighbor, costs) in graph.neighbors(vertex).unwrap() {
                let reverse = graph.get_vertex(neighbor).and_then(|adj| adj.get(&vertex));
                assert_eq!(reverse.map(Vec::as_slice), Some(costs));
            }
        }
        assert_eq!(graph.number_of_vertices(), 3);
        assert_eq!(graph.number_of_edges(), 4);
    }

    #[test]
    fn loops_are_stored_once() {
        let graph = MultiGraph::from_edges(&[edge(3, 3, 2), edge(3, 4, 1)]);
        assert_eq!(graph.get_vertex(3).unwrap()[&3], vec![2]);
        assert_eq!(graph.number_of_edges(), 2);
    }

    #[test]
    fn unknown_vertex_lookups() {
        let graph = MultiGraph::from_edges(&[edge(1, 2, 4)]);
        assert!(graph.get_vertex(9).is_none());
        assert!(!graph.contains_vertex(9));
        assert!(matches!(graph.neighbors(9), Err(Error::UnknownVertex(9))));
    }

    #[test]
    fn neighbors_are_sorted() {
        let graph =
            MultiGraph::from_edges(&[edge(1, 9, 1), edge(1, 4, 2), edge(1, 6, 3), edge(1, 4, 7)]);
        let neighbors: Vec<_> = graph
            .neighbors(1)
            .unwrap()
            .map(|(neighbor, costs)| (neighbor, costs.to_vec()))
            .collect();
        assert_eq!(neighbors, vec![(4, vec![2, 7]), (6, vec![3]), (9, vec![1])]);
        assert_eq!(graph.vertices().collect::<Vec<_>>(), vec![1, 4, 6, 9]);
    }

    #[test]
    fn display_lists_adjacency() {
        let graph = MultiGraph::from_edges(&[edge(1, 2, 4), edge(1, 2, 6)]);
        assert_eq!(graph.to_string(), "1: 2 [4, 6]\n2: 1 [4, 6]\n");
    }
}
