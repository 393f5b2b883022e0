use std::fmt;

use ahash::{HashMap, HashMapExt};
use log::debug;
use serde::{Deserialize, Serialize};

use crate::graphs::{multi_graph::MultiGraph, Cost, Distance, Vertex};

/// Distance, predecessor and edge-cost tables of a single-source search.
///
/// A vertex without a distance has not been reached. The source has a
/// distance of zero and neither a predecessor nor an edge cost.
#[derive(Clone, Debug)]
pub struct DijkstraData {
    source: Vertex,
    distances: HashMap<Vertex, Distance>,
    predecessors: HashMap<Vertex, Vertex>,
    edge_costs: HashMap<Vertex, Cost>,
}

impl DijkstraData {
    pub fn new(source: Vertex) -> Self {
        let mut distances = HashMap::new();
        distances.insert(source, 0);

        DijkstraData {
            source,
            distances,
            predecessors: HashMap::new(),
            edge_costs: HashMap::new(),
        }
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    /// Retrieves the distance to a given vertex, `None` if it was not reached.
    pub fn get_distance(&self, vertex: Vertex) -> Option<Distance> {
        self.distances.get(&vertex).copied()
    }

    pub fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        self.predecessors.get(&vertex).copied()
    }

    /// Cost of the parallel edge used in the best relaxation into `vertex`.
    pub fn get_edge_cost(&self, vertex: Vertex) -> Option<Cost> {
        self.edge_costs.get(&vertex).copied()
    }

    pub fn is_reachable(&self, vertex: Vertex) -> bool {
        self.distances.contains_key(&vertex)
    }

    pub fn number_of_reached_vertices(&self) -> usize {
        self.distances.len()
    }

    /// Relaxes the edge `tail -> head` with the given cost. Returns whether
    /// the distance of `head` improved.
    ///
    /// Nothing happens if `tail` itself has not been reached.
    pub fn relax(&mut self, tail: Vertex, head: Vertex, cost: Cost) -> bool {
        let Some(distance_tail) = self.get_distance(tail) else {
            return false;
        };

        let alternative_distance_head = distance_tail.saturating_add(Distance::from(cost));
        let improves = self
            .get_distance(head)
            .map_or(true, |current_distance_head| {
                alternative_distance_head < current_distance_head
            });

        if improves {
            debug!(
                "relaxed {} -> {} with cost {}, distance is now {}",
                tail, head, cost, alternative_distance_head
            );
            self.distances.insert(head, alternative_distance_head);
            self.predecessors.insert(head, tail);
            self.edge_costs.insert(head, cost);
        }

        improves
    }

    /// One row per vertex of `graph`, in ascending vertex order.
    pub fn table(&self, graph: &MultiGraph) -> DistanceTable {
        let rows = graph
            .vertices()
            .map(|vertex| TableRow {
                vertex,
                distance: self.get_distance(vertex),
                predecessor: self.get_predecessor(vertex),
                edge_cost: self.get_edge_cost(vertex),
            })
            .collect();

        DistanceTable { rows }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    pub vertex: Vertex,
    pub distance: Option<Distance>,
    pub predecessor: Option<Vertex>,
    pub edge_cost: Option<Cost>,
}

/// Diagnostic view of a finished search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceTable {
    pub rows: Vec<TableRow>,
}

impl fmt::Display for DistanceTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn cell<T: fmt::Display>(value: Option<T>) -> String {
            value.map_or_else(|| "-".to_string(), |value| value.to_string())
        }

        writeln!(f, "vertex\tdistance\tpredecessor\tedge cost")?;
        for row in &self.rows {
            writeln!(
                f,
                "{}\t{}\t{}\t{}",
                row.vertex,
                cell(row.distance),
                cell(row.predecessor),
                cell(row.edge_cost)
            )?;
        }
        Ok(())
    }
}
