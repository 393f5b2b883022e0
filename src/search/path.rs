use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use super::collections::dijkstra_data::DijkstraData;
use crate::{
    error::{Error, Result},
    graphs::{multi_graph::MultiGraph, Distance, Vertex},
};

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    source: Vertex,
    target: Vertex,
}

impl ShortestPathRequest {
    /// Returns `None` if one of the vertices is the reserved id 0.
    pub fn new(source: Vertex, target: Vertex) -> Option<ShortestPathRequest> {
        if source == 0 || target == 0 {
            return None;
        }

        Some(ShortestPathRequest { source, target })
    }

    pub fn source(&self) -> Vertex {
        self.source
    }

    pub fn target(&self) -> Vertex {
        self.target
    }
}

/// Represents a path in a graph.
///
/// This struct encapsulates the vertices that form a path, starting at the
/// source, and the total cost of traversing it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.vertices.iter().join(" -> "))
    }
}

/// Backtraces the predecessors from `target` to `source`.
///
/// Fails with [`Error::UnreachableTarget`] if the target was not reached or
/// the predecessor chain does not lead back to the source.
pub fn reconstruct_path(
    data: &DijkstraData,
    source: Vertex,
    target: Vertex,
) -> Result<Vec<Vertex>> {
    let unreachable = || Error::UnreachableTarget {
        origin: source,
        target,
    };

    if !data.is_reachable(target) {
        return Err(unreachable());
    }

    let mut vertices = vec![target];
    let mut current = target;
    while current != source {
        // a path never visits more vertices than the search reached
        if vertices.len() >= data.number_of_reached_vertices() {
            return Err(unreachable());
        }
        current = data.get_predecessor(current).ok_or_else(unreachable)?;
        vertices.push(current);
    }

    vertices.reverse();
    Ok(vertices)
}

/// Sums the cost of the edges used to enter every vertex but the first.
///
/// Returns `None` if one of these vertices was never entered by the search.
pub fn total_cost(vertices: &[Vertex], data: &DijkstraData) -> Option<Distance> {
    vertices
        .iter()
        .skip(1)
        .map(|&vertex| data.get_edge_cost(vertex).map(Distance::from))
        .sum()
}

/// Constructs the path from the search source to `target`.
pub fn get_path(data: &DijkstraData, target: Vertex) -> Result<Path> {
    let vertices = reconstruct_path(data, data.source(), target)?;
    let distance = total_cost(&vertices, data).ok_or(Error::UnreachableTarget {
        origin: data.source(),
        target,
    })?;
    debug_assert_eq!(Some(distance), data.get_distance(target));

    Ok(Path { vertices, distance })
}

/// Check if a path is a valid walk through `graph` whose distance matches its
/// cheapest parallel edges.
pub fn validate_path(graph: &MultiGraph, path: &Path) -> std::result::Result<(), String> {
    if path.vertices.is_empty() {
        return Err("path is empty".to_string());
    }

    let mut distance: Distance = 0;
    for (&tail, &head) in path.vertices.iter().tuple_windows() {
        let cheapest = graph
            .get_vertex(tail)
            .and_then(|adjacency| adjacency.get(&head))
            .and_then(|costs| costs.iter().min())
            .ok_or_else(|| format!("no edge between {} and {} found", tail, head))?;
        distance += Distance::from(*cheapest);
    }

    if distance != path.distance {
        return Err(format!(
            "wrong path distance, expected {} but path claims {}",
            distance, path.distance
        ));
    }

    Ok(())
}
