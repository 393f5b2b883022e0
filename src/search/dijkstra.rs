use log::{debug, info};

use super::{
    collections::{dijkstra_data::DijkstraData, unvisited_set::UnvisitedSet},
    path::{get_path, Path},
    PathFinding,
};
use crate::{
    error::{Error, Result},
    graphs::{multi_graph::MultiGraph, Distance, Vertex},
};

/// Computes the distances of all vertices from `source`.
///
/// Every iteration finalizes the closest unvisited vertex, found by a linear
/// scan over the unvisited set, so the search is quadratic in the number of
/// vertices. It stops early once no unvisited vertex is reachable.
pub fn dijkstra_single_source(graph: &MultiGraph, source: Vertex) -> Result<DijkstraData> {
    if !graph.contains_vertex(source) {
        return Err(Error::UnknownVertex(source));
    }

    let mut data = DijkstraData::new(source);
    let mut unvisited = UnvisitedSet::new(graph);

    for _ in 0..graph.number_of_vertices() {
        let Some(tail) = unvisited.closest(&data) else {
            debug!("{} vertices are unreachable from {}", unvisited.len(), source);
            break;
        };

        for (head, costs) in graph.neighbors(tail)? {
            if !unvisited.contains(head) {
                continue;
            }
            for &cost in costs {
                data.relax(tail, head, cost);
            }
        }

        unvisited.remove(tail);
    }

    info!(
        "search from {} reached {} of {} vertices",
        source,
        data.number_of_reached_vertices(),
        graph.number_of_vertices()
    );

    Ok(data)
}

pub fn dijkstra_one_to_one(graph: &MultiGraph, source: Vertex, target: Vertex) -> Result<Path> {
    if !graph.contains_vertex(target) {
        return Err(Error::UnknownVertex(target));
    }

    let data = dijkstra_single_source(graph, source)?;
    get_path(&data, target)
}

pub struct Dijkstra<'a> {
    pub graph: &'a MultiGraph,
}

impl PathFinding for Dijkstra<'_> {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Result<Path> {
        dijkstra_one_to_one(self.graph, source, target)
    }

    fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Result<Distance> {
        if !self.graph.contains_vertex(target) {
            return Err(Error::UnknownVertex(target));
        }

        dijkstra_single_source(self.graph, source)?
            .get_distance(target)
            .ok_or(Error::UnreachableTarget {
                origin: source,
                target,
            })
    }
}
