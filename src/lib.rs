use std::fmt;

use clap::ValueEnum;
use error::{Error, Result};
use graphs::{edge::WeightedEdge, multi_graph::MultiGraph};
use search::{
    collections::dijkstra_data::DistanceTable,
    dijkstra::dijkstra_single_source,
    path::{get_path, Path, ShortestPathRequest},
};
use serde::Serialize;

pub mod error;
pub mod graphs;
pub mod search;
pub mod utility;

#[derive(Debug, ValueEnum, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Answer to a single query. `path` is `None` if the target is unreachable.
#[derive(Debug, Serialize)]
pub struct QueryResult {
    pub request: ShortestPathRequest,
    pub path: Option<Path>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub table: Option<DistanceTable>,
}

/// Builds the multigraph from `edges` and finds the shortest path for
/// `request`.
///
/// An unreachable target is part of the result, while unknown endpoints are
/// reported as [`Error::UnknownVertex`].
pub fn answer_query(
    edges: &[WeightedEdge],
    request: &ShortestPathRequest,
) -> Result<QueryResult> {
    let graph = MultiGraph::from_edges(edges);
    for vertex in [request.source(), request.target()] {
        if !graph.contains_vertex(vertex) {
            return Err(Error::UnknownVertex(vertex));
        }
    }

    let data = dijkstra_single_source(&graph, request.source())?;
    let path = match get_path(&data, request.target()) {
        Ok(path) => Some(path),
        Err(Error::UnreachableTarget { .. }) => None,
        Err(error) => return Err(error),
    };

    Ok(QueryResult {
        request: *request,
        path,
        table: Some(data.table(&graph)),
    })
}

impl fmt::Display for QueryResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.path {
            Some(path) => {
                writeln!(f, "path: {}", path)?;
                writeln!(f, "cost: {}", path.distance)?;
            }
            None => writeln!(
                f,
                "no path from {} to {}",
                self.request.source(),
                self.request.target()
            )?,
        }

        if let Some(table) = &self.table {
            write!(f, "{}", table)?;
        }

        Ok(())
    }
}
