use crate::{
    error::Result,
    graphs::{Distance, Vertex},
};

pub mod collections;
pub mod dijkstra;
pub mod path;

use path::Path;

pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Result<Path>;

    fn shortest_path_distance(&self, source: Vertex, target: Vertex) -> Result<Distance>;
}
