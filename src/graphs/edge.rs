use serde::{Deserialize, Serialize};

use super::{Cost, Vertex};

/// An undirected edge between two vertices.
///
/// Several edges with the same endpoints may exist in a multigraph, each with
/// its own cost.
#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, PartialOrd, Ord, Debug)]
pub struct WeightedEdge {
    tail: Vertex,
    head: Vertex,
    cost: Cost,
}

impl WeightedEdge {
    /// Returns `None` if one of the endpoints is the reserved vertex id 0.
    pub fn new(tail: Vertex, head: Vertex, cost: Cost) -> Option<WeightedEdge> {
        if tail == 0 || head == 0 {
            return None;
        }

        Some(WeightedEdge { tail, head, cost })
    }

    pub fn tail(&self) -> Vertex {
        self.tail
    }

    pub fn head(&self) -> Vertex {
        self.head
    }

    pub fn cost(&self) -> Cost {
        self.cost
    }

    pub fn is_loop(&self) -> bool {
        self.tail == self.head
    }
}
