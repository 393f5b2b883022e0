pub mod edge;
pub mod multi_graph;
pub mod reader;

pub type Vertex = u32;
pub type Cost = u32;
pub type Distance = u64;
