pub mod dijkstra_data;
pub mod unvisited_set;
