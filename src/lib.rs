//! Wayfind Library
//!
//! Generic graph search: depth-first, breadth-first and Dijkstra shortest-path
//! search over any type implementing [`graph::Graph`].

pub mod config;
pub mod error;
pub mod graph;
pub mod logging;

pub use error::{GraphError, Result};
pub use graph::{
    breadth_first_search, depth_first_search, dijkstra_shortest_path, find_path, Graph, Path,
    Strategy,
};
