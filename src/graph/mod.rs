//! Graph search over caller-defined vertex types
//!
//! Provides the search engine:
//! - `Graph` trait for pluggable adjacency sources
//! - DFS, BFS and Dijkstra path finding producing a shared `Path` type
//! - Reachability and adjacency listing diagnostics

pub mod algos;
pub mod path;
pub mod reach;
pub mod search;
pub mod traversal;
pub mod types;

pub use algos::{breadth_first_search, depth_first_search, dijkstra_shortest_path};
pub use path::{Path, PathDisplay};
pub use reach::{format_adjacency_list, reachable_order, reachable_set};
pub use search::find_path;
pub use traversal::Graph;
pub use types::{Strategy, Weight};
