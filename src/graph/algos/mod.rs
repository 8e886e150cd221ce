//! Graph search algorithm implementations
//!
//! Contains concrete implementations of the search algorithms:
//! - `dfs`: Backtracking depth-first search
//! - `bfs`: Breadth-first search for fewest-edge paths
//! - `dijkstra`: Weighted shortest path finding
//! - `shared`: Common utilities used by multiple algorithms

pub mod bfs;
pub mod dfs;
pub mod dijkstra;
pub mod shared;

pub use bfs::breadth_first_search;
pub use dfs::depth_first_search;
pub use dijkstra::dijkstra_shortest_path;
pub use shared::{check_endpoints, reconstruct_path};
