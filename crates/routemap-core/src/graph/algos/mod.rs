//! Graph algorithm implementations
//!
//! Contains concrete implementations of the route queries:
//! - `dijkstra`: Weighted shortest path finding
//! - `connectivity`: DFS and BFS reachability checks
//! - `threshold`: Locality selection by incident edge distance
//! - `simple_paths`: Exhaustive simple route enumeration
//! - `longest`: Longest simple route search

pub mod connectivity;
pub mod dijkstra;
pub mod longest;
pub mod simple_paths;
pub mod threshold;

pub use connectivity::{bfs_reachable, dfs_reachable, is_connected, reachable_from};
pub use dijkstra::shortest_path;
pub use longest::longest_simple_path;
pub use simple_paths::all_simple_paths;
pub use threshold::nodes_with_all_connections_below;
