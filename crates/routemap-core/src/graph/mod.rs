//! Route map storage and queries
//!
//! Provides the undirected weighted locality graph and its queries:
//! - Dijkstra shortest route
//! - DFS/BFS connectivity
//! - Threshold filtering on incident distances
//! - Simple route enumeration and longest simple route
//! - Graph provider trait for read-only access

pub mod algos;
pub mod path;
mod queries;
pub mod store;
pub mod traversal;
pub mod types;

pub use store::{Adjacency, Graph};
pub use traversal::GraphProvider;
pub use types::{ConnectivityMethod, Distance, LongestPathStrategy, PathResult, Route};
