//! Whole-graph reachability checks
//!
//! DFS and BFS are written independently so each traversal discipline can be
//! checked against the other.

use crate::error::{Result, RouteError};
use crate::graph::types::ConnectivityMethod;
use crate::graph::GraphProvider;
use std::collections::{HashSet, VecDeque};

/// Localities reachable from `start` by depth-first search (explicit stack)
pub fn dfs_reachable<'a>(provider: &'a dyn GraphProvider, start: &'a str) -> HashSet<&'a str> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut stack: Vec<&str> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        for (neighbor, _) in provider.adjacent(current).unwrap_or_default() {
            if !visited.contains(neighbor) {
                stack.push(neighbor);
            }
        }
    }

    visited
}

/// Localities reachable from `start` by breadth-first search
pub fn bfs_reachable<'a>(provider: &'a dyn GraphProvider, start: &'a str) -> HashSet<&'a str> {
    let mut visited: HashSet<&str> = HashSet::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        for (neighbor, _) in provider.adjacent(current).unwrap_or_default() {
            if visited.insert(neighbor) {
                queue.push_back(neighbor);
            }
        }
    }

    visited
}

/// Localities reachable from `start` using the given traversal
pub fn reachable_from<'a>(
    provider: &'a dyn GraphProvider,
    start: &'a str,
    method: ConnectivityMethod,
) -> Result<HashSet<&'a str>> {
    if !provider.contains(start) {
        return Err(RouteError::unknown_node(start));
    }
    Ok(match method {
        ConnectivityMethod::Dfs => dfs_reachable(provider, start),
        ConnectivityMethod::Bfs => bfs_reachable(provider, start),
    })
}

/// True iff every locality is reachable from the first one.
///
/// Maps with zero or one locality are connected.
#[tracing::instrument(skip(provider), fields(localities = provider.locality_count()))]
pub fn is_connected(provider: &dyn GraphProvider, method: ConnectivityMethod) -> bool {
    let localities = provider.localities();
    let Some(&start) = localities.first() else {
        return true;
    };

    let visited = match method {
        ConnectivityMethod::Dfs => dfs_reachable(provider, start),
        ConnectivityMethod::Bfs => bfs_reachable(provider, start),
    };

    let connected = visited.len() == localities.len();
    tracing::debug!(visited = visited.len(), connected, "connectivity checked");
    connected
}
