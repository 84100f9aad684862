//! Longest simple route between two localities
//!
//! Two memoization strategies are available (see [`LongestPathStrategy`]):
//!
//! - `Exact` caches the best continuation per `(locality, visited set)`. The
//!   continuation from a locality depends on which localities the prefix has
//!   already used, so this key is what makes the cache sound.
//! - `NodeMemo` caches per locality only and returns the route found the
//!   first time that locality was explored, whatever prefix reaches it later.
//!   A stale entry can hide a longer route, so the result is a valid simple
//!   route but not necessarily the longest one.
//!
//! Both searches recurse once per locality on the current route, so depth is
//! bounded by the locality count.

use crate::error::{Result, RouteError};
use crate::graph::types::{Distance, LongestPathStrategy, PathResult, Route};
use crate::graph::GraphProvider;
use crate::log_search_metrics;
use crate::logging::SearchMetrics;
use std::collections::HashMap;

/// Fixed-size bitset over locality indices
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct VisitedSet {
    words: Vec<u64>,
}

impl VisitedSet {
    fn with_capacity(n: usize) -> Self {
        VisitedSet {
            words: vec![0; n.div_ceil(64)],
        }
    }

    fn contains(&self, i: usize) -> bool {
        self.words[i / 64] & (1u64 << (i % 64)) != 0
    }

    fn insert(&mut self, i: usize) {
        self.words[i / 64] |= 1u64 << (i % 64);
    }

    fn remove(&mut self, i: usize) {
        self.words[i / 64] &= !(1u64 << (i % 64));
    }
}

/// Index-based copy of the map, so the searches can key memo tables by `usize`
struct IndexedMap<'a> {
    names: Vec<&'a str>,
    adjacency: Vec<Vec<(usize, Distance)>>,
}

impl<'a> IndexedMap<'a> {
    fn build(provider: &'a dyn GraphProvider) -> Self {
        let names = provider.localities();
        let index: HashMap<&str, usize> =
            names.iter().enumerate().map(|(i, n)| (*n, i)).collect();
        let adjacency: Vec<Vec<(usize, Distance)>> = names
            .iter()
            .map(|name| {
                provider
                    .adjacent(name)
                    .unwrap_or_default()
                    .into_iter()
                    .filter_map(|(n, d)| index.get(n).map(|&i| (i, d)))
                    .collect::<Vec<_>>()
            })
            .collect();
        IndexedMap { names, adjacency }
    }

    fn index_of(&self, id: &str) -> Option<usize> {
        self.names.iter().position(|n| *n == id)
    }

    fn route(&self, path: &[usize], distance: Distance) -> Route {
        Route {
            localities: path.iter().map(|&i| self.names[i].to_string()).collect(),
            distance,
        }
    }
}

/// Best continuation: the route from a locality to the destination and its distance
type Suffix = Option<(Vec<usize>, Distance)>;

struct ExactSearch<'m, 'a> {
    map: &'m IndexedMap<'a>,
    destination: usize,
    memo: HashMap<(usize, VisitedSet), Suffix>,
    metrics: &'m SearchMetrics,
}

impl ExactSearch<'_, '_> {
    /// Longest route from `node` to the destination avoiding `visited`.
    ///
    /// `visited` already contains `node` and is restored before returning.
    fn best_suffix(&mut self, node: usize, visited: &mut VisitedSet) -> Suffix {
        self.metrics.record_expansion();

        if node == self.destination {
            return Some((vec![node], Distance::ZERO));
        }

        let key = (node, visited.clone());
        if let Some(cached) = self.memo.get(&key) {
            self.metrics.record_memo_hit();
            return cached.clone();
        }
        self.metrics.record_memo_miss();

        let map = self.map;
        let mut best: Suffix = None;
        for &(neighbor, weight) in &map.adjacency[node] {
            if visited.contains(neighbor) {
                continue;
            }
            visited.insert(neighbor);
            let continuation = self.best_suffix(neighbor, visited);
            visited.remove(neighbor);

            if let Some((suffix, rest)) = continuation {
                let total = weight + rest;
                if best
                    .as_ref()
                    .is_none_or(|(_, current)| total.value() > current.value())
                {
                    let mut path = Vec::with_capacity(suffix.len() + 1);
                    path.push(node);
                    path.extend(suffix);
                    best = Some((path, total));
                }
            }
        }

        self.memo.insert(key, best.clone());
        best
    }
}

struct NodeMemoSearch<'m, 'a> {
    map: &'m IndexedMap<'a>,
    destination: usize,
    memo: HashMap<usize, (Vec<usize>, Distance)>,
    metrics: &'m SearchMetrics,
}

impl NodeMemoSearch<'_, '_> {
    /// Best complete route (origin to destination) found through `node`.
    ///
    /// An empty route with distance zero means nothing was found.
    fn explore(
        &mut self,
        node: usize,
        path: &mut Vec<usize>,
        so_far: Distance,
    ) -> (Vec<usize>, Distance) {
        self.metrics.record_expansion();

        if node == self.destination {
            return (path.clone(), so_far);
        }

        if let Some(cached) = self.memo.get(&node) {
            self.metrics.record_memo_hit();
            return cached.clone();
        }
        self.metrics.record_memo_miss();

        let map = self.map;
        let mut best = (Vec::new(), Distance::ZERO);
        for &(neighbor, weight) in &map.adjacency[node] {
            if path.contains(&neighbor) {
                continue;
            }
            path.push(neighbor);
            let candidate = self.explore(neighbor, path, so_far + weight);
            path.pop();

            if candidate.1.value() > best.1.value() {
                best = candidate;
            }
        }

        self.memo.insert(node, best.clone());
        best
    }
}

/// Find the maximum-distance simple route between two localities
#[tracing::instrument(skip(provider), fields(from = %from, to = %to, strategy = ?strategy))]
pub fn longest_simple_path(
    provider: &dyn GraphProvider,
    from: &str,
    to: &str,
    strategy: LongestPathStrategy,
) -> Result<PathResult> {
    let map = IndexedMap::build(provider);
    let origin = map
        .index_of(from)
        .ok_or_else(|| RouteError::unknown_node(from))?;
    let destination = map
        .index_of(to)
        .ok_or_else(|| RouteError::unknown_node(to))?;

    let metrics = SearchMetrics::new();
    let best = match strategy {
        LongestPathStrategy::Exact => {
            let mut search = ExactSearch {
                map: &map,
                destination,
                memo: HashMap::new(),
                metrics: &metrics,
            };
            let mut visited = VisitedSet::with_capacity(map.names.len());
            visited.insert(origin);
            search.best_suffix(origin, &mut visited)
        }
        LongestPathStrategy::NodeMemo => {
            let mut search = NodeMemoSearch {
                map: &map,
                destination,
                memo: HashMap::new(),
                metrics: &metrics,
            };
            let mut path = vec![origin];
            let (route, distance) = search.explore(origin, &mut path, Distance::ZERO);
            (!route.is_empty()).then_some((route, distance))
        }
    };
    log_search_metrics!(&metrics, "longest_simple_path");

    Ok(match best {
        Some((path, distance)) => {
            let hops = path.len().saturating_sub(1);
            tracing::debug!(distance = %distance, hops, "route found");
            PathResult::found(from, to, map.route(&path, distance))
        }
        None => {
            tracing::debug!("no route");
            PathResult::unreachable(from, to)
        }
    })
}
