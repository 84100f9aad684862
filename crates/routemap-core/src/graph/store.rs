//! Adjacency store for undirected weighted route maps

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use indexmap::IndexMap;

use crate::bail_invalid;
use crate::error::{Result, RouteError};
use crate::graph::traversal::GraphProvider;
use crate::graph::types::Distance;

/// Adjacency mapping: locality -> `(neighbor, distance)` pairs.
///
/// This is the construction input and the on-disk map format
/// (`{"Madrid": [["Alcorcón", 13], ...]}` in JSON). Entries keep document
/// order, which decides the winner when two entries disagree on a weight.
pub type Adjacency = IndexMap<String, Vec<(String, f64)>>;

/// Undirected weighted graph of localities.
///
/// Built once (from an [`Adjacency`] or with `add_node`/`add_edge`) and then
/// queried through `&self`; no query mutates the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<String, BTreeMap<String, Distance>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph by applying every adjacency entry as `add_edge`.
    ///
    /// A missing reverse entry is harmless; conflicting weights for the same
    /// pair resolve last-write-wins in iteration order.
    pub fn from_adjacency(adjacency: &Adjacency) -> Result<Self> {
        let mut graph = Graph::new();
        for (locality, edges) in adjacency {
            graph.add_node(locality);
            for (neighbor, distance) in edges {
                graph.add_edge(locality, neighbor, *distance)?;
            }
        }
        tracing::debug!(
            localities = graph.node_count(),
            edges = graph.edge_count(),
            "graph_built"
        );
        Ok(graph)
    }

    /// Parse a JSON adjacency mapping
    pub fn from_json_str(json: &str) -> Result<Self> {
        let adjacency: Adjacency = serde_json::from_str(json)?;
        Self::from_adjacency(&adjacency)
    }

    /// Load a JSON adjacency mapping from disk
    ///
    /// Malformed JSON is reported as `InvalidMap` naming the file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let graph = Self::from_json_str(&content).map_err(|e| match e {
            RouteError::Json(err) => RouteError::InvalidMap {
                path: path.display().to_string(),
                reason: err.to_string(),
            },
            other => other,
        })?;
        tracing::debug!(path = %path.display(), "map_loaded");
        Ok(graph)
    }

    /// Insert a locality if it is not already present
    pub fn add_node(&mut self, id: &str) {
        if !self.adjacency.contains_key(id) {
            self.adjacency.insert(id.to_string(), BTreeMap::new());
        }
    }

    /// Insert or overwrite the undirected edge `a - b`
    pub fn add_edge(&mut self, a: &str, b: &str, distance: f64) -> Result<()> {
        let weight = Distance::new(distance);
        if !weight.is_valid_weight() {
            return Err(RouteError::InvalidWeight {
                from: a.to_string(),
                to: b.to_string(),
                weight: distance,
            });
        }
        if a == b {
            return Err(RouteError::SelfLoop {
                node: a.to_string(),
            });
        }

        self.adjacency
            .entry(a.to_string())
            .or_default()
            .insert(b.to_string(), weight);
        self.adjacency
            .entry(b.to_string())
            .or_default()
            .insert(a.to_string(), weight);
        Ok(())
    }

    /// `(neighbor, distance)` pairs incident to `id`
    pub fn neighbors(&self, id: &str) -> Result<Vec<(&str, Distance)>> {
        self.adjacent(id)
            .ok_or_else(|| RouteError::unknown_node(id))
    }

    /// All localities, sorted by name
    pub fn nodes(&self) -> Vec<&str> {
        self.adjacency.keys().map(String::as_str).collect()
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeMap::len).sum::<usize>() / 2
    }

    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    pub fn degree(&self, id: &str) -> Result<usize> {
        self.adjacency
            .get(id)
            .map(BTreeMap::len)
            .ok_or_else(|| RouteError::unknown_node(id))
    }

    pub fn edge_weight(&self, a: &str, b: &str) -> Option<Distance> {
        self.adjacency.get(a)?.get(b).copied()
    }

    /// Every undirected edge exactly once, as `(a, b, distance)` with `a < b`
    pub fn edges(&self) -> Vec<(&str, &str, Distance)> {
        self.adjacency
            .iter()
            .flat_map(|(a, neighbors)| {
                neighbors
                    .iter()
                    .filter(move |(b, _)| a < *b)
                    .map(move |(b, d)| (a.as_str(), b.as_str(), *d))
            })
            .collect()
    }

    /// Total distance along `path`.
    ///
    /// Fails if a locality is unknown or two consecutive localities are not
    /// adjacent.
    pub fn path_distance<S: AsRef<str>>(&self, path: &[S]) -> Result<Distance> {
        let mut total = Distance::ZERO;
        for pair in path.windows(2) {
            let (a, b) = (pair[0].as_ref(), pair[1].as_ref());
            for id in [a, b] {
                if !self.contains(id) {
                    return Err(RouteError::unknown_node(id));
                }
            }
            match self.edge_weight(a, b) {
                Some(d) => total = total + d,
                None => bail_invalid!("route step", format!("{} -> {}", a, b)),
            }
        }
        if let [only] = path {
            if !self.contains(only.as_ref()) {
                return Err(RouteError::unknown_node(only.as_ref()));
            }
        }
        Ok(total)
    }

    /// Symmetric adjacency mapping reproducing this graph
    pub fn to_adjacency(&self) -> Adjacency {
        self.adjacency
            .iter()
            .map(|(id, neighbors)| {
                let edges = neighbors
                    .iter()
                    .map(|(n, d)| (n.clone(), d.value()))
                    .collect();
                (id.clone(), edges)
            })
            .collect()
    }

    /// Serialize as a JSON adjacency mapping
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.to_adjacency())?)
    }
}

impl GraphProvider for Graph {
    fn localities(&self) -> Vec<&str> {
        self.nodes()
    }

    fn adjacent(&self, id: &str) -> Option<Vec<(&str, Distance)>> {
        self.adjacency
            .get(id)
            .map(|neighbors| neighbors.iter().map(|(n, d)| (n.as_str(), *d)).collect())
    }

    fn contains(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    fn locality_count(&self) -> usize {
        self.node_count()
    }

    fn weight(&self, a: &str, b: &str) -> Option<Distance> {
        self.edge_weight(a, b)
    }
}
