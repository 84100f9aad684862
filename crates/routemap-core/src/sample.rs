//! Bundled sample map: ten localities around Madrid (distances in km)

use crate::error::Result;
use crate::graph::{Adjacency, Graph};

const SAMPLE_MAP: &[(&str, &[(&str, f64)])] = &[
    (
        "Madrid",
        &[
            ("Alcorcón", 13.0),
            ("Villaviciosa de Odón", 22.0),
            ("Alcalá de Henares", 35.0),
        ],
    ),
    (
        "Villanueva de la Cañada",
        &[("Villaviciosa de Odón", 11.0), ("Boadilla del Monte", 7.0)],
    ),
    ("Alcorcón", &[("Madrid", 13.0), ("Móstoles", 5.0)]),
    ("Móstoles", &[("Alcorcón", 5.0), ("Fuenlabrada", 8.0)]),
    ("Fuenlabrada", &[("Móstoles", 8.0), ("Getafe", 10.0)]),
    ("Getafe", &[("Fuenlabrada", 10.0), ("Madrid", 16.0)]),
    (
        "Villaviciosa de Odón",
        &[("Madrid", 22.0), ("Villanueva de la Cañada", 11.0)],
    ),
    (
        "Boadilla del Monte",
        &[("Villanueva de la Cañada", 7.0), ("Madrid", 15.0)],
    ),
    (
        "Alcalá de Henares",
        &[("Madrid", 35.0), ("Torrejón de Ardoz", 15.0)],
    ),
    (
        "Torrejón de Ardoz",
        &[("Alcalá de Henares", 15.0), ("Madrid", 20.0)],
    ),
];

/// The sample map as an adjacency mapping
pub fn sample_adjacency() -> Adjacency {
    SAMPLE_MAP
        .iter()
        .map(|(locality, edges)| {
            let edges = edges
                .iter()
                .map(|(neighbor, km)| (neighbor.to_string(), *km))
                .collect();
            (locality.to_string(), edges)
        })
        .collect()
}

/// The sample map as a graph
pub fn sample_graph() -> Result<Graph> {
    Graph::from_adjacency(&sample_adjacency())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shape() {
        let graph = sample_graph().unwrap();
        assert_eq!(graph.node_count(), 10);
        assert_eq!(graph.edge_count(), 12);
        assert_eq!(graph.degree("Madrid").unwrap(), 6);
    }

    #[test]
    fn test_sample_round_trip_neighbors() {
        let graph = sample_graph().unwrap();
        for (locality, edges) in sample_adjacency() {
            let neighbors = graph.neighbors(&locality).unwrap();
            for (neighbor, km) in edges {
                assert!(
                    neighbors
                        .iter()
                        .any(|(n, d)| *n == neighbor && d.value() == km),
                    "{locality} should reach {neighbor} at {km}"
                );
            }
        }
    }
}
