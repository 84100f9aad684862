use super::*;
use crate::graph::Graph;
use crate::sample::sample_graph;

/// Test HeapEntry comparison ordering
#[test]
fn test_heap_entry_ordering() {
    let entry1 = HeapEntry {
        locality: "A",
        accumulated: Distance::from(1),
    };
    let entry2 = HeapEntry {
        locality: "B",
        accumulated: Distance::from(2),
    };
    let entry3 = HeapEntry {
        locality: "C",
        accumulated: Distance::from(1),
    };

    // Lower distance should compare as less
    assert_eq!(entry1.cmp(&entry2), std::cmp::Ordering::Less);
    assert_eq!(entry2.cmp(&entry1), std::cmp::Ordering::Greater);

    // Equal distances fall back to locality name
    assert_eq!(entry1.cmp(&entry3), std::cmp::Ordering::Less);

    assert_eq!(entry1, entry1.clone());
    assert_ne!(entry1, entry2);
}

#[test]
fn test_shortest_path_sample_alcorcon_fuenlabrada() {
    let graph = sample_graph().unwrap();
    let result = shortest_path(&graph, "Alcorcón", "Fuenlabrada").unwrap();

    assert!(result.found);
    assert_eq!(result.localities, vec!["Alcorcón", "Móstoles", "Fuenlabrada"]);
    assert_eq!(result.distance, Distance::from(13));
    assert_eq!(result.hops, 2);
}

#[test]
fn test_shortest_path_prefers_lighter_multi_hop() {
    let graph = sample_graph().unwrap();
    // The direct edge and the Torrejón detour (20 + 15) both total 35
    let result = shortest_path(&graph, "Madrid", "Alcalá de Henares").unwrap();
    assert_eq!(result.distance, Distance::from(35));

    // Getafe -> Madrid direct (16) beats Getafe -> Fuenlabrada -> ... (36)
    let result = shortest_path(&graph, "Getafe", "Madrid").unwrap();
    assert_eq!(result.localities, vec!["Getafe", "Madrid"]);
    assert_eq!(result.distance, Distance::from(16));
}

#[test]
fn test_shortest_path_weight_matches_route() {
    let graph = sample_graph().unwrap();
    let result = shortest_path(&graph, "Villanueva de la Cañada", "Getafe").unwrap();
    assert!(result.found);
    assert_eq!(
        graph.path_distance(&result.localities).unwrap(),
        result.distance
    );
    // Villanueva -> Boadilla -> Madrid -> Getafe = 7 + 15 + 16
    assert_eq!(result.distance, Distance::from(38));
}

#[test]
fn test_shortest_path_same_endpoint() {
    let graph = sample_graph().unwrap();
    let result = shortest_path(&graph, "Madrid", "Madrid").unwrap();
    assert!(result.found);
    assert_eq!(result.localities, vec!["Madrid"]);
    assert_eq!(result.distance, Distance::ZERO);
}

#[test]
fn test_shortest_path_unreachable() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 1.0).unwrap();
    graph.add_edge("C", "D", 1.0).unwrap();

    let result = shortest_path(&graph, "A", "D").unwrap();
    assert!(!result.found);
    assert!(result.localities.is_empty());
    assert_eq!(result.distance, Distance::UNREACHABLE);
}

#[test]
fn test_shortest_path_unknown_node() {
    let graph = sample_graph().unwrap();
    let err = shortest_path(&graph, "Madrid", "Atlantis").unwrap_err();
    assert!(matches!(err, RouteError::UnknownNode { ref id } if id == "Atlantis"));

    let err = shortest_path(&graph, "Atlantis", "Madrid").unwrap_err();
    assert!(matches!(err, RouteError::UnknownNode { .. }));
}

#[test]
fn test_shortest_path_fractional_weights() {
    let mut graph = Graph::new();
    graph.add_edge("A", "B", 0.5).unwrap();
    graph.add_edge("B", "C", 0.25).unwrap();
    graph.add_edge("A", "C", 1.0).unwrap();

    let result = shortest_path(&graph, "A", "C").unwrap();
    assert_eq!(result.localities, vec!["A", "B", "C"]);
    assert_eq!(result.distance, Distance::new(0.75));
}
