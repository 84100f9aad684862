//! Exhaustive enumeration of simple routes between two localities
//!
//! Exponential in the worst case; intended for maps of a few dozen
//! localities.

use crate::error::{Result, RouteError};
use crate::graph::types::{Distance, Route};
use crate::graph::GraphProvider;
use crate::log_search_metrics;
use crate::logging::SearchMetrics;
use std::collections::VecDeque;

/// Frontier entry: the locality being expanded and the route that reached it
struct Frontier<'a> {
    current: &'a str,
    path: Vec<&'a str>,
    distance: Distance,
}

/// Every route from `from` to `to` that visits no locality twice.
///
/// Routes are produced in breadth-first order (non-decreasing hop count).
/// When `from == to` the single route `[from]` is returned.
#[tracing::instrument(skip(provider), fields(from = %from, to = %to))]
pub fn all_simple_paths(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<Vec<Route>> {
    for id in [from, to] {
        if !provider.contains(id) {
            return Err(RouteError::unknown_node(id));
        }
    }

    let metrics = SearchMetrics::new();
    let mut routes = Vec::new();
    let mut queue: VecDeque<Frontier<'_>> = VecDeque::new();
    queue.push_back(Frontier {
        current: from,
        path: vec![from],
        distance: Distance::ZERO,
    });

    while let Some(Frontier {
        current,
        path,
        distance,
    }) = queue.pop_front()
    {
        metrics.record_expansion();

        if current == to {
            routes.push(Route {
                localities: path.iter().map(|l| l.to_string()).collect(),
                distance,
            });
            continue;
        }

        for (neighbor, weight) in provider.adjacent(current).unwrap_or_default() {
            if path.contains(&neighbor) {
                continue;
            }
            let mut extended = path.clone();
            extended.push(neighbor);
            queue.push_back(Frontier {
                current: neighbor,
                path: extended,
                distance: distance + weight,
            });
        }
    }

    log_search_metrics!(&metrics, "all_simple_paths");
    tracing::debug!(routes = routes.len(), "routes enumerated");
    Ok(routes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::Graph;
    use crate::sample::sample_graph;
    use std::collections::HashSet;

    fn localities(route: &Route) -> Vec<&str> {
        route.localities.iter().map(String::as_str).collect()
    }

    #[test]
    fn test_sample_villanueva_to_madrid() {
        let graph = sample_graph().unwrap();
        let routes = all_simple_paths(&graph, "Villanueva de la Cañada", "Madrid").unwrap();

        let via_boadilla = routes
            .iter()
            .find(|r| localities(r) == ["Villanueva de la Cañada", "Boadilla del Monte", "Madrid"])
            .expect("route via Boadilla");
        assert_eq!(via_boadilla.distance, Distance::from(22));

        let via_villaviciosa = routes
            .iter()
            .find(|r| {
                localities(r) == ["Villanueva de la Cañada", "Villaviciosa de Odón", "Madrid"]
            })
            .expect("route via Villaviciosa");
        assert_eq!(via_villaviciosa.distance, Distance::from(33));

        // Madrid is a dead end for every other branch, so these are the only two
        assert_eq!(routes.len(), 2);
        assert!(routes.iter().all(Route::is_simple));
    }

    #[test]
    fn test_routes_are_distinct_and_weighted() {
        let graph = sample_graph().unwrap();
        let routes = all_simple_paths(&graph, "Alcorcón", "Getafe").unwrap();

        let distinct: HashSet<Vec<&str>> = routes.iter().map(localities).collect();
        assert_eq!(distinct.len(), routes.len());

        for route in &routes {
            assert!(route.is_simple());
            assert_eq!(route.localities.first().unwrap(), "Alcorcón");
            assert_eq!(route.localities.last().unwrap(), "Getafe");
            assert_eq!(graph.path_distance(&route.localities).unwrap(), route.distance);
        }
    }

    #[test]
    fn test_cycle_graph_has_two_routes() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_edge("B", "C", 1.0).unwrap();
        graph.add_edge("C", "D", 1.0).unwrap();
        graph.add_edge("D", "A", 1.0).unwrap();

        let routes = all_simple_paths(&graph, "A", "C").unwrap();
        let found: HashSet<Vec<&str>> = routes.iter().map(localities).collect();
        assert_eq!(
            found,
            HashSet::from([vec!["A", "B", "C"], vec!["A", "D", "C"]])
        );
    }

    #[test]
    fn test_complete_graph_count() {
        // K4: routes between two fixed vertices = 1 + 2 + 2 = 5
        let mut graph = Graph::new();
        let ids = ["A", "B", "C", "D"];
        for (i, a) in ids.iter().enumerate() {
            for b in &ids[i + 1..] {
                graph.add_edge(a, b, 1.0).unwrap();
            }
        }
        assert_eq!(all_simple_paths(&graph, "A", "D").unwrap().len(), 5);
    }

    #[test]
    fn test_breadth_first_order() {
        let graph = sample_graph().unwrap();
        let routes = all_simple_paths(&graph, "Móstoles", "Madrid").unwrap();
        let hops: Vec<usize> = routes.iter().map(Route::hops).collect();
        assert!(hops.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_same_endpoint() {
        let graph = sample_graph().unwrap();
        let routes = all_simple_paths(&graph, "Getafe", "Getafe").unwrap();
        assert_eq!(routes.len(), 1);
        assert_eq!(routes[0].localities, vec!["Getafe"]);
        assert_eq!(routes[0].distance, Distance::ZERO);
    }

    #[test]
    fn test_unreachable_is_empty() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_node("C");
        assert!(all_simple_paths(&graph, "A", "C").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_node() {
        let graph = sample_graph().unwrap();
        let err = all_simple_paths(&graph, "Atlantis", "Madrid").unwrap_err();
        assert!(matches!(err, RouteError::UnknownNode { .. }));
    }
}
