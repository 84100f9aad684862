//! Query surface on [`Graph`], delegating to [`crate::graph::algos`]

use crate::error::Result;
use crate::graph::algos;
use crate::graph::store::Graph;
use crate::graph::types::{ConnectivityMethod, Distance, LongestPathStrategy, PathResult, Route};

impl Graph {
    /// Minimum-distance route between two localities
    pub fn shortest_path(&self, from: &str, to: &str) -> Result<PathResult> {
        algos::shortest_path(self, from, to)
    }

    /// True iff every locality is reachable from every other.
    ///
    /// Uses the default traversal (DFS). Callers holding a configured method
    /// go through [`Graph::is_connected_with`].
    pub fn is_connected(&self) -> bool {
        self.is_connected_with(ConnectivityMethod::default())
    }

    pub fn is_connected_dfs(&self) -> bool {
        self.is_connected_with(ConnectivityMethod::Dfs)
    }

    pub fn is_connected_bfs(&self) -> bool {
        self.is_connected_with(ConnectivityMethod::Bfs)
    }

    pub fn is_connected_with(&self, method: ConnectivityMethod) -> bool {
        algos::is_connected(self, method)
    }

    /// Localities whose every connection is strictly shorter than `max_distance`
    pub fn nodes_with_all_connections_below(&self, max_distance: f64) -> Vec<String> {
        algos::nodes_with_all_connections_below(self, Distance::new(max_distance))
    }

    /// Every route between two localities that repeats no locality
    pub fn all_simple_paths(&self, from: &str, to: &str) -> Result<Vec<Route>> {
        algos::all_simple_paths(self, from, to)
    }

    /// Longest simple route, using the exact memo strategy
    pub fn longest_simple_path(&self, from: &str, to: &str) -> Result<PathResult> {
        self.longest_simple_path_with(from, to, LongestPathStrategy::default())
    }

    pub fn longest_simple_path_with(
        &self,
        from: &str,
        to: &str,
        strategy: LongestPathStrategy,
    ) -> Result<PathResult> {
        algos::longest_simple_path(self, from, to, strategy)
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::{ConnectivityMethod, Graph};
    use crate::sample::sample_graph;

    #[test]
    fn test_sample_scenario() {
        let graph = sample_graph().unwrap();

        let shortest = graph.shortest_path("Alcorcón", "Fuenlabrada").unwrap();
        assert_eq!(shortest.localities, vec!["Alcorcón", "Móstoles", "Fuenlabrada"]);
        assert_eq!(shortest.distance.value(), 13.0);

        assert!(graph.is_connected());
        assert!(graph.is_connected_dfs());
        assert!(graph.is_connected_bfs());

        let short = graph.nodes_with_all_connections_below(15.0);
        assert!(short.contains(&"Móstoles".to_string()));
        assert!(!short.contains(&"Madrid".to_string()));

        let routes = graph
            .all_simple_paths("Villanueva de la Cañada", "Madrid")
            .unwrap();
        assert!(routes.iter().all(|r| r.is_simple()));
        assert!(routes.iter().any(|r| r.distance.value() == 22.0));
        assert!(routes.iter().any(|r| r.distance.value() == 33.0));

        let longest = graph.longest_simple_path("Madrid", "Getafe").unwrap();
        assert_eq!(longest.distance.value(), 36.0);
    }

    #[test]
    fn test_is_connected_uses_default_method() {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 1.0).unwrap();
        graph.add_node("C");

        assert_eq!(
            graph.is_connected(),
            graph.is_connected_with(ConnectivityMethod::default())
        );
        assert!(!graph.is_connected());
        assert!(Graph::new().is_connected());
    }

    #[test]
    fn test_shortest_is_among_enumerated_routes() {
        let graph = sample_graph().unwrap();
        let shortest = graph.shortest_path("Torrejón de Ardoz", "Fuenlabrada").unwrap();
        let routes = graph
            .all_simple_paths("Torrejón de Ardoz", "Fuenlabrada")
            .unwrap();

        assert!(routes.iter().any(|r| r.localities == shortest.localities));
        assert!(routes.iter().all(|r| shortest.distance <= r.distance));
    }

    #[test]
    fn test_empty_graph_queries() {
        let graph = Graph::new();
        assert!(graph.is_connected());
        assert!(graph.nodes_with_all_connections_below(10.0).is_empty());
        assert!(graph.shortest_path("A", "B").is_err());
    }
}
