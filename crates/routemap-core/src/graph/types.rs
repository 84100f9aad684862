use serde::{Deserialize, Serialize};
use std::fmt;

/// Distance (edge weight) between two localities.
///
/// Valid edge weights are finite and strictly positive. The only infinite
/// value in circulation is [`Distance::UNREACHABLE`].
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Distance(f64);

impl Distance {
    pub const ZERO: Distance = Distance(0.0);

    /// Distance reported when no route exists
    pub const UNREACHABLE: Distance = Distance(f64::INFINITY);

    pub fn new(value: f64) -> Self {
        Distance(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// True for a usable edge weight: finite and > 0
    pub fn is_valid_weight(&self) -> bool {
        self.0.is_finite() && self.0 > 0.0
    }

    pub fn is_reachable(&self) -> bool {
        self.0.is_finite()
    }
}

impl Default for Distance {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Add for Distance {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Distance(self.0 + other.0)
    }
}

impl std::iter::Sum for Distance {
    fn sum<I: Iterator<Item = Distance>>(iter: I) -> Self {
        iter.fold(Distance::ZERO, |acc, d| acc + d)
    }
}

impl From<u32> for Distance {
    fn from(km: u32) -> Self {
        Distance(km as f64)
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.is_reachable() {
            write!(f, "inf")
        } else if self.0.fract() == 0.0 {
            write!(f, "{}", self.0 as i64)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

/// A simple path together with its total distance
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    pub localities: Vec<String>,
    pub distance: Distance,
}

impl Route {
    /// Number of edges along the route
    pub fn hops(&self) -> usize {
        self.localities.len().saturating_sub(1)
    }

    /// True if no locality appears twice
    pub fn is_simple(&self) -> bool {
        let mut seen = std::collections::HashSet::new();
        self.localities.iter().all(|l| seen.insert(l.as_str()))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.localities.join(" -> "))
    }
}

/// Answer to a single-pair route query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathResult {
    pub from: String,
    pub to: String,
    pub found: bool,
    pub localities: Vec<String>,
    pub distance: Distance,
    pub hops: usize,
}

impl PathResult {
    pub fn found(from: &str, to: &str, route: Route) -> Self {
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            found: true,
            hops: route.hops(),
            localities: route.localities,
            distance: route.distance,
        }
    }

    pub fn unreachable(from: &str, to: &str) -> Self {
        PathResult {
            from: from.to_string(),
            to: to.to_string(),
            found: false,
            localities: Vec::new(),
            distance: Distance::UNREACHABLE,
            hops: 0,
        }
    }

    /// The route, if one was found
    pub fn route(&self) -> Option<Route> {
        self.found.then(|| Route {
            localities: self.localities.clone(),
            distance: self.distance,
        })
    }
}

/// Traversal discipline for connectivity checks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConnectivityMethod {
    #[default]
    Dfs,
    Bfs,
}

impl ConnectivityMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConnectivityMethod::Dfs => "dfs",
            ConnectivityMethod::Bfs => "bfs",
        }
    }
}

impl std::str::FromStr for ConnectivityMethod {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "dfs" => Ok(ConnectivityMethod::Dfs),
            "bfs" => Ok(ConnectivityMethod::Bfs),
            other => Err(format!(
                "unknown connectivity method '{}' (expected: dfs, bfs)",
                other
            )),
        }
    }
}

/// Memoization strategy for the longest simple path search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LongestPathStrategy {
    /// Memo keyed by (node, visited set); always optimal
    #[default]
    Exact,
    /// Memo keyed by node only; reuses the first route found through a node
    /// even when reached via a different prefix, so the result may be shorter
    /// than the true maximum
    NodeMemo,
}

impl LongestPathStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            LongestPathStrategy::Exact => "exact",
            LongestPathStrategy::NodeMemo => "node-memo",
        }
    }
}

impl std::str::FromStr for LongestPathStrategy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "exact" => Ok(LongestPathStrategy::Exact),
            "node-memo" | "node_memo" => Ok(LongestPathStrategy::NodeMemo),
            other => Err(format!(
                "unknown longest-path strategy '{}' (expected: exact, node-memo)",
                other
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance_addition() {
        let sum = Distance::from(5) + Distance::from(8);
        assert_eq!(sum.value(), 13.0);
    }

    #[test]
    fn test_distance_sum() {
        let total: Distance = [5, 8, 10].into_iter().map(Distance::from).sum();
        assert_eq!(total, Distance::from(23));
    }

    #[test]
    fn test_distance_validity() {
        assert!(Distance::new(0.5).is_valid_weight());
        assert!(!Distance::ZERO.is_valid_weight());
        assert!(!Distance::new(-3.0).is_valid_weight());
        assert!(!Distance::new(f64::NAN).is_valid_weight());
        assert!(!Distance::UNREACHABLE.is_valid_weight());
    }

    #[test]
    fn test_distance_display() {
        assert_eq!(Distance::from(13).to_string(), "13");
        assert_eq!(Distance::new(2.5).to_string(), "2.5");
        assert_eq!(Distance::UNREACHABLE.to_string(), "inf");
    }

    #[test]
    fn test_unreachable_serializes_as_null() {
        let result = PathResult::unreachable("A", "B");
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["found"], false);
        assert!(json["distance"].is_null());
        assert!(result.route().is_none());
    }

    #[test]
    fn test_route_is_simple() {
        let route = Route {
            localities: vec!["A".into(), "B".into(), "A".into()],
            distance: Distance::from(2),
        };
        assert!(!route.is_simple());
        assert_eq!(route.hops(), 2);
        assert_eq!(route.to_string(), "A -> B -> A");
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!(
            "node-memo".parse::<LongestPathStrategy>(),
            Ok(LongestPathStrategy::NodeMemo)
        );
        assert_eq!(
            "EXACT".parse::<LongestPathStrategy>(),
            Ok(LongestPathStrategy::Exact)
        );
        assert!("greedy".parse::<LongestPathStrategy>().is_err());
    }

    #[test]
    fn test_connectivity_method_from_str() {
        assert_eq!(
            "bfs".parse::<ConnectivityMethod>(),
            Ok(ConnectivityMethod::Bfs)
        );
        assert!("both".parse::<ConnectivityMethod>().is_err());
    }
}
