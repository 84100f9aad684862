//! Path reconstruction utilities for graph traversal

use std::collections::HashMap;

/// Walk predecessors back from `to` and return the route `from ..= to`.
///
/// Stops early if the chain breaks, so a partial map yields a partial route
/// ending at `to`.
pub fn reconstruct_path(from: &str, to: &str, predecessors: &HashMap<&str, &str>) -> Vec<String> {
    let mut localities = vec![to.to_string()];
    let mut current = to;

    while current != from {
        match predecessors.get(current) {
            Some(pred) => {
                current = pred;
                localities.push(current.to_string());
            }
            None => break,
        }
    }

    localities.reverse();
    localities
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_chain() {
        let predecessors = HashMap::from([("B", "A"), ("C", "B")]);
        assert_eq!(reconstruct_path("A", "C", &predecessors), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_reconstruct_same_endpoint() {
        let predecessors = HashMap::new();
        assert_eq!(reconstruct_path("A", "A", &predecessors), vec!["A"]);
    }

    #[test]
    fn test_reconstruct_broken_chain() {
        let predecessors = HashMap::from([("C", "B")]);
        assert_eq!(reconstruct_path("A", "C", &predecessors), vec!["B", "C"]);
    }
}
