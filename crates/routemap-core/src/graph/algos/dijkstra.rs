use crate::error::{Result, RouteError};
use crate::graph::path::reconstruct_path;
use crate::graph::types::{Distance, PathResult, Route};
use crate::graph::GraphProvider;
use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

/// Wrapper for BinaryHeap to use as min-heap (ordered by accumulated distance)
#[derive(Debug, Clone)]
pub struct HeapEntry<'a> {
    pub locality: &'a str,
    pub accumulated: Distance,
}

impl PartialEq for HeapEntry<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapEntry<'_> {}

impl PartialOrd for HeapEntry<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry<'_> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.accumulated
            .value()
            .total_cmp(&other.accumulated.value())
            .then_with(|| self.locality.cmp(other.locality))
    }
}

/// Run Dijkstra from `from` until `to` is settled.
///
/// Returns the settled distances and the predecessor of every reached
/// locality.
fn dijkstra_search<'a>(
    provider: &'a dyn GraphProvider,
    from: &'a str,
    to: &str,
) -> (HashMap<&'a str, Distance>, HashMap<&'a str, &'a str>) {
    let mut best: HashMap<&'a str, Distance> = HashMap::new();
    let mut predecessors: HashMap<&'a str, &'a str> = HashMap::new();
    let mut heap: BinaryHeap<Reverse<HeapEntry<'a>>> = BinaryHeap::new();

    best.insert(from, Distance::ZERO);
    heap.push(Reverse(HeapEntry {
        locality: from,
        accumulated: Distance::ZERO,
    }));

    while let Some(Reverse(HeapEntry {
        locality: current,
        accumulated,
    })) = heap.pop()
    {
        if current == to {
            break;
        }

        // Stale heap entry; a shorter distance was already settled
        if best
            .get(current)
            .is_some_and(|known| accumulated.value() > known.value())
        {
            continue;
        }

        for (neighbor, weight) in provider.adjacent(current).unwrap_or_default() {
            let candidate = accumulated + weight;
            let improves = best
                .get(neighbor)
                .is_none_or(|known| candidate.value() < known.value());

            if improves {
                best.insert(neighbor, candidate);
                predecessors.insert(neighbor, current);
                heap.push(Reverse(HeapEntry {
                    locality: neighbor,
                    accumulated: candidate,
                }));
            }
        }
    }

    (best, predecessors)
}

/// Find the minimum-distance route between two localities
#[tracing::instrument(skip(provider), fields(from = %from, to = %to))]
pub fn shortest_path(provider: &dyn GraphProvider, from: &str, to: &str) -> Result<PathResult> {
    for id in [from, to] {
        if !provider.contains(id) {
            return Err(RouteError::unknown_node(id));
        }
    }

    let (best, predecessors) = dijkstra_search(provider, from, to);

    let Some(&distance) = best.get(to) else {
        tracing::debug!("no route");
        return Ok(PathResult::unreachable(from, to));
    };

    let localities = reconstruct_path(from, to, &predecessors);
    tracing::debug!(distance = %distance, hops = localities.len().saturating_sub(1), "route found");

    Ok(PathResult::found(
        from,
        to,
        Route {
            localities,
            distance,
        },
    ))
}

#[cfg(test)]
mod tests;
