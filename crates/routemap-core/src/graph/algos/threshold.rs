use crate::graph::types::Distance;
use crate::graph::GraphProvider;

/// Localities whose every incident edge is strictly shorter than `max_distance`.
///
/// A locality with no edges satisfies the predicate vacuously.
#[tracing::instrument(skip(provider), fields(max_distance = %max_distance))]
pub fn nodes_with_all_connections_below(
    provider: &dyn GraphProvider,
    max_distance: Distance,
) -> Vec<String> {
    let selected: Vec<String> = provider
        .localities()
        .into_iter()
        .filter(|id| {
            provider
                .adjacent(id)
                .unwrap_or_default()
                .iter()
                .all(|(_, d)| d.value() < max_distance.value())
        })
        .map(str::to_string)
        .collect();

    tracing::debug!(selected = selected.len(), "threshold filter applied");
    selected
}
