use crate::graph::types::Distance;

/// Read-only view of a route map.
///
/// Every algorithm in [`crate::graph::algos`] is written against this trait,
/// so callers that only hold a provider cannot mutate the map.
pub trait GraphProvider {
    /// All localities, in a stable order
    fn localities(&self) -> Vec<&str>;

    /// `(neighbor, distance)` pairs for `id`, or `None` if `id` is unknown
    fn adjacent(&self, id: &str) -> Option<Vec<(&str, Distance)>>;

    fn contains(&self, id: &str) -> bool;

    fn locality_count(&self) -> usize {
        self.localities().len()
    }

    /// Distance of the edge between `a` and `b`, if they are adjacent
    fn weight(&self, a: &str, b: &str) -> Option<Distance> {
        self.adjacent(a)?
            .into_iter()
            .find(|(n, _)| *n == b)
            .map(|(_, d)| d)
    }
}
