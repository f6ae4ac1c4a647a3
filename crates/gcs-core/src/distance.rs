//! Pairwise distance matrices between two point sets.

use crate::models::{DistanceMatrix, DistanceMetric, Planar};
use crate::spatial::metric_distance;

/// Distance from every source to every target under `metric`.
///
/// The result has `sources.len()` rows of `targets.len()` entries each. No
/// sources means no rows; no targets means empty rows.
pub fn build_distance_matrix<S: Planar, T: Planar>(
    sources: &[S],
    targets: &[T],
    metric: DistanceMetric,
) -> DistanceMatrix {
    let target_coords: Vec<_> = targets.iter().map(Planar::xy).collect();
    sources
        .iter()
        .map(|source| {
            let from = source.xy();
            target_coords
                .iter()
                .map(|&to| metric_distance(metric, from, to))
                .collect()
        })
        .collect()
}

/// Like [`build_distance_matrix`], with a caller-supplied distance function.
///
/// The function receives the caller's own items, so it can pull coordinates
/// out of richer objects (UAV states, show slots) as well as measure them.
pub fn build_distance_matrix_with<S, T, F>(sources: &[S], targets: &[T], distance: F) -> DistanceMatrix
where
    F: Fn(&S, &T) -> f64,
{
    sources
        .iter()
        .map(|source| targets.iter().map(|target| distance(source, target)).collect())
        .collect()
}
