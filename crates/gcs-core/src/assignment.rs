//! Point-set assignment: distance matrix construction followed by matching.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::distance::{build_distance_matrix, build_distance_matrix_with};
use crate::error::MatchingError;
use crate::matching::{find_assignment_in_distance_matrix, MatchingOptions};
use crate::models::{Assignment, DistanceMetric, Planar};

/// Options for [`find_assignment_between_points`].
///
/// Defaults to Euclidean distances and unbounded greedy matching. Greedy is
/// the default because nearest-first pairings are what operators expect to
/// see when UAVs are sent to takeoff or show slots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AssignmentOptions {
    #[serde(default)]
    pub metric: DistanceMetric,
    #[serde(default)]
    pub matching: MatchingOptions,
}

/// Pair `sources` with `targets` so that each is used at most once.
///
/// Returned pairs are `(source index, target index)`. The distance matrix is
/// logged at debug level before matching.
pub fn find_assignment_between_points<S: Planar, T: Planar>(
    sources: &[S],
    targets: &[T],
    options: &AssignmentOptions,
) -> Result<Assignment, MatchingError> {
    let matrix = build_distance_matrix(sources, targets, options.metric);
    solve(&matrix, &options.matching)
}

/// Like [`find_assignment_between_points`], with a caller-supplied distance
/// function in place of a metric.
pub fn find_assignment_between_points_with<S, T, F>(
    sources: &[S],
    targets: &[T],
    distance: F,
    matching: &MatchingOptions,
) -> Result<Assignment, MatchingError>
where
    F: Fn(&S, &T) -> f64,
{
    let matrix = build_distance_matrix_with(sources, targets, distance);
    solve(&matrix, matching)
}

fn solve(matrix: &[Vec<f64>], matching: &MatchingOptions) -> Result<Assignment, MatchingError> {
    debug!(
        rows = matrix.len(),
        columns = matrix.first().map_or(0, Vec::len),
        algorithm = %matching.algorithm(),
        ?matrix,
        "computed distance matrix"
    );

    let assignment = find_assignment_in_distance_matrix(matrix, matching)?;
    debug!(pairs = assignment.len(), "assignment complete");
    Ok(assignment)
}
