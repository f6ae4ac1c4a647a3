//! Matching engine: turns a cost matrix into a one-to-one assignment.

pub mod greedy;
pub mod hungarian;
pub mod options;

use serde::{Deserialize, Serialize};

use crate::error::MatchingError;
use crate::models::Assignment;

pub use greedy::find_greedy_assignment;
pub use hungarian::find_hungarian_assignment;
pub use options::{effective_threshold, MatchingAlgorithm, MatchingOptions};

/// Find an assignment between the rows and columns of `matrix`.
///
/// The result never uses a row or column twice and has at most
/// `min(rows, columns)` pairs. An empty matrix, or one whose rows are empty,
/// yields an empty assignment.
pub fn find_assignment_in_distance_matrix(
    matrix: &[Vec<f64>],
    options: &MatchingOptions,
) -> Result<Assignment, MatchingError> {
    match *options {
        MatchingOptions::Hungarian => find_hungarian_assignment(matrix),
        MatchingOptions::Greedy { threshold } => find_greedy_assignment(matrix, threshold),
    }
}

/// Row and column count of a rectangular matrix.
pub fn matrix_shape(matrix: &[Vec<f64>]) -> Result<(usize, usize), MatchingError> {
    let columns = matrix.first().map_or(0, Vec::len);
    if let Some((row, found)) = matrix
        .iter()
        .map(Vec::len)
        .enumerate()
        .find(|&(_, len)| len != columns)
    {
        return Err(MatchingError::RaggedMatrix {
            row,
            expected: columns,
            found,
        });
    }
    Ok((matrix.len(), columns))
}

/// Sum of the matrix entries selected by `assignment`.
///
/// A pair that does not address an entry of `matrix` is reported as
/// [`MatchingError::PairOutOfRange`].
pub fn assignment_cost(
    matrix: &[Vec<f64>],
    assignment: &Assignment,
) -> Result<f64, MatchingError> {
    assignment
        .iter()
        .map(|&(row, column)| {
            matrix
                .get(row)
                .and_then(|costs| costs.get(column))
                .copied()
                .ok_or(MatchingError::PairOutOfRange { row, column })
        })
        .sum()
}

/// Rows of a `rows`-row matrix that `assignment` leaves unpaired.
/// Pairs beyond `rows` are ignored.
pub fn unmatched_rows(rows: usize, assignment: &Assignment) -> Vec<usize> {
    unused(rows, assignment.iter().map(|&(row, _)| row))
}

/// Columns of a `columns`-column matrix that `assignment` leaves unpaired.
/// Pairs beyond `columns` are ignored.
pub fn unmatched_columns(columns: usize, assignment: &Assignment) -> Vec<usize> {
    unused(columns, assignment.iter().map(|&(_, column)| column))
}

fn unused(len: usize, taken: impl Iterator<Item = usize>) -> Vec<usize> {
    let mut used = vec![false; len];
    for index in taken {
        if let Some(slot) = used.get_mut(index) {
            *slot = true;
        }
    }
    (0..len).filter(|&index| !used[index]).collect()
}

/// An assignment together with the numbers operators usually want next to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssignmentReport {
    pub algorithm: MatchingAlgorithm,
    pub pairs: Assignment,
    pub total_cost: f64,
    pub unmatched_sources: Vec<usize>,
    pub unmatched_targets: Vec<usize>,
}

impl AssignmentReport {
    /// Summarize `assignment` against `matrix`. Fails if the matrix is ragged
    /// or a pair addresses an entry outside it.
    pub fn new(
        matrix: &[Vec<f64>],
        algorithm: MatchingAlgorithm,
        assignment: Assignment,
    ) -> Result<Self, MatchingError> {
        let (rows, columns) = matrix_shape(matrix)?;
        Ok(Self {
            algorithm,
            total_cost: assignment_cost(matrix, &assignment)?,
            unmatched_sources: unmatched_rows(rows, &assignment),
            unmatched_targets: unmatched_columns(columns, &assignment),
            pairs: assignment,
        })
    }
}
