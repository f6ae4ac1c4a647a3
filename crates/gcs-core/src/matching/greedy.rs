//! Greedy nearest-pair matching.
//!
//! Picks the globally cheapest remaining entry, locks its row and column, and
//! repeats. The result is a valid one-to-one assignment but not necessarily
//! the cheapest one; it favours the most "obvious" local pairings, which
//! tends to look more natural when sending UAVs to nearby slots.

use crate::error::MatchingError;
use crate::models::Assignment;

use super::options::effective_threshold;
use super::matrix_shape;

#[derive(Debug, Clone, Copy)]
struct Candidate {
    row: usize,
    column: usize,
    cost: f64,
}

/// Greedy assignment over `matrix`.
///
/// Entries greater than the effective threshold (see
/// [`effective_threshold`](super::effective_threshold)) and `NaN` entries
/// are never paired. Equal costs are resolved in row-major order: the entry
/// enumerated first wins. Pairs are returned in the order they were
/// accepted, i.e. by ascending cost.
pub fn find_greedy_assignment(
    matrix: &[Vec<f64>],
    threshold: Option<f64>,
) -> Result<Assignment, MatchingError> {
    let (rows, columns) = matrix_shape(matrix)?;
    if rows == 0 || columns == 0 {
        return Ok(Vec::new());
    }

    let threshold = effective_threshold(threshold);

    let mut candidates: Vec<Candidate> = matrix
        .iter()
        .enumerate()
        .flat_map(|(row, costs)| {
            costs
                .iter()
                .enumerate()
                .map(move |(column, &cost)| Candidate { row, column, cost })
        })
        .filter(|candidate| candidate.cost <= threshold)
        .collect();

    // Stable sort keeps row-major order among equal costs.
    candidates.sort_by(|a, b| a.cost.total_cmp(&b.cost));

    let mut row_used = vec![false; rows];
    let mut column_used = vec![false; columns];
    let mut rows_left = rows;
    let mut columns_left = columns;
    let mut assignment = Vec::with_capacity(rows.min(columns));

    for candidate in candidates {
        if row_used[candidate.row] || column_used[candidate.column] {
            continue;
        }

        row_used[candidate.row] = true;
        column_used[candidate.column] = true;
        assignment.push((candidate.row, candidate.column));

        rows_left -= 1;
        columns_left -= 1;
        if rows_left == 0 || columns_left == 0 {
            break;
        }
    }

    Ok(assignment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_cheapest_pairs_first() {
        let matrix = vec![vec![1.0, 9.0], vec![9.0, 1.0]];
        assert_eq!(
            find_greedy_assignment(&matrix, None).unwrap(),
            vec![(0, 0), (1, 1)]
        );
    }

    #[test]
    fn returns_pairs_in_acceptance_order() {
        let matrix = vec![vec![5.0, 4.0, 9.0], vec![1.0, 8.0, 7.0]];
        assert_eq!(
            find_greedy_assignment(&matrix, None).unwrap(),
            vec![(1, 0), (0, 1)]
        );
    }

    #[test]
    fn is_not_globally_optimal() {
        // Greedy grabs the 1 and is then forced into the 10: total 11 vs 2 + 3 = 5.
        let matrix = vec![vec![1.0, 2.0], vec![3.0, 10.0]];
        assert_eq!(
            find_greedy_assignment(&matrix, None).unwrap(),
            vec![(0, 0), (1, 1)]
        );
    }

    #[test]
    fn ties_go_to_first_enumerated_entry() {
        let matrix = vec![vec![2.0, 2.0], vec![2.0, 2.0]];
        assert_eq!(
            find_greedy_assignment(&matrix, None).unwrap(),
            vec![(0, 0), (1, 1)]
        );

        let matrix = vec![vec![3.0, 1.0], vec![1.0, 3.0]];
        assert_eq!(
            find_greedy_assignment(&matrix, None).unwrap(),
            vec![(0, 1), (1, 0)]
        );
    }

    #[test]
    fn threshold_excludes_expensive_entries() {
        let matrix = vec![vec![1.0, 50.0], vec![60.0, 70.0]];
        assert_eq!(
            find_greedy_assignment(&matrix, Some(55.0)).unwrap(),
            vec![(0, 0)]
        );
        // Entries equal to the threshold remain eligible.
        assert_eq!(
            find_greedy_assignment(&matrix, Some(60.0)).unwrap(),
            vec![(0, 0)]
        );
        assert_eq!(
            find_greedy_assignment(&matrix, Some(70.0)).unwrap(),
            vec![(0, 0), (1, 1)]
        );
    }

    #[test]
    fn non_positive_threshold_means_no_limit() {
        let matrix = vec![vec![100.0]];
        for threshold in [Some(0.0), Some(-3.0), Some(f64::NAN)] {
            assert_eq!(
                find_greedy_assignment(&matrix, threshold).unwrap(),
                vec![(0, 0)]
            );
        }
    }

    #[test]
    fn skips_nan_and_keeps_infinite_entries_without_threshold() {
        let matrix = vec![vec![f64::NAN, f64::INFINITY]];
        assert_eq!(find_greedy_assignment(&matrix, None).unwrap(), vec![(0, 1)]);
        assert!(find_greedy_assignment(&matrix, Some(10.0)).unwrap().is_empty());
    }

    #[test]
    fn empty_inputs() {
        assert!(find_greedy_assignment(&[], None).unwrap().is_empty());
        assert!(find_greedy_assignment(&[vec![], vec![]], None)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn rectangular_matrix_uses_each_column_once() {
        let matrix = vec![vec![1.0], vec![0.5], vec![2.0]];
        assert_eq!(find_greedy_assignment(&matrix, None).unwrap(), vec![(1, 0)]);
    }
}
