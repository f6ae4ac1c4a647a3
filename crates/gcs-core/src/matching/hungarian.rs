//! Hungarian algorithm for minimum-cost bipartite matching.
//!
//! Shortest augmenting path formulation with row and column potentials,
//! run directly on the `f64` costs. Each source row is added in turn and
//! connected to a free target through a Dijkstra search over reduced costs,
//! so a rectangular matrix needs no padding.

use crate::error::MatchingError;
use crate::models::Assignment;

use super::matrix_shape;

/// Minimum total cost assignment of size `min(rows, columns)`.
///
/// Every entry must be finite; a `NaN` or infinite entry is reported as
/// [`MatchingError::NonFiniteCost`] rather than handed to the solver.
/// Pairs are returned ordered by row.
pub fn find_hungarian_assignment(matrix: &[Vec<f64>]) -> Result<Assignment, MatchingError> {
    let (rows, columns) = matrix_shape(matrix)?;
    if rows == 0 || columns == 0 {
        return Ok(Vec::new());
    }

    for (row, costs) in matrix.iter().enumerate() {
        if let Some(column) = costs.iter().position(|cost| !cost.is_finite()) {
            return Err(MatchingError::NonFiniteCost { row, column });
        }
    }

    // The search adds one row at a time, so it needs rows <= columns.
    // Solve on the transpose when there are more sources than targets.
    let transposed = rows > columns;
    let costs = if transposed {
        CostView::Transposed(matrix)
    } else {
        CostView::Direct(matrix)
    };

    let mut assignment: Assignment = Solver::new(costs)
        .solve()
        .into_iter()
        .map(|(i, j)| if transposed { (j, i) } else { (i, j) })
        .collect();
    assignment.sort_unstable();
    Ok(assignment)
}

#[derive(Clone, Copy)]
enum CostView<'a> {
    Direct(&'a [Vec<f64>]),
    Transposed(&'a [Vec<f64>]),
}

impl CostView<'_> {
    fn rows(&self) -> usize {
        match self {
            CostView::Direct(m) => m.len(),
            CostView::Transposed(m) => m.first().map_or(0, Vec::len),
        }
    }

    fn columns(&self) -> usize {
        match self {
            CostView::Direct(m) => m.first().map_or(0, Vec::len),
            CostView::Transposed(m) => m.len(),
        }
    }

    fn at(&self, row: usize, column: usize) -> f64 {
        match self {
            CostView::Direct(m) => m[row][column],
            CostView::Transposed(m) => m[column][row],
        }
    }
}

struct Solver<'a> {
    costs: CostView<'a>,
    /// Row potentials.
    u: Vec<f64>,
    /// Column potentials.
    v: Vec<f64>,
    row_of_column: Vec<Option<usize>>,
    column_of_row: Vec<Option<usize>>,
}

/// Result of one Dijkstra search from a free row.
struct AugmentingPath {
    sink: usize,
    min_value: f64,
    /// Row that reached each column on the shortest path tree.
    previous_row: Vec<usize>,
    distance: Vec<f64>,
    scanned_rows: Vec<bool>,
    scanned_columns: Vec<bool>,
}

impl<'a> Solver<'a> {
    fn new(costs: CostView<'a>) -> Self {
        let (rows, columns) = (costs.rows(), costs.columns());
        Self {
            costs,
            u: vec![0.0; rows],
            v: vec![0.0; columns],
            row_of_column: vec![None; columns],
            column_of_row: vec![None; rows],
        }
    }

    /// Pairs `(row, column)` in the solver's orientation.
    fn solve(mut self) -> Vec<(usize, usize)> {
        for row in 0..self.costs.rows() {
            let path = self.shortest_path(row);
            self.update_potentials(row, &path);
            self.augment(row, &path);
        }

        self.column_of_row
            .iter()
            .enumerate()
            .filter_map(|(row, column)| column.map(|column| (row, column)))
            .collect()
    }

    fn shortest_path(&self, start: usize) -> AugmentingPath {
        let (rows, columns) = (self.costs.rows(), self.costs.columns());
        let mut path = AugmentingPath {
            sink: 0,
            min_value: 0.0,
            previous_row: vec![start; columns],
            distance: vec![f64::INFINITY; columns],
            scanned_rows: vec![false; rows],
            scanned_columns: vec![false; columns],
        };
        // Unscanned columns. On equal distance a free column wins, which ends
        // the search early.
        let mut remaining: Vec<usize> = (0..columns).rev().collect();
        let mut row = start;

        loop {
            path.scanned_rows[row] = true;
            let mut lowest = f64::INFINITY;
            let mut best = 0;

            for (slot, &column) in remaining.iter().enumerate() {
                let reduced =
                    path.min_value + self.costs.at(row, column) - self.u[row] - self.v[column];
                if reduced < path.distance[column] {
                    path.previous_row[column] = row;
                    path.distance[column] = reduced;
                }
                let distance = path.distance[column];
                if distance < lowest
                    || (distance == lowest && self.row_of_column[column].is_none())
                {
                    lowest = distance;
                    best = slot;
                }
            }

            path.min_value = lowest;
            let column = remaining.swap_remove(best);
            path.scanned_columns[column] = true;

            match self.row_of_column[column] {
                Some(next) => row = next,
                None => {
                    path.sink = column;
                    return path;
                }
            }
        }
    }

    fn update_potentials(&mut self, start: usize, path: &AugmentingPath) {
        self.u[start] += path.min_value;
        for (row, _) in path.scanned_rows.iter().enumerate().filter(|(_, s)| **s) {
            if row == start {
                continue;
            }
            if let Some(column) = self.column_of_row[row] {
                self.u[row] += path.min_value - path.distance[column];
            }
        }
        for (column, _) in path.scanned_columns.iter().enumerate().filter(|(_, s)| **s) {
            self.v[column] -= path.min_value - path.distance[column];
        }
    }

    fn augment(&mut self, start: usize, path: &AugmentingPath) {
        let mut column = path.sink;
        loop {
            let row = path.previous_row[column];
            self.row_of_column[column] = Some(row);
            let displaced = self.column_of_row[row].replace(column);
            if row == start {
                break;
            }
            // Every row on the path except the start was already matched.
            match displaced {
                Some(previous) => column = previous,
                None => break,
            }
        }
    }
}
