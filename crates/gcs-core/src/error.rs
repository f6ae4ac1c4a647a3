//! Error types for matching and geometry operations.

use thiserror::Error;

/// Errors raised while building or solving an assignment.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchingError {
    #[error("unsupported matching algorithm: {0:?} (expected \"greedy\" or \"hungarian\")")]
    UnsupportedAlgorithm(String),

    #[error("unsupported distance metric: {0:?} (expected \"euclidean\" or \"haversine\")")]
    UnsupportedMetric(String),

    #[error("distance matrix row {row} has {found} columns, expected {expected}")]
    RaggedMatrix {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The optimal solver only accepts finite costs.
    #[error("distance matrix entry ({row}, {column}) is not a finite number")]
    NonFiniteCost { row: usize, column: usize },

    #[error("assigned pair ({row}, {column}) lies outside the distance matrix")]
    PairOutOfRange { row: usize, column: usize },
}

/// Errors raised by polygon and point-set routines on degenerate input.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("at least 3 distinct points are required, got {found}")]
    TooFewPoints { found: usize },

    #[error("degenerate geometry: {0}")]
    Degenerate(&'static str),

    #[error("coordinate at index {index} is not finite")]
    NonFiniteCoordinate { index: usize },

    #[error("vertex limit must be at least 3, got {limit}")]
    InvalidVertexLimit { limit: usize },
}
