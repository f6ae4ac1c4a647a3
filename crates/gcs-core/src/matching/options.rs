use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MatchingError;

/// Names of the available matching strategies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchingAlgorithm {
    Greedy,
    Hungarian,
}

impl MatchingAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Greedy => "greedy",
            Self::Hungarian => "hungarian",
        }
    }
}

impl fmt::Display for MatchingAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MatchingAlgorithm {
    type Err = MatchingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "greedy" => Ok(Self::Greedy),
            "hungarian" => Ok(Self::Hungarian),
            _ => Err(MatchingError::UnsupportedAlgorithm(s.to_string())),
        }
    }
}

/// Strategy and parameters used to turn a cost matrix into an assignment.
///
/// Serialized with an `"algorithm"` tag, e.g. `{"algorithm": "hungarian"}` or
/// `{"algorithm": "greedy", "threshold": 25.0}`. Unknown tags are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "algorithm", rename_all = "lowercase")]
pub enum MatchingOptions {
    /// Minimum total cost over all one-to-one assignments.
    Hungarian,
    /// Repeatedly take the cheapest remaining pair.
    Greedy {
        /// Entries strictly greater than this are never paired.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        threshold: Option<f64>,
    },
}

impl Default for MatchingOptions {
    fn default() -> Self {
        Self::Greedy { threshold: None }
    }
}

impl MatchingOptions {
    /// Build options from an algorithm name as typed by an operator.
    ///
    /// `threshold` only applies to the greedy strategy and is ignored for
    /// the Hungarian one.
    pub fn from_name(name: &str, threshold: Option<f64>) -> Result<Self, MatchingError> {
        Ok(match name.parse::<MatchingAlgorithm>()? {
            MatchingAlgorithm::Greedy => Self::Greedy { threshold },
            MatchingAlgorithm::Hungarian => Self::Hungarian,
        })
    }

    pub fn algorithm(&self) -> MatchingAlgorithm {
        match self {
            Self::Greedy { .. } => MatchingAlgorithm::Greedy,
            Self::Hungarian => MatchingAlgorithm::Hungarian,
        }
    }
}

/// Threshold actually applied by the greedy strategy.
///
/// Anything that is not a positive finite number means "no limit".
pub fn effective_threshold(threshold: Option<f64>) -> f64 {
    match threshold {
        Some(t) if t.is_finite() && t > 0.0 => t,
        _ => f64::INFINITY,
    }
}
