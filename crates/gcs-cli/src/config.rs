//! CLI configuration from environment.

use std::env;

use anyhow::{Context, Result};
use gcs_core::{DistanceMetric, MatchingAlgorithm, MatchingOptions};

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub algorithm: MatchingAlgorithm,
    pub greedy_threshold: Option<f64>,
    pub metric: DistanceMetric,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            algorithm: MatchingAlgorithm::Greedy,
            greedy_threshold: None,
            metric: DistanceMetric::Euclidean,
        }
    }
}

impl Config {
    /// Read `GCS_MATCHING_ALGORITHM`, `GCS_GREEDY_THRESHOLD` and
    /// `GCS_DISTANCE_METRIC`. Unset variables keep their defaults; values that
    /// are set but invalid are errors.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let mut config = Self::default();

        if let Some(name) = lookup("GCS_MATCHING_ALGORITHM") {
            config.algorithm = name
                .parse()
                .context("invalid GCS_MATCHING_ALGORITHM")?;
        }
        if let Some(raw) = lookup("GCS_GREEDY_THRESHOLD") {
            let threshold: f64 = raw
                .trim()
                .parse()
                .with_context(|| format!("invalid GCS_GREEDY_THRESHOLD: {raw:?}"))?;
            config.greedy_threshold = Some(threshold);
        }
        if let Some(name) = lookup("GCS_DISTANCE_METRIC") {
            config.metric = name.parse().context("invalid GCS_DISTANCE_METRIC")?;
        }

        Ok(config)
    }

    /// Apply command-line overrides on top of the environment values.
    pub fn with_overrides(
        mut self,
        algorithm: Option<&str>,
        threshold: Option<f64>,
        metric: Option<&str>,
    ) -> Result<Self> {
        if let Some(name) = algorithm {
            self.algorithm = name.parse()?;
        }
        if threshold.is_some() {
            self.greedy_threshold = threshold;
        }
        if let Some(name) = metric {
            self.metric = name.parse()?;
        }
        Ok(self)
    }

    pub fn matching_options(&self) -> MatchingOptions {
        match self.algorithm {
            MatchingAlgorithm::Greedy => MatchingOptions::Greedy {
                threshold: self.greedy_threshold,
            },
            MatchingAlgorithm::Hungarian => MatchingOptions::Hungarian,
        }
    }
}
