//! Core data models for UAV assignment and geofence geometry.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::MatchingError;

/// Planar coordinate as `[x, y]` (or `[lon, lat]` for geodetic data).
pub type Coord = [f64; 2];

/// Dense row-major cost matrix. Rows are sources, columns are targets.
pub type DistanceMatrix = Vec<Vec<f64>>;

/// Ordered `(row, column)` pairs of a one-to-one assignment.
pub type Assignment = Vec<(usize, usize)>;

/// A point on the plane.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// A geodetic position in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Anything that exposes a 2D coordinate.
///
/// Geodetic types return `[lon, lat]` so that the first component is the
/// east-west axis, matching GeoJSON ordering.
pub trait Planar {
    fn xy(&self) -> Coord;
}

impl Planar for Coord {
    fn xy(&self) -> Coord {
        *self
    }
}

impl Planar for (f64, f64) {
    fn xy(&self) -> Coord {
        [self.0, self.1]
    }
}

impl Planar for Point {
    fn xy(&self) -> Coord {
        [self.x, self.y]
    }
}

impl Planar for GeoPoint {
    fn xy(&self) -> Coord {
        [self.lon, self.lat]
    }
}

impl<T: Planar + ?Sized> Planar for &T {
    fn xy(&self) -> Coord {
        (**self).xy()
    }
}

/// How pairwise distances between two point sets are measured.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DistanceMetric {
    /// Straight-line distance in the units of the coordinates.
    #[default]
    Euclidean,
    /// Great-circle distance in meters; coordinates are `[lon, lat]`.
    Haversine,
}

impl FromStr for DistanceMetric {
    type Err = MatchingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "euclidean" => Ok(Self::Euclidean),
            "haversine" | "geodesic" => Ok(Self::Haversine),
            _ => Err(MatchingError::UnsupportedMetric(s.to_string())),
        }
    }
}

/// Angle convention used when converting polar coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Mathematical convention: 0° points East, angles grow counter-clockwise.
    #[default]
    CounterClockwiseFromEast,
    /// 0° points East, angles grow clockwise (screen coordinates).
    ClockwiseFromEast,
    /// Compass convention: 0° points North, angles grow clockwise.
    ClockwiseFromNorth,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn geo_point_exposes_lon_lat() {
        let p = GeoPoint::new(47.5, 19.0);
        assert_eq!(p.xy(), [19.0, 47.5]);
        assert_eq!((&p).xy(), [19.0, 47.5]);
    }

    #[test]
    fn metric_parses_known_names() {
        assert_eq!("Euclidean".parse::<DistanceMetric>(), Ok(DistanceMetric::Euclidean));
        assert_eq!(" geodesic ".parse::<DistanceMetric>(), Ok(DistanceMetric::Haversine));
        assert!(matches!(
            "manhattan".parse::<DistanceMetric>(),
            Err(MatchingError::UnsupportedMetric(name)) if name == "manhattan"
        ));
    }

    #[test]
    fn orientation_uses_snake_case_names() {
        let json = serde_json::to_string(&Orientation::ClockwiseFromNorth).unwrap();
        assert_eq!(json, "\"clockwise_from_north\"");
    }
}
