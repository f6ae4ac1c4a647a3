//! JSON input documents accepted by the CLI tools.

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::{Context, Result};
use gcs_core::{Coord, DistanceMatrix, GeoPoint, Planar, Point};
use serde::Deserialize;

/// A point as written by operators: `[x, y]`, `{"lat", "lon"}` or `{"x", "y"}`.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum InputPoint {
    Pair(Coord),
    Geo(GeoPoint),
    Plane(Point),
}

impl Planar for InputPoint {
    fn xy(&self) -> Coord {
        match self {
            Self::Pair(coord) => *coord,
            Self::Geo(point) => point.xy(),
            Self::Plane(point) => point.xy(),
        }
    }
}

/// Input of the `assign` tool: two point sets or a precomputed cost matrix.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum AssignInput {
    Points {
        sources: Vec<InputPoint>,
        targets: Vec<InputPoint>,
    },
    Matrix {
        matrix: DistanceMatrix,
    },
}

/// Read a whole document from `path`, or from stdin when `path` is `None` or `-`.
pub fn read_document(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) if path != Path::new("-") => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display())),
        _ => {
            let mut buffer = String::new();
            io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            Ok(buffer)
        }
    }
}

pub fn parse_assign_input(document: &str) -> Result<AssignInput> {
    serde_json::from_str(document).context(
        "expected {\"sources\": [...], \"targets\": [...]} or {\"matrix\": [[...]]}",
    )
}

/// Parse a polygon written as `[[x, y], ...]`.
pub fn parse_polygon(document: &str) -> Result<Vec<Coord>> {
    serde_json::from_str(document).context("expected a polygon as [[x, y], ...]")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_mixed_point_notations() {
        let input = parse_assign_input(
            r#"{
                "sources": [[0, 0], {"lat": 47.5, "lon": 19.0}],
                "targets": [{"x": 1.5, "y": 2.5}]
            }"#,
        )
        .unwrap();

        let AssignInput::Points { sources, targets } = input else {
            panic!("expected point sets");
        };
        assert_eq!(sources[0], InputPoint::Pair([0.0, 0.0]));
        assert_eq!(sources[1].xy(), [19.0, 47.5]);
        assert_eq!(targets[0].xy(), [1.5, 2.5]);
    }

    #[test]
    fn parses_matrix_document() {
        let input = parse_assign_input(r#"{"matrix": [[1, 9], [9, 1]]}"#).unwrap();
        assert_eq!(
            input,
            AssignInput::Matrix {
                matrix: vec![vec![1.0, 9.0], vec![9.0, 1.0]]
            }
        );
    }

    #[test]
    fn rejects_unknown_documents() {
        assert!(parse_assign_input(r#"{"uavs": []}"#).is_err());
        assert!(parse_polygon(r#"[[0, 0], [1]]"#).is_err());
        assert_eq!(
            parse_polygon("[[0, 0], [1, 0], [0, 1]]").unwrap(),
            vec![[0.0, 0.0], [1.0, 0.0], [0.0, 1.0]]
        );
    }
}
