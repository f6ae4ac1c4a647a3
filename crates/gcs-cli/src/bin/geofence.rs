//! CLI tool to prepare geofence polygons.
//!
//! Reads a polygon `[[x, y], ...]`, applies one operation and prints the
//! resulting polygon as JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use gcs_cli::init_tracing;
use gcs_cli::input::{parse_polygon, read_document};
use gcs_core::geometry::{self, close_polygon};

/// Geofence polygon utilities
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[command(subcommand)]
    operation: Operation,

    /// Input JSON file ("-" or omitted reads stdin)
    #[arg(long, global = true)]
    input: Option<PathBuf>,

    /// Emit a closed polygon (last vertex repeats the first)
    #[arg(long, global = true)]
    close: bool,

    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Operation {
    /// Convex hull of all vertices
    Hull,
    /// Scale about the vertex centroid
    Scale {
        #[arg(allow_hyphen_values = true)]
        factor: f64,
    },
    /// Move vertices radially outward from the bounding-box center
    Grow {
        #[arg(allow_hyphen_values = true)]
        margin: f64,
    },
    /// Offset vertices per axis away from the bounding-box center
    Buffer {
        #[arg(allow_hyphen_values = true)]
        margin: f64,
    },
    /// Drop the straightest vertices until `vertices` remain
    Simplify {
        vertices: usize,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let polygon = parse_polygon(&read_document(args.input.as_deref())?)?;
    tracing::info!(vertices = polygon.len(), operation = ?args.operation, "processing polygon");

    let result = match args.operation {
        Operation::Hull => geometry::convex_hull(&polygon)?,
        Operation::Scale { factor } => geometry::scale_polygon(&polygon, factor),
        Operation::Grow { margin } => geometry::grow_polygon(&polygon, margin),
        Operation::Buffer { margin } => geometry::buffer_polygon(&polygon, margin),
        Operation::Simplify { vertices } => {
            geometry::simplify_polygon_until_limit(&polygon, vertices)?
        }
    };

    let result = if args.close {
        close_polygon(&result)
    } else {
        result
    };
    println!("{}", serde_json::to_string(&result)?);

    Ok(())
}
