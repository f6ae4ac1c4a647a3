//! CLI tool to pair UAV positions with target slots.
//!
//! Reads `{"sources": [...], "targets": [...]}` or `{"matrix": [[...]]}` and
//! prints the assignment report as JSON.

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use gcs_cli::input::{parse_assign_input, read_document, AssignInput};
use gcs_cli::{init_tracing, Config};
use gcs_core::matching::{find_assignment_in_distance_matrix, AssignmentReport};
use gcs_core::build_distance_matrix;

/// Assign sources to targets (greedy or Hungarian)
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Input JSON file ("-" or omitted reads stdin)
    input: Option<PathBuf>,

    /// Matching algorithm: greedy or hungarian (env: GCS_MATCHING_ALGORITHM)
    #[arg(long)]
    algorithm: Option<String>,

    /// Greedy only: never pair entries above this distance (env: GCS_GREEDY_THRESHOLD)
    #[arg(long)]
    threshold: Option<f64>,

    /// Distance metric for point input: euclidean or haversine (env: GCS_DISTANCE_METRIC)
    #[arg(long)]
    metric: Option<String>,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log the distance matrix
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let config = Config::from_env()?.with_overrides(
        args.algorithm.as_deref(),
        args.threshold,
        args.metric.as_deref(),
    )?;
    let options = config.matching_options();

    let document = read_document(args.input.as_deref())?;
    let matrix = match parse_assign_input(&document)? {
        AssignInput::Points { sources, targets } => {
            tracing::info!(
                sources = sources.len(),
                targets = targets.len(),
                metric = ?config.metric,
                "building distance matrix"
            );
            build_distance_matrix(&sources, &targets, config.metric)
        }
        AssignInput::Matrix { matrix } => matrix,
    };
    tracing::debug!(?matrix, "distance matrix");

    let assignment = find_assignment_in_distance_matrix(&matrix, &options)?;
    let report = AssignmentReport::new(&matrix, options.algorithm(), assignment)?;
    tracing::info!(
        algorithm = %report.algorithm,
        pairs = report.pairs.len(),
        total_cost = report.total_cost,
        "assignment complete"
    );

    let output = if args.pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{output}");

    Ok(())
}
