//! Demo: assign a synthetic fleet to a takeoff grid with both strategies.
//!
//! Prints the total and worst flight distance of each strategy so the
//! trade-off between greedy and optimal assignment can be eyeballed.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use gcs_cli::init_tracing;
use gcs_cli::sim::{create_ring_layout, create_scattered_layout, ShowLayout};
use gcs_core::{
    find_assignment_between_points, haversine_distance, AssignmentOptions, DistanceMetric,
    GeoPoint, MatchingOptions,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Available layouts
#[derive(Debug, Clone, ValueEnum)]
enum LayoutType {
    /// UAVs scattered randomly around the grid
    Scattered,
    /// UAVs parked on a ring around the grid
    Ring,
}

/// Compare greedy and Hungarian assignment on a synthetic show layout
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    #[arg(long, value_enum, default_value = "scattered")]
    layout: LayoutType,

    /// Center latitude
    #[arg(long, default_value_t = 47.4979)]
    lat: f64,

    /// Center longitude
    #[arg(long, default_value_t = 19.0402)]
    lon: f64,

    /// Grid rows
    #[arg(long, default_value_t = 5)]
    rows: usize,

    /// Grid columns
    #[arg(long, default_value_t = 8)]
    columns: usize,

    /// Slot spacing in meters
    #[arg(long, default_value_t = 3.0)]
    spacing: f64,

    /// Scatter or ring radius in meters
    #[arg(long, default_value_t = 60.0)]
    radius: f64,

    /// Greedy threshold in meters
    #[arg(long)]
    threshold: Option<f64>,

    /// Random seed for the scattered layout
    #[arg(long, default_value_t = 1)]
    seed: u64,

    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let center = GeoPoint::new(args.lat, args.lon);
    let layout = match args.layout {
        LayoutType::Scattered => {
            let mut rng = StdRng::seed_from_u64(args.seed);
            create_scattered_layout(
                center,
                args.rows,
                args.columns,
                args.spacing,
                args.radius,
                &mut rng,
            )
        }
        LayoutType::Ring => {
            create_ring_layout(center, args.rows, args.columns, args.spacing, args.radius)
        }
    };

    println!("\nLayout: {}", layout.name);
    println!("  UAVs: {}, slots: {}", layout.uavs.len(), layout.slots.len());
    println!();

    for matching in [
        MatchingOptions::Greedy {
            threshold: args.threshold,
        },
        MatchingOptions::Hungarian,
    ] {
        report(&layout, matching)?;
    }

    Ok(())
}

fn report(layout: &ShowLayout, matching: MatchingOptions) -> Result<()> {
    let positions: Vec<GeoPoint> = layout.uavs.iter().map(|(_, p)| *p).collect();
    let options = AssignmentOptions {
        metric: DistanceMetric::Haversine,
        matching,
    };
    let assignment = find_assignment_between_points(&positions, &layout.slots, &options)?;

    let distances: Vec<f64> = assignment
        .iter()
        .map(|&(uav, slot)| haversine_distance(positions[uav], layout.slots[slot]))
        .collect();
    let total: f64 = distances.iter().sum();
    let worst = distances.iter().copied().fold(0.0, f64::max);

    println!(
        "{:>10}: {} pairs, total {:.1} m, worst {:.1} m",
        matching.algorithm().as_str(),
        assignment.len(),
        total,
        worst
    );
    Ok(())
}
