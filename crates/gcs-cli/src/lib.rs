//! GCS CLI - Command line tools for UAV slot assignment.
//!
//! This crate provides the CLI binaries:
//! - assign: pair UAV positions with target slots
//! - geofence: hull, simplify and buffer geofence polygons
//! - show_layout: demo layouts comparing greedy and Hungarian assignment

pub mod config;
pub mod input;
pub mod logging;
pub mod sim;

pub use config::Config;
pub use logging::init_tracing;
