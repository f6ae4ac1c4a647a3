//! Tracing setup shared by the CLI binaries.

use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a stderr `fmt` subscriber filtered by `RUST_LOG`.
///
/// Without `RUST_LOG` the CLI and core crates log at info level; `verbose`
/// raises the core crate to debug so the distance matrix is printed.
pub fn init_tracing(verbose: bool) -> Result<()> {
    let core_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(format!("gcs_cli=info,gcs_core={core_level}"))
    })?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init()?;
    Ok(())
}
