//! # Optdef Sweep
//!
//! Command-line runners for the optimal defense engine.
//!
//! - `defense-sweep`: Monte Carlo slope sweep, one CSV row per (a, b, c, λ) cell
//! - `defense-boundary`: parameter points whose optimal defense is interior
//!
//! Both accept an optional `<axis> <shift> <length>` triple restricting one
//! axis to a slice, so a full sweep can be spread across processes and the
//! CSV outputs concatenated.

pub mod cli;
pub mod config;
pub mod output;
pub mod runner;
pub mod split;

pub use cli::Args;
pub use config::Settings;
pub use output::{CsvSink, BOUNDARY_HEADER, SWEEP_HEADER, UNDEFINED};
pub use runner::{run_boundary_scan, run_sweep, RunSummary, Runner};
pub use split::{resolve_ranges, AxisSplit};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Install the fmt subscriber, filtered by `RUST_LOG` (default `info`)
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
