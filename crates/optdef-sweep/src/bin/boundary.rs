//! defense-boundary - interior optimum scan over (a, b, H0, p, c, λ)

use clap::Parser;
use optdef_common::Axis;
use optdef_sweep::{init_tracing, run_boundary_scan, Args, AxisSplit, Settings};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let split = AxisSplit::parse(
        args.split_axis.as_deref(),
        args.shift.as_deref(),
        args.length.as_deref(),
        &Axis::ALL,
    )?;

    if args.seed.is_some() {
        tracing::warn!("--seed has no effect on the boundary scan");
    }

    let settings = Settings::load(args.config.as_deref())?.with_overrides(None, args.threads);
    tracing::info!(version = optdef_common::VERSION, settings = %settings.to_log_string(), "Loaded settings");

    run_boundary_scan(&settings, split.as_ref(), &args.output)?;
    Ok(())
}
