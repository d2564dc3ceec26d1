//! defense-sweep - Monte Carlo slope sweep over (a, b, c, λ)

use clap::Parser;
use optdef_common::Axis;
use optdef_sweep::{init_tracing, run_sweep, Args, AxisSplit, Settings};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = Args::parse();
    let split = AxisSplit::parse(
        args.split_axis.as_deref(),
        args.shift.as_deref(),
        args.length.as_deref(),
        &Axis::SIDE,
    )?;

    let settings = Settings::load(args.config.as_deref())?.with_overrides(args.seed, args.threads);
    tracing::info!(version = optdef_common::VERSION, settings = %settings.to_log_string(), "Loaded settings");

    run_sweep(&settings, split.as_ref(), &args.output)?;
    Ok(())
}
