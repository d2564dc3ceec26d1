use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Output CSV path
    #[arg(value_name = "OUTPUT")]
    pub output: PathBuf,

    /// Axis to restrict to a slice (matched on its first character)
    #[arg(value_name = "SPLIT_AXIS", requires = "shift")]
    pub split_axis: Option<String>,

    /// First index of the slice
    #[arg(value_name = "SHIFT", requires = "length")]
    pub shift: Option<String>,

    /// Number of indices in the slice
    #[arg(value_name = "LENGTH")]
    pub length: Option<String>,

    /// Path to config file (defaults to ./optdef.toml when present)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Base seed for per-cell random streams (overrides config)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Worker threads, 0 for one per core (overrides config)
    #[arg(long)]
    pub threads: Option<usize>,
}
