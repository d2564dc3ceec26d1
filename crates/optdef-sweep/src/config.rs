//! Sweep configuration
//!
//! Layers, lowest to highest priority:
//! 1. built-in defaults,
//! 2. `optdef.toml` in the working directory (or the file given by `--config`),
//! 3. `OPTDEF_<SECTION>__<KEY>` environment variables (after loading `.env`),
//! 4. `--seed` / `--threads` command-line flags.

use std::path::Path;

use optdef_common::{AxisSpec, OptdefError, Result, BOUNDARY_B_AXIS, BOUNDARY_B_LIMIT};
use optdef_darwinian::{GridSpecs, MonteCarloConfig};
use serde::{Deserialize, Serialize};

/// Config file looked up when `--config` is not given (extension optional)
pub const DEFAULT_CONFIG_NAME: &str = "optdef";

/// Environment variable prefix
pub const ENV_PREFIX: &str = "OPTDEF";

/// Full sweep settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Axis grids
    pub grids: GridSpecs,
    /// Sampling and slope sweep
    pub monte_carlo: MonteCarloConfig,
    /// Boundary scan overrides
    pub boundary: BoundarySettings,
    /// Seed and worker pool
    pub runtime: RuntimeSettings,
}

/// Boundary scan settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundarySettings {
    /// Exponent b grid used by the scan in place of `grids.b`
    pub b: AxisSpec,
    /// Cells with b above this are skipped
    pub b_limit: f32,
}

impl Default for BoundarySettings {
    fn default() -> Self {
        Self {
            b: BOUNDARY_B_AXIS,
            b_limit: BOUNDARY_B_LIMIT,
        }
    }
}

/// Runtime settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RuntimeSettings {
    /// Base seed for per-cell random streams; drawn from OS entropy if unset
    pub seed: Option<u64>,
    /// Worker threads (0 = one per core)
    pub threads: usize,
}

impl Settings {
    /// Load from the config file and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        // Try to load .env file
        let _ = dotenvy::dotenv();

        let file = match path {
            Some(p) => ::config::File::from(p).required(true),
            None => ::config::File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };

        let settings: Settings = ::config::Config::builder()
            .add_source(file)
            .add_source(
                ::config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(|e| OptdefError::Config(e.to_string()))?;

        Ok(settings)
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, seed: Option<u64>, threads: Option<usize>) -> Self {
        if seed.is_some() {
            self.runtime.seed = seed;
        }
        if let Some(t) = threads {
            self.runtime.threads = t;
        }
        self
    }

    /// Grids for the boundary scan: the shared grids with the scan's b axis
    pub fn boundary_grids(&self) -> GridSpecs {
        GridSpecs {
            b: self.boundary.b,
            ..self.grids
        }
    }

    /// Compact JSON for the startup log line
    pub fn to_log_string(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self))
    }
}
