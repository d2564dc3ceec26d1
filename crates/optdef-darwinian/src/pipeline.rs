//! Per-cell Monte Carlo pipeline
//!
//! ```text
//! surface ─► diff ─► samples ─► slope sweep ─► ResultRecord
//! ```
//!
//! Each (a, b, c, λ) cell owns its surfaces, samples, and random stream.
//! The stream is seeded from the run's base seed and the cell's absolute
//! grid indices, so a cell produces the same record whether it runs alone,
//! in a split slice, or on any worker of a parallel pool.

use optdef_common::{AxisRanges, Grid, ResultRecord, Result, Scenario};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, warn};

use crate::evaluation::ClassifierEvaluator;
use crate::landscape::{Landscape, SideParams};
use crate::sampling::ScenarioSampler;
use crate::surface::{differentiate, OptimalSurfaceSolver};
use crate::MonteCarloConfig;

/// Absolute grid indices of one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CellIndex {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub l: usize,
}

/// Result of one cell, tagged with where it came from
#[derive(Debug, Clone, PartialEq)]
pub struct CellOutcome {
    pub cell: CellIndex,
    pub params: SideParams,
    pub record: ResultRecord,
}

/// Cells covered by `ranges`, in a → b → c → λ nesting order
pub fn cells(ranges: &AxisRanges) -> Vec<CellIndex> {
    let mut out = Vec::with_capacity(ranges.side_cells());
    for a in ranges.a.clone() {
        for b in ranges.b.clone() {
            for c in ranges.c.clone() {
                for l in ranges.l.clone() {
                    out.push(CellIndex { a, b, c, l });
                }
            }
        }
    }
    out
}

/// splitmix64 finalizer
#[inline]
fn mix(mut z: u64) -> u64 {
    z = z.wrapping_add(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
    z ^ (z >> 31)
}

/// Deterministic seed for a cell, independent of drawing order
pub fn cell_seed(base_seed: u64, cell: &CellIndex) -> u64 {
    [cell.a, cell.b, cell.c, cell.l]
        .iter()
        .fold(mix(base_seed), |acc, &i| mix(acc ^ i as u64))
}

/// Monte Carlo stage shared by every cell of a run
pub struct MonteCarlo<'a> {
    landscape: &'a Landscape,
    slopes: Grid,
    sample_size: usize,
}

impl<'a> MonteCarlo<'a> {
    pub fn new(landscape: &'a Landscape, config: &MonteCarloConfig) -> Result<Self> {
        landscape.p.require_len("p", 2)?;
        if config.sample_size == 0 {
            return Err(optdef_common::ArgumentError::NoSamples.into());
        }
        let slopes = config.slopes.build("slope")?;

        Ok(Self {
            landscape,
            slopes,
            sample_size: config.sample_size,
        })
    }

    pub fn landscape(&self) -> &Landscape {
        self.landscape
    }

    pub fn slopes(&self) -> &Grid {
        &self.slopes
    }

    /// Run one cell against an explicit random stream
    pub fn run_cell_with<R: Rng + ?Sized>(&self, cell: CellIndex, rng: &mut R) -> Result<CellOutcome> {
        let land = self.landscape;
        let params = land.side_params(cell.a, cell.b, cell.c, cell.l);

        let model = land.model(cell.a, cell.b);
        let surface = OptimalSurfaceSolver::new(&land.h, &land.p).solve(&model, params.c, params.l);
        let diff = differentiate(&surface)?;

        let samples =
            ScenarioSampler::new(&surface, &diff, &land.h, &land.p).sample(rng, self.sample_size);
        let record = ClassifierEvaluator::new(&self.slopes).evaluate(&samples)?;

        for scenario in Scenario::ALL {
            if record.score(scenario).accuracy.is_none() {
                warn!(
                    a = params.a,
                    b = params.b,
                    c = params.c,
                    l = params.l,
                    scenario = scenario.label(),
                    "No sample with a defense shift; accuracy undefined"
                );
            }
        }
        debug!(?cell, ?record, "Cell evaluated");

        Ok(CellOutcome {
            cell,
            params,
            record,
        })
    }

    /// Run one cell with its derived seed
    pub fn run_cell(&self, cell: CellIndex, base_seed: u64) -> Result<CellOutcome> {
        let mut rng = StdRng::seed_from_u64(cell_seed(base_seed, &cell));
        self.run_cell_with(cell, &mut rng)
    }
}
