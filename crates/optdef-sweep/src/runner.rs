//! Run orchestration: settings → grids → parallel cells → CSV

use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::{Duration, Instant};

use optdef_common::{AxisRanges, OptdefError, Result};
use optdef_darwinian::{
    cells, BoundaryPoint, BoundaryScan, CellOutcome, Landscape, MonteCarlo,
};
use rayon::prelude::*;
use tracing::{debug, info};

use crate::config::Settings;
use crate::output::{CsvSink, BOUNDARY_HEADER, SWEEP_HEADER};
use crate::split::{resolve_ranges, AxisSplit};

/// What a finished run produced
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunSummary {
    /// Base seed actually used (Monte Carlo runs only)
    pub seed: Option<u64>,
    /// Data rows written
    pub rows: usize,
    pub elapsed: Duration,
}

/// Logs every tenth of the work
struct Progress {
    done: AtomicUsize,
    total: usize,
    step: usize,
}

impl Progress {
    fn new(total: usize) -> Self {
        Self {
            done: AtomicUsize::new(0),
            total,
            step: (total / 10).max(1),
        }
    }

    fn tick(&self) {
        let done = self.done.fetch_add(1, Ordering::Relaxed) + 1;
        if done % self.step == 0 || done == self.total {
            info!(done, total = self.total, "Progress");
        }
    }
}

/// Dedicated rayon pool for one run
pub struct Runner {
    pool: rayon::ThreadPool,
}

impl Runner {
    /// `threads == 0` lets rayon pick one per core
    pub fn new(threads: usize) -> Result<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("optdef-worker-{}", i))
            .build()
            .map_err(|e| OptdefError::Internal(format!("thread pool: {}", e)))?;
        Ok(Self { pool })
    }

    pub fn threads(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Every cell in `ranges`, in a → b → c → λ order
    pub fn monte_carlo(
        &self,
        mc: &MonteCarlo<'_>,
        ranges: &AxisRanges,
        base_seed: u64,
    ) -> Result<Vec<CellOutcome>> {
        let cells = cells(ranges);
        let progress = Progress::new(cells.len());

        self.pool.install(|| {
            cells
                .into_par_iter()
                .map(|cell| {
                    let outcome = mc.run_cell(cell, base_seed);
                    progress.tick();
                    outcome
                })
                .collect()
        })
    }

    /// Interior points in a → b → h → p → c → λ order
    pub fn boundary(&self, scan: &BoundaryScan<'_>, ranges: &AxisRanges) -> Vec<BoundaryPoint> {
        let pairs = BoundaryScan::pairs(ranges);
        let progress = Progress::new(pairs.len());

        self.pool.install(|| {
            pairs
                .into_par_iter()
                .flat_map_iter(|(ai, bi)| {
                    let points = scan.scan_pair(ai, bi, ranges);
                    progress.tick();
                    points
                })
                .collect()
        })
    }
}

/// Monte Carlo sweep to `output`
pub fn run_sweep(settings: &Settings, split: Option<&AxisSplit>, output: &Path) -> Result<RunSummary> {
    let start = Instant::now();

    let landscape = Landscape::build(&settings.grids)?;
    let ranges = resolve_ranges(split, &landscape.sizes())?;
    let mc = MonteCarlo::new(&landscape, &settings.monte_carlo)?;
    let runner = Runner::new(settings.runtime.threads)?;

    let seed = settings.runtime.seed.unwrap_or_else(rand::random);
    info!(
        seed,
        cells = ranges.side_cells(),
        threads = runner.threads(),
        ?split,
        "Starting Monte Carlo sweep"
    );

    let mut sink = CsvSink::create(output)?;
    sink.write_header(SWEEP_HEADER)?;

    let outcomes = runner.monte_carlo(&mc, &ranges, seed)?;
    for outcome in &outcomes {
        sink.write_outcome(outcome)?;
    }
    sink.finish()?;

    let elapsed = start.elapsed();
    info!(
        rows = outcomes.len(),
        path = %output.display(),
        "done in {} sec",
        elapsed.as_secs()
    );

    Ok(RunSummary {
        seed: Some(seed),
        rows: outcomes.len(),
        elapsed,
    })
}

/// Boundary scan to `output`
pub fn run_boundary_scan(
    settings: &Settings,
    split: Option<&AxisSplit>,
    output: &Path,
) -> Result<RunSummary> {
    let start = Instant::now();

    let landscape = Landscape::build(&settings.boundary_grids())?;
    let ranges = resolve_ranges(split, &landscape.sizes())?;
    let scan = BoundaryScan::new(&landscape, settings.boundary.b_limit);
    let runner = Runner::new(settings.runtime.threads)?;

    info!(
        b_limit = settings.boundary.b_limit,
        threads = runner.threads(),
        ?split,
        "Starting boundary scan"
    );

    let mut sink = CsvSink::create(output)?;
    sink.write_header(BOUNDARY_HEADER)?;

    let points = runner.boundary(&scan, &ranges);
    for point in &points {
        sink.write_boundary(point)?;
    }
    sink.finish()?;
    debug!(points = points.len(), "Boundary points written");

    let elapsed = start.elapsed();
    info!(
        rows = points.len(),
        path = %output.display(),
        "done in {} sec",
        elapsed.as_secs()
    );

    Ok(RunSummary {
        seed: None,
        rows: points.len(),
        elapsed,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use optdef_common::{Axis, AxisSpec};
    use optdef_darwinian::{GridSpecs, MonteCarloConfig};

    fn small_settings() -> Settings {
        let mut settings = Settings::default();
        settings.grids = GridSpecs {
            x: AxisSpec::new(0.0, 1.0, 30),
            h: AxisSpec::new(0.0, 2.0, 4),
            p: AxisSpec::new(0.0, 1.0, 4),
            a: AxisSpec::new(1.0, 3.0, 2),
            b: AxisSpec::new(1.0, 3.0, 2),
            c: AxisSpec::new(0.0, 1.0, 2),
            l: AxisSpec::new(-1.0, 1.0, 2),
        };
        settings.monte_carlo = MonteCarloConfig {
            sample_size: 200,
            slopes: AxisSpec::new(-10.0, 10.0, 20),
        };
        settings.boundary.b = AxisSpec::new(0.0, 3.0, 4);
        settings.runtime.seed = Some(42);
        settings.runtime.threads = 2;
        settings
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let settings = small_settings();
        let land = Landscape::build(&settings.grids).unwrap();
        let mc = MonteCarlo::new(&land, &settings.monte_carlo).unwrap();
        let ranges = AxisRanges::full(&land.sizes());

        let parallel = Runner::new(3).unwrap().monte_carlo(&mc, &ranges, 42).unwrap();
        let sequential: Vec<_> = cells(&ranges)
            .into_iter()
            .map(|cell| mc.run_cell(cell, 42).unwrap())
            .collect();
        assert_eq!(parallel, sequential);
    }

    #[test]
    fn test_boundary_parallel_matches_sequential() {
        let settings = small_settings();
        let land = Landscape::build(&settings.boundary_grids()).unwrap();
        let scan = BoundaryScan::new(&land, settings.boundary.b_limit);
        let ranges = AxisRanges::full(&land.sizes());

        let parallel = Runner::new(4).unwrap().boundary(&scan, &ranges);
        assert_eq!(parallel, scan.scan(&ranges));
    }

    #[test]
    fn test_sweep_row_count() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        let summary = run_sweep(&small_settings(), None, &path).unwrap();
        assert_eq!(summary.rows, 16);
        assert_eq!(summary.seed, Some(42));

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().count(), 17);
    }

    #[test]
    fn test_invalid_split_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        let split = AxisSplit {
            axis: Axis::A,
            shift: 1,
            length: 5,
        };
        assert!(run_sweep(&small_settings(), Some(&split), &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_degenerate_grid_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        let mut settings = small_settings();
        settings.grids.h = AxisSpec::new(0.0, 2.0, 1);
        assert!(run_sweep(&settings, None, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_entropy_seed_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sweep.csv");
        let mut settings = small_settings();
        settings.runtime.seed = None;
        let first = run_sweep(&settings, None, &path).unwrap();
        let first_text = std::fs::read_to_string(&path).unwrap();

        settings.runtime.seed = first.seed;
        run_sweep(&settings, None, &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), first_text);
    }
}
