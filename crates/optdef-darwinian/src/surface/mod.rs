//! Optimal defense surfaces over the (H0, p) plane
pub mod differentiate;
pub mod solver;

pub use self::differentiate::differentiate;
pub use self::solver::{argmax, OptimalSurfaceSolver};

/// Row-major `H × P` matrix; rows are H0 indices, columns p indices
#[derive(Debug, Clone, PartialEq)]
pub struct Surface {
    rows: usize,
    cols: usize,
    values: Vec<f32>,
}

impl Surface {
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            values: vec![0.0; rows * cols],
        }
    }

    /// Build from nested rows (all rows must share one length)
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        debug_assert!(rows.iter().all(|r| r.len() == cols));
        Self {
            rows: rows.len(),
            cols,
            values: rows.into_iter().flatten().collect(),
        }
    }

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline]
    pub fn get(&self, h: usize, p: usize) -> f32 {
        self.values[h * self.cols + p]
    }

    #[inline]
    pub fn set(&mut self, h: usize, p: usize, value: f32) {
        self.values[h * self.cols + p] = value;
    }

    pub fn row(&self, h: usize) -> &[f32] {
        &self.values[h * self.cols..(h + 1) * self.cols]
    }

    pub fn row_mut(&mut self, h: usize) -> &mut [f32] {
        &mut self.values[h * self.cols..(h + 1) * self.cols]
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }
}
