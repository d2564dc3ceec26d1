//! Grid - uniformly spaced parameter axes
//!
//! Every axis of the sweep (defense level, H0, p, the side parameters and
//! the slope candidates) is a `Grid`. Values are built by accumulating the
//! spacing in single precision, so `v[i] = v[i-1] + dx` exactly as the sweep
//! has always produced them.

use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Declarative description of an axis, as it appears in settings
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisSpec {
    /// First grid value
    pub start: f32,
    /// Last grid value
    pub end: f32,
    /// Number of grid points
    pub size: usize,
}

impl AxisSpec {
    pub const fn new(start: f32, end: f32, size: usize) -> Self {
        Self { start, end, size }
    }

    /// Build the grid this spec describes
    pub fn build(&self, axis: &str) -> Result<Grid, GridError> {
        Grid::from_spec(axis, self)
    }
}

/// Immutable ordered sequence of axis values
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    values: Vec<f32>,
}

impl Grid {
    /// Uniformly spaced values spanning `[start, end]` (`size >= 2`)
    pub fn linspace(axis: &str, start: f32, end: f32, size: usize) -> Result<Self, GridError> {
        if !start.is_finite() || !end.is_finite() {
            return Err(GridError::NonFinite {
                axis: axis.to_string(),
                start,
                end,
            });
        }
        if size < 2 {
            return Err(GridError::Degenerate {
                axis: axis.to_string(),
                size,
            });
        }

        let interval = (end - start) / (size - 1) as f32;
        let mut values = Vec::with_capacity(size);
        let mut current = start;
        values.push(current);
        for _ in 1..size {
            current += interval;
            values.push(current);
        }

        Ok(Self { values })
    }

    /// A single pinned value
    pub fn point(value: f32) -> Self {
        Self {
            values: vec![value],
        }
    }

    /// Build from a spec; `size == 1` is accepted only as a fixed point
    pub fn from_spec(axis: &str, spec: &AxisSpec) -> Result<Self, GridError> {
        if spec.size == 1 {
            if !spec.start.is_finite() {
                return Err(GridError::NonFinite {
                    axis: axis.to_string(),
                    start: spec.start,
                    end: spec.end,
                });
            }
            if spec.start != spec.end {
                return Err(GridError::SpreadFixedPoint {
                    axis: axis.to_string(),
                    start: spec.start,
                    end: spec.end,
                });
            }
            return Ok(Self::point(spec.start));
        }
        Self::linspace(axis, spec.start, spec.end, spec.size)
    }

    /// Wrap explicit values (test fixtures, externally computed axes)
    pub fn from_values(values: Vec<f32>) -> Self {
        Self { values }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn iter(&self) -> std::slice::Iter<'_, f32> {
        self.values.iter()
    }

    /// Fail unless the grid has at least `minimum` points
    pub fn require_len(&self, axis: &str, minimum: usize) -> Result<(), GridError> {
        if self.len() < minimum {
            return Err(GridError::TooSmall {
                axis: axis.to_string(),
                size: self.len(),
                minimum,
            });
        }
        Ok(())
    }
}

impl Index<usize> for Grid {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        &self.values[index]
    }
}

impl<'a> IntoIterator for &'a Grid {
    type Item = &'a f32;
    type IntoIter = std::slice::Iter<'a, f32>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
