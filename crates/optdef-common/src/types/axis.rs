//! Parameter axes and the index ranges a run iterates over
//!
//! A distributed run restricts exactly one axis to a contiguous
//! `[shift, shift + length)` slice; all other axes stay full.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::error::ArgumentError;

/// Named parameter axis of the sweep
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Host investment H0
    H,
    /// Probability p
    P,
    /// Exponent a
    A,
    /// Exponent b
    B,
    /// Cost c
    C,
    /// Interaction λ
    L,
}

impl Axis {
    /// Axes a Monte Carlo sweep may be split along
    pub const SIDE: [Axis; 4] = [Axis::A, Axis::B, Axis::C, Axis::L];

    /// Axes a boundary scan may be split along
    pub const ALL: [Axis; 6] = [Axis::H, Axis::P, Axis::A, Axis::B, Axis::C, Axis::L];

    pub fn symbol(self) -> char {
        match self {
            Axis::H => 'h',
            Axis::P => 'p',
            Axis::A => 'a',
            Axis::B => 'b',
            Axis::C => 'c',
            Axis::L => 'l',
        }
    }

    /// Resolve a token by its first character, restricted to `allowed`
    pub fn from_token(token: &str, allowed: &[Axis]) -> Result<Axis, ArgumentError> {
        let first = token.chars().next();
        allowed
            .iter()
            .copied()
            .find(|axis| Some(axis.symbol()) == first)
            .ok_or_else(|| ArgumentError::UnknownAxis {
                token: token.to_string(),
                allowed: allowed
                    .iter()
                    .map(|a| a.symbol().to_string())
                    .collect::<Vec<_>>()
                    .join(", "),
            })
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Per-axis index ranges of one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AxisRanges {
    pub h: Range<usize>,
    pub p: Range<usize>,
    pub a: Range<usize>,
    pub b: Range<usize>,
    pub c: Range<usize>,
    pub l: Range<usize>,
}

impl AxisRanges {
    /// Full ranges for the given axis sizes
    pub fn full(sizes: &AxisSizes) -> Self {
        Self {
            h: 0..sizes.h,
            p: 0..sizes.p,
            a: 0..sizes.a,
            b: 0..sizes.b,
            c: 0..sizes.c,
            l: 0..sizes.l,
        }
    }

    pub fn get(&self, axis: Axis) -> &Range<usize> {
        match axis {
            Axis::H => &self.h,
            Axis::P => &self.p,
            Axis::A => &self.a,
            Axis::B => &self.b,
            Axis::C => &self.c,
            Axis::L => &self.l,
        }
    }

    fn get_mut(&mut self, axis: Axis) -> &mut Range<usize> {
        match axis {
            Axis::H => &mut self.h,
            Axis::P => &mut self.p,
            Axis::A => &mut self.a,
            Axis::B => &mut self.b,
            Axis::C => &mut self.c,
            Axis::L => &mut self.l,
        }
    }

    /// Restrict one axis to `[shift, shift + length)`, validated against `size`
    pub fn restrict(
        mut self,
        axis: Axis,
        shift: usize,
        length: usize,
        size: usize,
    ) -> Result<Self, ArgumentError> {
        if length == 0 {
            return Err(ArgumentError::EmptySlice {
                axis: axis.symbol(),
            });
        }
        let end = shift
            .checked_add(length)
            .filter(|&end| end <= size)
            .ok_or(ArgumentError::OutOfRange {
                axis: axis.symbol(),
                shift,
                end: shift.saturating_add(length),
                size,
            })?;
        *self.get_mut(axis) = shift..end;
        Ok(self)
    }

    /// Number of (a, b, c, l) cells covered
    pub fn side_cells(&self) -> usize {
        self.a.len() * self.b.len() * self.c.len() * self.l.len()
    }
}

/// Number of points on every axis of a run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisSizes {
    pub h: usize,
    pub p: usize,
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub l: usize,
}

impl AxisSizes {
    pub fn get(&self, axis: Axis) -> usize {
        match axis {
            Axis::H => self.h,
            Axis::P => self.p,
            Axis::A => self.a,
            Axis::B => self.b,
            Axis::C => self.c,
            Axis::L => self.l,
        }
    }
}
