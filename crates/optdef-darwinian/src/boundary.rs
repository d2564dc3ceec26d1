//! Boundary scan: parameter points whose optimal defense is interior
//!
//! For every (a, b, H0, p, c, λ) with `b` at or below the limit, the fitness
//! argmax is taken over the defense grid; the point is kept when the optimum
//! is neither the first nor the last defense level.

use optdef_common::AxisRanges;

use crate::fitness::FitnessParams;
use crate::landscape::Landscape;
use crate::surface::argmax;

/// A parameter point with an interior optimum
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundaryPoint {
    pub h: f32,
    pub p: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub l: f32,
}

/// Whether `index` lies strictly inside a grid of `len` points
#[inline]
pub fn is_interior(index: usize, len: usize) -> bool {
    index > 0 && index + 1 < len
}

pub struct BoundaryScan<'a> {
    landscape: &'a Landscape,
    b_limit: f32,
}

impl<'a> BoundaryScan<'a> {
    pub fn new(landscape: &'a Landscape, b_limit: f32) -> Self {
        Self { landscape, b_limit }
    }

    /// (a, b) index pairs covered by `ranges`, in a → b order
    pub fn pairs(ranges: &AxisRanges) -> Vec<(usize, usize)> {
        ranges
            .a
            .clone()
            .flat_map(|a| ranges.b.clone().map(move |b| (a, b)))
            .collect()
    }

    /// Interior points for one (a, b) pair, in H0 → p → c → λ order
    pub fn scan_pair(&self, ai: usize, bi: usize, ranges: &AxisRanges) -> Vec<BoundaryPoint> {
        let land = self.landscape;
        let b = land.b[bi];
        if b > self.b_limit {
            return Vec::new();
        }

        let a = land.a[ai];
        let model = land.model(ai, bi);
        let mut fitness = vec![0.0f32; model.len()];
        let mut points = Vec::new();

        for hi in ranges.h.clone() {
            for pi in ranges.p.clone() {
                for ci in ranges.c.clone() {
                    for li in ranges.l.clone() {
                        let params = FitnessParams {
                            h0: land.h[hi],
                            p: land.p[pi],
                            c: land.c[ci],
                            l: land.l[li],
                        };
                        model.evaluate(&params, &mut fitness);
                        if is_interior(argmax(&fitness), fitness.len()) {
                            points.push(BoundaryPoint {
                                h: params.h0,
                                p: params.p,
                                a,
                                b,
                                c: params.c,
                                l: params.l,
                            });
                        }
                    }
                }
            }
        }

        points
    }

    /// Sequential scan over every pair in `ranges`
    pub fn scan(&self, ranges: &AxisRanges) -> Vec<BoundaryPoint> {
        Self::pairs(ranges)
            .into_iter()
            .flat_map(|(a, b)| self.scan_pair(a, b, ranges))
            .collect()
    }
}
