//! Run-wide grids and power tables shared read-only by every cell

use optdef_common::{
    AxisSizes, AxisSpec, Grid, PowerTable, Result, A_AXIS, B_AXIS, C_AXIS, H_AXIS, L_AXIS,
    P_AXIS, X_AXIS,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::fitness::FitnessModel;

/// Axis specs for every grid of a run
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GridSpecs {
    /// Defense level γ
    pub x: AxisSpec,
    /// Host investment H0
    pub h: AxisSpec,
    /// Probability p
    pub p: AxisSpec,
    /// Exponent a
    pub a: AxisSpec,
    /// Exponent b
    pub b: AxisSpec,
    /// Cost c
    pub c: AxisSpec,
    /// Interaction λ
    pub l: AxisSpec,
}

impl Default for GridSpecs {
    fn default() -> Self {
        Self {
            x: X_AXIS,
            h: H_AXIS,
            p: P_AXIS,
            a: A_AXIS,
            b: B_AXIS,
            c: C_AXIS,
            l: L_AXIS,
        }
    }
}

/// Side parameters of one cell
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SideParams {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub l: f32,
}

/// Built grids plus `x^a` and `x^b` lookup tables
#[derive(Debug, Clone)]
pub struct Landscape {
    pub x: Grid,
    pub h: Grid,
    pub p: Grid,
    pub a: Grid,
    pub b: Grid,
    pub c: Grid,
    pub l: Grid,
    xa: PowerTable,
    xb: PowerTable,
}

impl Landscape {
    /// Build every grid and both power tables
    pub fn build(specs: &GridSpecs) -> Result<Self> {
        let x = specs.x.build("x")?;
        let h = specs.h.build("h")?;
        let p = specs.p.build("p")?;
        let a = specs.a.build("a")?;
        let b = specs.b.build("b")?;
        let c = specs.c.build("c")?;
        let l = specs.l.build("l")?;

        let xa = PowerTable::build(&a, &x);
        let xb = PowerTable::build(&b, &x);

        debug!(
            x = x.len(),
            h = h.len(),
            p = p.len(),
            a = a.len(),
            b = b.len(),
            c = c.len(),
            l = l.len(),
            "Built landscape grids and power tables"
        );

        Ok(Self {
            x,
            h,
            p,
            a,
            b,
            c,
            l,
            xa,
            xb,
        })
    }

    pub fn sizes(&self) -> AxisSizes {
        AxisSizes {
            h: self.h.len(),
            p: self.p.len(),
            a: self.a.len(),
            b: self.b.len(),
            c: self.c.len(),
            l: self.l.len(),
        }
    }

    /// Fitness model for the exponent pair (a[ai], b[bi])
    pub fn model(&self, ai: usize, bi: usize) -> FitnessModel<'_> {
        FitnessModel::new(self.x.values(), self.xa.row(ai), self.xb.row(bi))
    }

    pub fn side_params(&self, ai: usize, bi: usize, ci: usize, li: usize) -> SideParams {
        SideParams {
            a: self.a[ai],
            b: self.b[bi],
            c: self.c[ci],
            l: self.l[li],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_sizes() {
        let landscape = Landscape::build(&GridSpecs::default()).unwrap();
        let sizes = landscape.sizes();
        assert_eq!((sizes.h, sizes.p), (20, 10));
        assert_eq!((sizes.a, sizes.b, sizes.c, sizes.l), (20, 20, 10, 20));
        assert_eq!(landscape.x.len(), 1000);
    }

    #[test]
    fn test_power_rows_follow_exponents() {
        let specs = GridSpecs {
            x: AxisSpec::new(0.0, 1.0, 5),
            a: AxisSpec::new(1.0, 2.0, 2),
            b: AxisSpec::new(3.0, 3.0, 1),
            ..GridSpecs::default()
        };
        let landscape = Landscape::build(&specs).unwrap();
        let model = landscape.model(1, 0);
        assert_eq!(model.len(), 5);
        assert_eq!(landscape.side_params(1, 0, 0, 0).a, 2.0);
        assert_eq!(landscape.side_params(1, 0, 0, 0).b, 3.0);
    }

    #[test]
    fn test_degenerate_axis_fails() {
        let specs = GridSpecs {
            h: AxisSpec::new(0.0, 2.0, 1),
            ..GridSpecs::default()
        };
        assert!(Landscape::build(&specs).is_err());
    }
}
