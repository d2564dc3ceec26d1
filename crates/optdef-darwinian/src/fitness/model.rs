//! Fitness: W(γ) = -γ^b - H0 × (pg + ps + λ × pg × ps)
//!
//! With `pg = p(1 - γ)` and `ps = (1 - p)(1 - γ^a + c(γ - γ^a))`.

/// Parameter tuple varied across the (H0, p) plane for fixed a, b
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitnessParams {
    /// Host investment H0
    pub h0: f32,
    /// Probability p
    pub p: f32,
    /// Cost c
    pub c: f32,
    /// Interaction λ
    pub l: f32,
}

/// Fitness over the defense-level grid for one (a, b) pair
///
/// `xa` and `xb` are the power-table rows `x^a` and `x^b`. NaN or infinite
/// inputs propagate into the output unchanged.
#[derive(Debug, Clone, Copy)]
pub struct FitnessModel<'a> {
    x: &'a [f32],
    xa: &'a [f32],
    xb: &'a [f32],
}

impl<'a> FitnessModel<'a> {
    pub fn new(x: &'a [f32], xa: &'a [f32], xb: &'a [f32]) -> Self {
        debug_assert_eq!(x.len(), xa.len());
        debug_assert_eq!(x.len(), xb.len());
        Self { x, xa, xb }
    }

    /// Number of defense-level points
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Defense-level grid the model evaluates over
    pub fn defense_levels(&self) -> &'a [f32] {
        self.x
    }

    /// Write the fitness of every defense level into `out`
    pub fn evaluate(&self, params: &FitnessParams, out: &mut [f32]) {
        let FitnessParams { h0, p, c, l } = *params;

        for (((w, &x), &xa), &xb) in out
            .iter_mut()
            .zip(self.x)
            .zip(self.xa)
            .zip(self.xb)
        {
            let pg = p * (1.0 - x);
            let ps = (1.0 - p) * (1.0 - xa + c * (x - xa));
            *w = -xb - h0 * (pg + ps + l * pg * ps);
        }
    }
}
