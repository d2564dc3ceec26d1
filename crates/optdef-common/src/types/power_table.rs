//! Power lookup table: x^e for every exponent and defense-level grid point

use super::grid::Grid;

/// Precomputed `x[i]^e[j]`, one row per exponent
#[derive(Debug, Clone)]
pub struct PowerTable {
    rows: Vec<Vec<f32>>,
    width: usize,
}

impl PowerTable {
    /// Build the table; powers are taken in double precision then narrowed
    pub fn build(exponents: &Grid, x: &Grid) -> Self {
        let rows = exponents
            .iter()
            .map(|&e| {
                x.iter()
                    .map(|&xi| (xi as f64).powf(e as f64) as f32)
                    .collect()
            })
            .collect();

        Self {
            rows,
            width: x.len(),
        }
    }

    /// Row for the exponent at `index`
    #[inline]
    pub fn row(&self, index: usize) -> &[f32] {
        &self.rows[index]
    }

    /// Number of exponents
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of defense-level points per row
    pub fn width(&self) -> usize {
        self.width
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rows_match_powf() {
        let x = Grid::linspace("x", 0.0, 1.0, 5).unwrap();
        let exps = Grid::from_values(vec![1.0, 2.0, 0.5]);
        let table = PowerTable::build(&exps, &x);

        assert_eq!(table.len(), 3);
        assert_eq!(table.width(), 5);
        assert_eq!(table.row(0), x.values());
        assert!((table.row(1)[2] - 0.25).abs() < 1e-6);
        assert!((table.row(2)[4] - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_exponent_is_one_everywhere() {
        let x = Grid::linspace("x", 0.0, 1.0, 4).unwrap();
        let table = PowerTable::build(&Grid::point(0.0), &x);
        // 0^0 is 1 for powf
        assert!(table.row(0).iter().all(|&v| v == 1.0));
    }
}
