//! Forward difference of a surface along the p axis

use optdef_common::GridError;

use super::Surface;

/// `diff[h][p] = s[h][p] - s[h][p-1]` for `p >= 1`; column 0 copies column 1
pub fn differentiate(surface: &Surface) -> Result<Surface, GridError> {
    if surface.cols() < 2 {
        return Err(GridError::TooSmall {
            axis: "p".to_string(),
            size: surface.cols(),
            minimum: 2,
        });
    }

    let mut diff = Surface::zeros(surface.rows(), surface.cols());
    for h in 0..surface.rows() {
        let src = surface.row(h);
        let dst = diff.row_mut(h);
        for p in 1..src.len() {
            dst[p] = src[p] - src[p - 1];
        }
        dst[0] = dst[1];
    }
    Ok(diff)
}
