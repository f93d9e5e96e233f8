//! Stack-allocated 2x2 linear algebra for the residual update hot loop.
//!
//! The residual process is bivariate (Tmax, Tmin), so everything here
//! is fixed at dimension two with closed-form decompositions.

/// Two-element column vector.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Vec2 {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

/// 2x2 matrix stored in row-major order.
///
/// `rows[r][c]` = element at row r, column c, matching the layout of
/// the calibration files.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Mat2 {
    pub(crate) rows: [[f64; 2]; 2],
}

impl Vec2 {
    /// Returns a zero-initialized vector.
    #[inline(always)]
    pub(crate) fn zeros() -> Self {
        Self { x: 0.0, y: 0.0 }
    }
}

impl Mat2 {
    /// Builds a matrix from row-major entries.
    #[inline(always)]
    pub(crate) fn from_rows(rows: [[f64; 2]; 2]) -> Self {
        Self { rows }
    }

    /// Returns the row-major entries.
    #[inline(always)]
    pub(crate) fn rows(&self) -> [[f64; 2]; 2] {
        self.rows
    }

    /// Computes the matrix-vector product `self * v`.
    #[inline(always)]
    pub(crate) fn mul_vec(&self, v: Vec2) -> Vec2 {
        Vec2 {
            x: self.rows[0][0] * v.x + self.rows[0][1] * v.y,
            y: self.rows[1][0] * v.x + self.rows[1][1] * v.y,
        }
    }

    /// Computes the matrix product `self * other`.
    pub(crate) fn mul_mat(&self, other: &Mat2) -> Mat2 {
        let a = &self.rows;
        let b = &other.rows;
        Mat2::from_rows([
            [
                a[0][0] * b[0][0] + a[0][1] * b[1][0],
                a[0][0] * b[0][1] + a[0][1] * b[1][1],
            ],
            [
                a[1][0] * b[0][0] + a[1][1] * b[1][0],
                a[1][0] * b[0][1] + a[1][1] * b[1][1],
            ],
        ])
    }

    /// Returns the transpose.
    #[inline(always)]
    pub(crate) fn transpose(&self) -> Mat2 {
        Mat2::from_rows([
            [self.rows[0][0], self.rows[1][0]],
            [self.rows[0][1], self.rows[1][1]],
        ])
    }

    /// Computes the entrywise sum `self + other`.
    pub(crate) fn add(&self, other: &Mat2) -> Mat2 {
        Mat2::from_rows([
            [
                self.rows[0][0] + other.rows[0][0],
                self.rows[0][1] + other.rows[0][1],
            ],
            [
                self.rows[1][0] + other.rows[1][0],
                self.rows[1][1] + other.rows[1][1],
            ],
        ])
    }

    /// Computes the entrywise difference `self - other`.
    pub(crate) fn sub(&self, other: &Mat2) -> Mat2 {
        Mat2::from_rows([
            [
                self.rows[0][0] - other.rows[0][0],
                self.rows[0][1] - other.rows[0][1],
            ],
            [
                self.rows[1][0] - other.rows[1][0],
                self.rows[1][1] - other.rows[1][1],
            ],
        ])
    }

    /// Returns the determinant.
    #[inline(always)]
    pub(crate) fn determinant(&self) -> f64 {
        self.rows[0][0] * self.rows[1][1] - self.rows[0][1] * self.rows[1][0]
    }

    /// Returns the inverse, or `None` for a singular or near-singular
    /// matrix.
    pub(crate) fn inverse(&self) -> Option<Mat2> {
        let det = self.determinant();
        if !det.is_finite() || det.abs() < 1e-12 {
            return None;
        }
        Some(Mat2::from_rows([
            [self.rows[1][1] / det, -self.rows[0][1] / det],
            [-self.rows[1][0] / det, self.rows[0][0] / det],
        ]))
    }

    /// Computes the lower-triangular Cholesky factor `L` with
    /// `L * L^T = self`, or `None` if the matrix is not symmetric
    /// positive definite.
    ///
    /// Only the lower triangle of `self` is read.
    pub(crate) fn cholesky_lower(&self) -> Option<Mat2> {
        let m11 = self.rows[0][0];
        let m21 = self.rows[1][0];
        let m22 = self.rows[1][1];
        if m11 <= 0.0 {
            return None;
        }
        let l11 = m11.sqrt();
        let l21 = m21 / l11;
        let rest = m22 - l21 * l21;
        if rest <= 0.0 {
            return None;
        }
        Some(Mat2::from_rows([[l11, 0.0], [l21, rest.sqrt()]]))
    }

    /// Returns the largest eigenvalue modulus.
    ///
    /// For a complex-conjugate pair both moduli equal `sqrt(det)`.
    pub(crate) fn spectral_radius(&self) -> f64 {
        let trace = self.rows[0][0] + self.rows[1][1];
        let det = self.determinant();
        let disc = trace * trace - 4.0 * det;
        if disc >= 0.0 {
            let root = disc.sqrt();
            let l1 = (trace + root) / 2.0;
            let l2 = (trace - root) / 2.0;
            l1.abs().max(l2.abs())
        } else {
            det.abs().sqrt()
        }
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    #[test]
    fn mul_vec_known_product() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let v = Vec2 { x: 5.0, y: 6.0 };
        let r = m.mul_vec(v);
        assert_eq!(r, Vec2 { x: 17.0, y: 39.0 });
    }

    #[test]
    fn mul_mat_known_product() {
        let a = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let b = Mat2::from_rows([[5.0, 6.0], [7.0, 8.0]]);
        let c = a.mul_mat(&b);
        assert_eq!(c.rows(), [[19.0, 22.0], [43.0, 50.0]]);
    }

    #[test]
    fn transpose_swaps_off_diagonal() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.transpose().rows(), [[1.0, 3.0], [2.0, 4.0]]);
    }

    #[test]
    fn inverse_round_trip() {
        let m = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let inv = m.inverse().expect("matrix is invertible");
        let identity = m.mul_mat(&inv);
        assert_abs_diff_eq!(identity.rows()[0][0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(identity.rows()[0][1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(identity.rows()[1][0], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(identity.rows()[1][1], 1.0, epsilon = 1e-12);
    }

    #[test]
    fn singular_inverse_is_none() {
        let m = Mat2::from_rows([[1.0, 2.0], [2.0, 4.0]]);
        assert!(m.inverse().is_none());
    }

    #[test]
    fn cholesky_known_factor() {
        // [[4, 2], [2, 3]] = L L^T with L = [[2, 0], [1, sqrt(2)]].
        let m = Mat2::from_rows([[4.0, 2.0], [2.0, 3.0]]);
        let l = m.cholesky_lower().expect("matrix is positive definite");
        assert_abs_diff_eq!(l.rows()[0][0], 2.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l.rows()[0][1], 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l.rows()[1][0], 1.0, epsilon = 1e-12);
        assert_abs_diff_eq!(l.rows()[1][1], 2.0_f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn cholesky_reconstructs_input() {
        let m = Mat2::from_rows([[1.0, 0.53], [0.53, 1.0]]);
        let l = m.cholesky_lower().expect("correlation matrix is positive definite");
        let back = l.mul_mat(&l.transpose());
        for r in 0..2 {
            for c in 0..2 {
                assert_abs_diff_eq!(back.rows()[r][c], m.rows()[r][c], epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn cholesky_rejects_indefinite() {
        let m = Mat2::from_rows([[1.0, 2.0], [2.0, 1.0]]);
        assert!(m.cholesky_lower().is_none());
        let m = Mat2::from_rows([[-1.0, 0.0], [0.0, 1.0]]);
        assert!(m.cholesky_lower().is_none());
    }

    #[test]
    fn spectral_radius_diagonal() {
        let m = Mat2::from_rows([[0.7, 0.0], [0.0, -0.9]]);
        assert_abs_diff_eq!(m.spectral_radius(), 0.9, epsilon = 1e-12);
    }

    #[test]
    fn spectral_radius_rotation() {
        // Pure rotation has complex eigenvalues of modulus one.
        let m = Mat2::from_rows([[0.0, -1.0], [1.0, 0.0]]);
        assert_abs_diff_eq!(m.spectral_radius(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn spectral_radius_scaled_rotation() {
        let m = Mat2::from_rows([[0.0, -0.5], [0.5, 0.0]]);
        assert_abs_diff_eq!(m.spectral_radius(), 0.5, epsilon = 1e-12);
    }
}
