//! Lag-0/lag-1 coefficient pair for the bivariate residual process.

use tracing::warn;

use crate::error::TemperatureError;
use crate::linalg::{Mat2, Vec2};
use crate::residual::{ResidualState, Shock};

/// The calibrated matrices of the residual recursion
/// `residual[t] = A * shock[t] + B * residual[t-1]`.
///
/// `A` loads the day's independent shocks onto the correlated anomaly
/// pair; `B` carries yesterday's anomaly forward. Both are 2x2 and
/// treated as already-solved constants at runtime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArCoefficients {
    a: Mat2,
    b: Mat2,
}

/// Fails if any entry of `rows` is non-finite, naming the position.
fn check_finite(matrix: &'static str, rows: &[[f64; 2]; 2]) -> Result<(), TemperatureError> {
    for (r, row) in rows.iter().enumerate() {
        for (c, &value) in row.iter().enumerate() {
            if !value.is_finite() {
                return Err(TemperatureError::InvalidCoefficient {
                    matrix,
                    row: r,
                    col: c,
                    value,
                });
            }
        }
    }
    Ok(())
}

impl ArCoefficients {
    /// Builds the coefficient pair from row-major matrices.
    ///
    /// A persistence matrix whose spectral radius reaches 1 makes the
    /// residual process non-stationary; that is logged as a warning
    /// rather than rejected, because short truncated runs can still be
    /// meaningful during calibration work.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureError::InvalidCoefficient`] if any entry is
    /// not finite.
    pub fn new(a: [[f64; 2]; 2], b: [[f64; 2]; 2]) -> Result<Self, TemperatureError> {
        check_finite("a", &a)?;
        check_finite("b", &b)?;
        let coeffs = Self {
            a: Mat2::from_rows(a),
            b: Mat2::from_rows(b),
        };
        let radius = coeffs.persistence_spectral_radius();
        if radius >= 1.0 {
            warn!(
                spectral_radius = radius,
                "persistence matrix is non-stationary; residuals will not stay bounded"
            );
        }
        Ok(coeffs)
    }

    /// Derives the coefficient pair from lag-0 and lag-1 moment
    /// matrices.
    ///
    /// Uses the classical multisite solution: `B = M1 * M0^-1` and
    /// `A * A^T = M0 - B * M1^T`, with `A` taken as the lower
    /// Cholesky factor.
    ///
    /// # Errors
    ///
    /// Returns [`TemperatureError::SingularMoment`] if `M0` cannot be
    /// inverted, or [`TemperatureError::NotPositiveDefinite`] if the
    /// shock covariance `M0 - B * M1^T` has no Cholesky factor.
    pub fn from_moments(
        m0: [[f64; 2]; 2],
        m1: [[f64; 2]; 2],
    ) -> Result<Self, TemperatureError> {
        check_finite("m0", &m0)?;
        check_finite("m1", &m1)?;
        let m0 = Mat2::from_rows(m0);
        let m1 = Mat2::from_rows(m1);

        let m0_inv = m0.inverse().ok_or(TemperatureError::SingularMoment)?;
        let b = m1.mul_mat(&m0_inv);
        let shock_cov = m0.sub(&b.mul_mat(&m1.transpose()));
        let a = shock_cov
            .cholesky_lower()
            .ok_or(TemperatureError::NotPositiveDefinite)?;

        Self::new(a.rows(), b.rows())
    }

    /// The instantaneous loading matrix, row-major.
    pub fn a(&self) -> [[f64; 2]; 2] {
        self.a.rows()
    }

    /// The lag-1 persistence matrix, row-major.
    pub fn b(&self) -> [[f64; 2]; 2] {
        self.b.rows()
    }

    /// Largest eigenvalue modulus of the persistence matrix.
    ///
    /// Values below 1 mean the residual process is stationary.
    pub fn persistence_spectral_radius(&self) -> f64 {
        self.b.spectral_radius()
    }

    /// Applies one step of the residual recursion.
    pub fn advance(&self, prev: ResidualState, shock: Shock) -> ResidualState {
        let loaded = self.a.mul_vec(Vec2 {
            x: shock.x,
            y: shock.y,
        });
        let carried = self.b.mul_vec(Vec2 {
            x: prev.x(),
            y: prev.y(),
        });
        ResidualState::new(loaded.x + carried.x, loaded.y + carried.y)
    }

    /// The stationary lag-0 and lag-1 moments implied by this pair,
    /// or `None` if the persistence matrix is non-stationary.
    ///
    /// Solves the fixed point `M0 = B * M0 * B^T + A * A^T` by
    /// iteration, then `M1 = B * M0`.
    pub fn implied_moments(&self) -> Option<([[f64; 2]; 2], [[f64; 2]; 2])> {
        if self.persistence_spectral_radius() >= 1.0 {
            return None;
        }
        let shock_cov = self.a.mul_mat(&self.a.transpose());
        let mut m0 = shock_cov;
        for _ in 0..10_000 {
            let next = self.b.mul_mat(&m0).mul_mat(&self.b.transpose()).add(&shock_cov);
            let diff = max_abs_diff(&next, &m0);
            m0 = next;
            if diff < 1e-13 {
                break;
            }
        }
        let m1 = self.b.mul_mat(&m0);
        Some((m0.rows(), m1.rows()))
    }
}

fn max_abs_diff(a: &Mat2, b: &Mat2) -> f64 {
    let a = a.rows();
    let b = b.rows();
    let mut max = 0.0_f64;
    for r in 0..2 {
        for c in 0..2 {
            max = max.max((a[r][c] - b[r][c]).abs());
        }
    }
    max
}
