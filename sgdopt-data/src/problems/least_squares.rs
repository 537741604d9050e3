// sgdopt-data/src/problems/least_squares.rs

use log::debug;
use ndarray::{Array1, Array2, ArrayViewMut2};
use rand::Rng;
use rand_distr::{Distribution, Normal, StandardNormal};
use sgdopt_core::{Problem, SgdError};

/// Relative pivot size below which the normal equations count as singular.
const PIVOT_TOLERANCE: f64 = 1e-12;

/// Linear least squares: sample `i` contributes `(x_i · θ - y_i)^2`.
#[derive(Debug, Clone)]
pub struct LeastSquares {
    x: Array2<f64>,
    y: Array1<f64>,
}

impl LeastSquares {
    /// Builds a problem from a design matrix (one row per sample) and targets.
    ///
    /// # Errors
    ///
    /// `DimensionMismatch` if `y` does not have one entry per row of `x`.
    pub fn new(x: Array2<f64>, y: Array1<f64>) -> Result<Self, SgdError> {
        if x.nrows() != y.len() {
            return Err(SgdError::DimensionMismatch {
                expected: x.nrows(),
                actual: y.len(),
            });
        }
        Ok(LeastSquares { x, y })
    }

    /// Generates `n` noisy samples of the linear model `true_params`.
    ///
    /// Features are standard normal. With `offset`, the first feature is fixed
    /// at 1 so `true_params[0]` acts as an intercept. Targets get additive
    /// `N(0, noise^2)` noise; `noise == 0` gives exact targets.
    pub fn synthetic<R: Rng + ?Sized>(
        true_params: &[f64],
        noise: f64,
        offset: bool,
        n: usize,
        rng: &mut R,
    ) -> Result<Self, SgdError> {
        let noise_dist = Normal::new(0.0, noise).map_err(|e| {
            SgdError::ConfigurationError(format!("noise standard deviation {}: {}", noise, e))
        })?;
        let dim = true_params.len();

        let mut x = Array2::<f64>::zeros((n, dim));
        let mut y = Array1::<f64>::zeros(n);
        for (mut row, target) in x.rows_mut().into_iter().zip(y.iter_mut()) {
            for (j, value) in row.iter_mut().enumerate() {
                *value = if offset && j == 0 {
                    1.0
                } else {
                    let z: f64 = StandardNormal.sample(rng);
                    z
                };
            }
            let clean: f64 = row.iter().zip(true_params).map(|(a, b)| a * b).sum();
            *target = clean + noise_dist.sample(rng);
        }
        debug!(
            "LeastSquares: generated {} samples, dimension {}, offset={}, noise={}",
            n, dim, offset, noise
        );
        Self::new(x, y)
    }

    pub fn features(&self) -> &Array2<f64> {
        &self.x
    }

    pub fn targets(&self) -> &Array1<f64> {
        &self.y
    }

    /// The exact minimizer, from the normal equations `XᵀX θ = Xᵀy`.
    ///
    /// # Errors
    ///
    /// `SingularSystem` when the features are linearly dependent (including
    /// when there are fewer samples than parameters).
    pub fn optimal(&self) -> Result<Vec<f64>, SgdError> {
        let gram = self.x.t().dot(&self.x);
        let rhs = self.x.t().dot(&self.y);
        solve(gram, rhs.to_vec())
    }

    fn residual(&self, params: &[f64], i: usize) -> f64 {
        let fitted: f64 = self.x.row(i).iter().zip(params).map(|(a, b)| a * b).sum();
        fitted - self.y[i]
    }
}

impl Problem for LeastSquares {
    fn dimension(&self) -> usize {
        self.x.ncols()
    }

    fn size(&self) -> usize {
        self.x.nrows()
    }

    fn func(&self, dst: &mut [f64], params: &[f64], indices: &[usize]) {
        for (d, &i) in dst.iter_mut().zip(indices) {
            let r = self.residual(params, i);
            *d = r * r;
        }
    }

    fn grad(&self, mut dst: ArrayViewMut2<'_, f64>, params: &[f64], indices: &[usize]) {
        for (mut row, &i) in dst.rows_mut().into_iter().zip(indices) {
            let scale = 2.0 * self.residual(params, i);
            row.assign(&self.x.row(i));
            row *= scale;
        }
    }
}

/// Gaussian elimination with partial pivoting on a square system.
fn solve(mut a: Array2<f64>, mut b: Vec<f64>) -> Result<Vec<f64>, SgdError> {
    let n = b.len();
    let scale = a.iter().fold(0.0f64, |m, v| m.max(v.abs()));
    if n == 0 || scale == 0.0 || !scale.is_finite() {
        return Err(SgdError::SingularSystem);
    }

    for col in 0..n {
        let mut pivot = col;
        for row in col + 1..n {
            if a[[row, col]].abs() > a[[pivot, col]].abs() {
                pivot = row;
            }
        }
        if a[[pivot, col]].abs() <= PIVOT_TOLERANCE * scale {
            return Err(SgdError::SingularSystem);
        }
        if pivot != col {
            for k in 0..n {
                a.swap([pivot, k], [col, k]);
            }
            b.swap(pivot, col);
        }
        for row in col + 1..n {
            let factor = a[[row, col]] / a[[col, col]];
            if factor == 0.0 {
                continue;
            }
            for k in col..n {
                a[[row, k]] -= factor * a[[col, k]];
            }
            b[row] -= factor * b[col];
        }
    }

    let mut out = vec![0.0; n];
    for row in (0..n).rev() {
        let tail: f64 = (row + 1..n).map(|k| a[[row, k]] * out[k]).sum();
        out[row] = (b[row] - tail) / a[[row, row]];
    }
    Ok(out)
}

#[cfg(test)]
#[path = "least_squares_test.rs"]
mod tests;
