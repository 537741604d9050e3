//! The objective being minimized, addressed one sample at a time.

use ndarray::ArrayViewMut2;

/// An objective that decomposes as a sum over `size()` samples.
///
/// Both evaluations must be deterministic for a fixed parameter vector and
/// index set. The driver hands in storage it owns and reuses across
/// iterations, so implementations write into `dst` and never allocate it.
pub trait Problem {
    /// Number of parameters being optimized.
    fn dimension(&self) -> usize;

    /// Number of decomposable terms (samples).
    fn size(&self) -> usize;

    /// Writes the loss of each sample in `indices` into `dst`.
    ///
    /// `dst.len() == indices.len()`.
    fn func(&self, dst: &mut [f64], params: &[f64], indices: &[usize]);

    /// Writes the gradient of each sample in `indices` into the matching row of `dst`.
    ///
    /// `dst` has shape `(indices.len(), self.dimension())`.
    fn grad(&self, dst: ArrayViewMut2<'_, f64>, params: &[f64], indices: &[usize]);
}

impl<P: Problem + ?Sized> Problem for &P {
    fn dimension(&self) -> usize {
        (**self).dimension()
    }

    fn size(&self) -> usize {
        (**self).size()
    }

    fn func(&self, dst: &mut [f64], params: &[f64], indices: &[usize]) {
        (**self).func(dst, params, indices)
    }

    fn grad(&self, dst: ArrayViewMut2<'_, f64>, params: &[f64], indices: &[usize]) {
        (**self).grad(dst, params, indices)
    }
}

/// A [`Problem`] assembled from a pair of closures.
///
/// ```
/// use sgdopt_core::problem::{FnProblem, Problem};
///
/// // f_i(x) = (x - i)^2 over four samples.
/// let problem = FnProblem::new(
///     1,
///     4,
///     |dst: &mut [f64], x: &[f64], idx: &[usize]| {
///         for (d, &i) in dst.iter_mut().zip(idx) {
///             *d = (x[0] - i as f64).powi(2);
///         }
///     },
///     |mut dst: ndarray::ArrayViewMut2<'_, f64>, x: &[f64], idx: &[usize]| {
///         for (mut row, &i) in dst.rows_mut().into_iter().zip(idx) {
///             row[0] = 2.0 * (x[0] - i as f64);
///         }
///     },
/// );
/// assert_eq!(problem.size(), 4);
/// ```
pub struct FnProblem<F, G> {
    dimension: usize,
    size: usize,
    func: F,
    grad: G,
}

impl<F, G> FnProblem<F, G>
where
    F: Fn(&mut [f64], &[f64], &[usize]),
    G: Fn(ArrayViewMut2<'_, f64>, &[f64], &[usize]),
{
    pub fn new(dimension: usize, size: usize, func: F, grad: G) -> Self {
        FnProblem {
            dimension,
            size,
            func,
            grad,
        }
    }
}

impl<F, G> Problem for FnProblem<F, G>
where
    F: Fn(&mut [f64], &[f64], &[usize]),
    G: Fn(ArrayViewMut2<'_, f64>, &[f64], &[usize]),
{
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn size(&self) -> usize {
        self.size
    }

    fn func(&self, dst: &mut [f64], params: &[f64], indices: &[usize]) {
        (self.func)(dst, params, indices)
    }

    fn grad(&self, dst: ArrayViewMut2<'_, f64>, params: &[f64], indices: &[usize]) {
        (self.grad)(dst, params, indices)
    }
}

impl<F, G> std::fmt::Debug for FnProblem<F, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnProblem")
            .field("dimension", &self.dimension)
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
