use ndarray::Array2;

/// Returns `buf` resized to `len` with every element set to zero.
///
/// The existing allocation is reused whenever its capacity suffices, so calling
/// this once per run keeps the hot loop allocation free.
pub fn resize_zero(mut buf: Vec<f64>, len: usize) -> Vec<f64> {
    buf.clear();
    buf.resize(len, 0.0);
    buf
}

/// Returns a `rows x cols` matrix, reusing `mat` when it already has that shape.
///
/// The contents of a reused matrix are left as they were; callers overwrite
/// every row they read.
pub fn resize_rows(mat: Array2<f64>, rows: usize, cols: usize) -> Array2<f64> {
    if mat.dim() == (rows, cols) {
        mat
    } else {
        Array2::zeros((rows, cols))
    }
}

/// Euclidean norm of `v`.
pub fn l2_norm(v: &[f64]) -> f64 {
    v.iter().map(|x| x * x).sum::<f64>().sqrt()
}

/// `dst += src`, element-wise.
pub fn add_assign(dst: &mut [f64], src: &[f64]) {
    debug_assert_eq!(dst.len(), src.len());
    for (d, s) in dst.iter_mut().zip(src) {
        *d += s;
    }
}

/// `v *= alpha`, element-wise.
pub fn scale(alpha: f64, v: &mut [f64]) {
    for x in v.iter_mut() {
        *x *= alpha;
    }
}

/// Writes the arithmetic mean of the rows of `mat` into `dst`.
///
/// `dst` must have one entry per column. A matrix with no rows leaves `dst`
/// zeroed.
pub fn mean_rows_into(dst: &mut [f64], mat: &Array2<f64>) {
    debug_assert_eq!(dst.len(), mat.ncols());
    dst.fill(0.0);
    let rows = mat.nrows();
    if rows == 0 {
        return;
    }
    for row in mat.rows() {
        for (d, g) in dst.iter_mut().zip(row.iter()) {
            *d += g;
        }
    }
    scale(1.0 / rows as f64, dst);
}

/// Resolves a zero-valued hyperparameter to its documented default.
#[inline]
pub fn or_default(value: f64, default: f64) -> f64 {
    if value == 0.0 {
        default
    } else {
        value
    }
}

#[cfg(test)]
#[path = "buffers_test.rs"]
mod tests;
