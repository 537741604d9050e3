use ndarray::ArrayViewMut2;
use sgdopt_core::{Batcher, Problem, SgdError};

/// Every sample, every time: turns the driver into plain gradient descent.
#[derive(Debug, Default)]
pub struct AllIndices {
    indices: Vec<usize>,
}

impl Batcher for AllIndices {
    fn init(&mut self, dataset_size: usize) -> Result<(), SgdError> {
        self.indices = (0..dataset_size).collect();
        Ok(())
    }

    fn batch(&mut self) -> Result<&[usize], SgdError> {
        Ok(&self.indices)
    }
}

/// `f_i(x) = |x - c_i|^2`, minimized by the mean of the centers.
pub struct Centers {
    pub centers: Vec<Vec<f64>>,
}

#[allow(dead_code)]
impl Centers {
    pub fn mean(&self) -> Vec<f64> {
        let n = self.centers.len() as f64;
        let mut out = vec![0.0; self.dimension()];
        for c in &self.centers {
            for (o, v) in out.iter_mut().zip(c) {
                *o += v / n;
            }
        }
        out
    }
}

impl Problem for Centers {
    fn dimension(&self) -> usize {
        self.centers.first().map_or(0, Vec::len)
    }

    fn size(&self) -> usize {
        self.centers.len()
    }

    fn func(&self, dst: &mut [f64], params: &[f64], indices: &[usize]) {
        for (d, &i) in dst.iter_mut().zip(indices) {
            *d = params
                .iter()
                .zip(&self.centers[i])
                .map(|(x, c)| (x - c) * (x - c))
                .sum();
        }
    }

    fn grad(&self, mut dst: ArrayViewMut2<'_, f64>, params: &[f64], indices: &[usize]) {
        for (mut row, &i) in dst.rows_mut().into_iter().zip(indices) {
            for ((g, x), c) in row.iter_mut().zip(params).zip(&self.centers[i]) {
                *g = 2.0 * (x - c);
            }
        }
    }
}

#[allow(dead_code)]
pub fn four_centers() -> Centers {
    Centers {
        centers: vec![
            vec![1.0, -1.0],
            vec![2.0, -3.0],
            vec![0.5, -2.5],
            vec![2.5, -1.5],
        ],
    }
}
