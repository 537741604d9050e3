// sgdopt-data/src/samplers/random_batch.rs

use log::debug;
use rand::seq::SliceRandom;
use rand::Rng;
use sgdopt_core::{Batcher, SgdError};

/// Draws uniformly random minibatches from an explicitly supplied RNG.
///
/// With replacement every position is drawn independently from
/// `[0, dataset_size)`, so a batch may repeat an index. Without replacement a
/// batch is a uniformly random `batch_size`-subset; consecutive batches are
/// drawn independently of each other.
#[derive(Debug, Clone)]
pub struct RandomBatch<R> {
    batch_size: usize,
    replacement: bool,
    rng: R,
    dataset_size: Option<usize>,
    pool: Vec<usize>,
    data: Vec<usize>,
}

impl<R: Rng> RandomBatch<R> {
    /// Creates a new `RandomBatch`.
    ///
    /// # Arguments
    ///
    /// * `batch_size`: Number of indices per batch.
    /// * `replacement`: If `true`, an index can appear more than once in a batch.
    /// * `rng`: Source of randomness; seed it for reproducible runs.
    pub fn new(batch_size: usize, replacement: bool, rng: R) -> Self {
        RandomBatch {
            batch_size,
            replacement,
            rng,
            dataset_size: None,
            pool: Vec::new(),
            data: Vec::new(),
        }
    }

    pub fn with_replacement(batch_size: usize, rng: R) -> Self {
        Self::new(batch_size, true, rng)
    }

    pub fn without_replacement(batch_size: usize, rng: R) -> Self {
        Self::new(batch_size, false, rng)
    }

    pub fn batch_size(&self) -> usize {
        self.batch_size
    }

    pub fn replacement(&self) -> bool {
        self.replacement
    }
}

impl<R: Rng> Batcher for RandomBatch<R> {
    fn init(&mut self, dataset_size: usize) -> Result<(), SgdError> {
        if self.batch_size == 0 {
            return Err(SgdError::ZeroBatchSize);
        }
        if dataset_size == 0 {
            return Err(SgdError::EmptyDataset);
        }
        if !self.replacement && self.batch_size > dataset_size {
            return Err(SgdError::BatchTooLarge {
                batch_size: self.batch_size,
                dataset_size,
            });
        }

        self.data.clear();
        self.data.resize(self.batch_size, 0);
        self.pool.clear();
        if !self.replacement {
            self.pool.extend(0..dataset_size);
        }
        self.dataset_size = Some(dataset_size);
        debug!(
            "RandomBatch: init dataset_size={}, batch_size={}, replacement={}",
            dataset_size, self.batch_size, self.replacement
        );
        Ok(())
    }

    fn batch(&mut self) -> Result<&[usize], SgdError> {
        let dataset_size = self
            .dataset_size
            .ok_or(SgdError::Uninitialized("random batch"))?;
        if self.replacement {
            for idx in self.data.iter_mut() {
                *idx = self.rng.gen_range(0..dataset_size);
            }
        } else {
            // The pool stays a permutation of 0..dataset_size, so a partial
            // Fisher-Yates pass picks a uniform subset whatever order it is in.
            let (chosen, _) = self.pool.partial_shuffle(&mut self.rng, self.batch_size);
            self.data.copy_from_slice(chosen);
        }
        Ok(&self.data)
    }
}

#[cfg(test)]
#[path = "random_batch_test.rs"]
mod tests;
