// sgdopt-data/src/samplers/sequential_batch.rs

use log::debug;
use sgdopt_core::{Batcher, SgdError};

/// Walks the dataset in order, `batch_size` indices at a time, wrapping
/// around at the end.
///
/// With `batch_size == dataset_size` every batch is the whole dataset, which
/// turns the driver into plain (full-batch) gradient descent.
#[derive(Debug, Clone)]
pub struct SequentialBatch {
    batch_size: usize,
    dataset_size: Option<usize>,
    cursor: usize,
    data: Vec<usize>,
}

impl SequentialBatch {
    /// Creates a new `SequentialBatch`.
    pub fn new(batch_size: usize) -> Self {
        SequentialBatch {
            batch_size,
            dataset_size: None,
            cursor: 0,
            data: Vec::new(),
        }
    }
}

impl Batcher for SequentialBatch {
    fn init(&mut self, dataset_size: usize) -> Result<(), SgdError> {
        if self.batch_size == 0 {
            return Err(SgdError::ZeroBatchSize);
        }
        if dataset_size == 0 {
            return Err(SgdError::EmptyDataset);
        }
        self.data.clear();
        self.data.resize(self.batch_size, 0);
        self.cursor = 0;
        self.dataset_size = Some(dataset_size);
        debug!(
            "SequentialBatch: init dataset_size={}, batch_size={}",
            dataset_size, self.batch_size
        );
        Ok(())
    }

    fn batch(&mut self) -> Result<&[usize], SgdError> {
        let dataset_size = self
            .dataset_size
            .ok_or(SgdError::Uninitialized("sequential batch"))?;
        for idx in self.data.iter_mut() {
            *idx = self.cursor;
            self.cursor = (self.cursor + 1) % dataset_size;
        }
        Ok(&self.data)
    }
}

#[cfg(test)]
#[path = "sequential_batch_test.rs"]
mod tests;
