//! Contract for choosing which samples go into each minibatch.

use crate::error::SgdError;

/// Produces minibatches of sample indices.
///
/// Implementations own a reusable index buffer: `batch` overwrites it in place
/// and hands out a borrowed view, so the previous batch is gone once the next
/// one is drawn. Callers that need to keep a batch must copy it.
pub trait Batcher {
    /// Prepares the batcher for a dataset of `dataset_size` samples.
    ///
    /// # Errors
    ///
    /// Returns an error if the batcher's configuration cannot produce batches
    /// for this dataset (e.g. a batch larger than the dataset when sampling
    /// without replacement).
    fn init(&mut self, dataset_size: usize) -> Result<(), SgdError>;

    /// Draws the next batch. Every index lies in `[0, dataset_size)`.
    ///
    /// # Errors
    ///
    /// Returns `SgdError::Uninitialized` if called before [`Batcher::init`].
    fn batch(&mut self) -> Result<&[usize], SgdError>;
}

impl<B: Batcher + ?Sized> Batcher for &mut B {
    fn init(&mut self, dataset_size: usize) -> Result<(), SgdError> {
        (**self).init(dataset_size)
    }

    fn batch(&mut self) -> Result<&[usize], SgdError> {
        (**self).batch()
    }
}

impl<B: Batcher + ?Sized> Batcher for Box<B> {
    fn init(&mut self, dataset_size: usize) -> Result<(), SgdError> {
        (**self).init(dataset_size)
    }

    fn batch(&mut self) -> Result<&[usize], SgdError> {
        (**self).batch()
    }
}
