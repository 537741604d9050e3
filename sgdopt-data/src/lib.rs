//! Index batchers and concrete problems for `sgdopt-core`.

pub mod problems;
pub mod samplers;

pub use problems::LeastSquares;
pub use samplers::{RandomBatch, SequentialBatch};
