pub mod random_batch;
pub mod sequential_batch;

pub use random_batch::RandomBatch;
pub use sequential_batch::SequentialBatch;
