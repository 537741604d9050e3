//! Minibatch stochastic gradient descent.
//!
//! An objective that decomposes as a sum over samples ([`Problem`]) is
//! minimized by repeatedly drawing a minibatch of sample indices
//! ([`Batcher`]), averaging the per-sample gradients over it, and letting an
//! update policy ([`Stepper`]) turn that average into a parameter step.
//! [`minimize`] runs the loop and reports why it stopped.

pub mod batcher;
pub mod driver;
pub mod error;
pub mod optim;
pub mod problem;
pub mod settings;
pub mod utils;

pub use batcher::Batcher;
pub use driver::{minimize, Outcome, Status};
pub use error::SgdError;
pub use optim::Stepper;
pub use problem::{FnProblem, Problem};
pub use settings::Settings;
