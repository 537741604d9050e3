//! The minibatch optimization loop.

use log::{debug, info, log_enabled, trace, Level};
use ndarray::Array2;

use crate::batcher::Batcher;
use crate::error::SgdError;
use crate::optim::Stepper;
use crate::problem::Problem;
use crate::settings::Settings;
use crate::utils::{add_assign, l2_norm, mean_rows_into, resize_rows, resize_zero};

/// Why the loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// `max_iterations` stepper calls were made.
    IterationLimit,
    /// The proposed step was shorter than the step tolerance.
    StepConvergence,
    /// The proposed step had a NaN or infinite norm.
    Failure,
}

impl Status {
    /// `true` for the two normal terminations, `false` for [`Status::Failure`].
    pub fn is_success(&self) -> bool {
        !matches!(self, Status::Failure)
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Status::IterationLimit => "iteration limit",
            Status::StepConvergence => "step convergence",
            Status::Failure => "failure",
        };
        f.write_str(s)
    }
}

/// The answer produced by [`minimize`].
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    /// Final parameters. A step that triggered termination is never applied.
    pub parameters: Vec<f64>,
    pub status: Status,
    /// Number of steps added to the parameters.
    pub iterations: usize,
}

/// Minimizes `problem` from the all-zero parameter vector.
///
/// Each iteration draws a batch from `batcher`, averages the per-sample
/// gradients over it, asks `stepper` for an update and adds that update to the
/// parameters. A step whose norm is NaN or infinite ends the run with
/// [`Status::Failure`]; a step shorter than the tolerance ends it with
/// [`Status::StepConvergence`]. Either way that last step is discarded.
///
/// # Errors
///
/// Returns an error, before touching any state, if the problem has no
/// parameters or no samples. Errors from `batcher.init` and `stepper.init`
/// are propagated as is.
pub fn minimize<P, B, S>(
    problem: &P,
    batcher: &mut B,
    stepper: &mut S,
    settings: &Settings,
) -> Result<Outcome, SgdError>
where
    P: Problem + ?Sized,
    B: Batcher + ?Sized,
    S: Stepper + ?Sized,
{
    let dim = problem.dimension();
    if dim == 0 {
        return Err(SgdError::EmptyDimension);
    }
    let size = problem.size();
    if size == 0 {
        return Err(SgdError::EmptyDataset);
    }

    let settings = settings.resolved();
    batcher.init(size)?;
    stepper.init(dim)?;
    debug!(
        "minimize: dimension={}, size={}, stepper={}, {:?}",
        dim,
        size,
        stepper.name(),
        settings
    );

    let mut parameters = vec![0.0; dim];
    let mut step = vec![0.0; dim];
    let mut avg_grad = vec![0.0; dim];
    let mut losses: Vec<f64> = Vec::new();
    let mut grads = Array2::<f64>::zeros((0, dim));

    let mut iteration = 0;
    let status = loop {
        if settings.max_iterations != 0 && iteration >= settings.max_iterations {
            break Status::IterationLimit;
        }

        let batch = batcher.batch()?;
        let n = batch.len();
        grads = resize_rows(grads, n, dim);
        problem.grad(grads.view_mut(), &parameters, batch);
        mean_rows_into(&mut avg_grad, &grads);

        // The loss is not a stopping criterion; it is only evaluated for tracing.
        let batch_loss = if log_enabled!(Level::Trace) {
            losses = resize_zero(losses, n);
            problem.func(&mut losses, &parameters, batch);
            Some(losses.iter().sum::<f64>() / n as f64)
        } else {
            None
        };

        stepper.step(&mut step, &avg_grad)?;
        let step_norm = l2_norm(&step);
        trace!(
            "minimize: iteration={}, step_norm={:e}, batch_loss={:?}",
            iteration,
            step_norm,
            batch_loss
        );

        if !step_norm.is_finite() {
            break Status::Failure;
        }
        if step_norm < settings.step_tolerance {
            break Status::StepConvergence;
        }
        add_assign(&mut parameters, &step);
        iteration += 1;
    };

    info!(
        "minimize: {} finished with {} after {} iterations",
        stepper.name(),
        status,
        iteration
    );
    Ok(Outcome {
        parameters,
        status,
        iterations: iteration,
    })
}

#[cfg(test)]
#[path = "driver_test.rs"]
mod tests;
