use crate::error::SgdError;

/// Trait defining the common interface for all steppers.
///
/// A stepper turns the averaged minibatch gradient into the update that the
/// driver adds to the parameters:
///
/// ```text
/// θ += step
/// ```
///
/// so `step` already carries the descent sign. Steppers own whatever running
/// state their recurrence needs; [`Stepper::init`] sizes and zeroes it for a
/// run and [`Stepper::step`] advances it by one iteration.
pub trait Stepper {
    /// Short lowercase name used in logs and errors.
    fn name(&self) -> &'static str;

    /// Resolves defaults, validates hyperparameters and resets all state for a
    /// run over `dimension` parameters.
    ///
    /// Must be called before the first [`Stepper::step`] of every run.
    ///
    /// # Errors
    ///
    /// Returns `SgdError::ConfigurationError` if a resolved hyperparameter is
    /// out of range.
    fn init(&mut self, dimension: usize) -> Result<(), SgdError>;

    /// Writes the next update into `step` given the gradient `grad`.
    ///
    /// # Errors
    ///
    /// Returns `SgdError::Uninitialized` before `init`, and
    /// `SgdError::DimensionMismatch` if either slice length differs from the
    /// initialized dimension.
    fn step(&mut self, step: &mut [f64], grad: &[f64]) -> Result<(), SgdError>;
}

impl<S: Stepper + ?Sized> Stepper for &mut S {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn init(&mut self, dimension: usize) -> Result<(), SgdError> {
        (**self).init(dimension)
    }

    fn step(&mut self, step: &mut [f64], grad: &[f64]) -> Result<(), SgdError> {
        (**self).step(step, grad)
    }
}

impl<S: Stepper + ?Sized> Stepper for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn init(&mut self, dimension: usize) -> Result<(), SgdError> {
        (**self).init(dimension)
    }

    fn step(&mut self, step: &mut [f64], grad: &[f64]) -> Result<(), SgdError> {
        (**self).step(step, grad)
    }
}

/// Checks that the stepper was initialized and that both slices match its dimension.
pub(crate) fn check_step_shapes(
    name: &'static str,
    dimension: Option<usize>,
    step: &[f64],
    grad: &[f64],
) -> Result<(), SgdError> {
    let expected = dimension.ok_or(SgdError::Uninitialized(name))?;
    for actual in [grad.len(), step.len()] {
        if actual != expected {
            return Err(SgdError::DimensionMismatch { expected, actual });
        }
    }
    Ok(())
}

/// Decay factors must lie in `[0, 1)`.
pub(crate) fn check_decay(name: &str, value: f64) -> Result<(), SgdError> {
    if !(0.0..1.0).contains(&value) {
        return Err(SgdError::ConfigurationError(format!(
            "{} must be in [0, 1), got {}",
            name, value
        )));
    }
    Ok(())
}

/// Rates, offsets and smoothing terms must be finite and positive.
pub(crate) fn check_positive(name: &str, value: f64) -> Result<(), SgdError> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SgdError::ConfigurationError(format!(
            "{} must be finite and positive, got {}",
            name, value
        )));
    }
    Ok(())
}
