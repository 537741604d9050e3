use log::debug;

use crate::error::SgdError;
use crate::optim::stepper_trait::{check_positive, check_step_shapes, Stepper};
use crate::utils::{or_default, resize_zero};

/// Adagrad: per-parameter step sizes shrinking with the accumulated squared gradient.
///
/// ```text
/// G_t  = G_{t-1} + df/dx ⊙ df/dx
/// step = -η / sqrt(G_t + ϵ) ⊙ df/dx
/// ```
#[derive(Debug, Clone, Default)]
pub struct Adagrad {
    /// Learning rate `η` (default: 0.01 when left at 0).
    pub lr: f64,
    /// Smoothing term `ϵ` (default: 1e-8 when left at 0).
    pub eps: f64,

    rate: f64,
    smooth: f64,
    sum_gradient_squares: Vec<f64>,
    dimension: Option<usize>,
}

impl Adagrad {
    pub fn new(lr: f64, eps: f64) -> Self {
        Adagrad {
            lr,
            eps,
            ..Default::default()
        }
    }
}

impl Stepper for Adagrad {
    fn name(&self) -> &'static str {
        "adagrad"
    }

    fn init(&mut self, dimension: usize) -> Result<(), SgdError> {
        let rate = or_default(self.lr, 0.01);
        let smooth = or_default(self.eps, 1e-8);
        check_positive("adagrad lr", rate)?;
        check_positive("adagrad eps", smooth)?;
        self.rate = rate;
        self.smooth = smooth;
        self.sum_gradient_squares =
            resize_zero(std::mem::take(&mut self.sum_gradient_squares), dimension);
        self.dimension = Some(dimension);
        debug!("Adagrad: init dimension={}, lr={}, eps={}", dimension, rate, smooth);
        Ok(())
    }

    fn step(&mut self, step: &mut [f64], grad: &[f64]) -> Result<(), SgdError> {
        check_step_shapes(self.name(), self.dimension, step, grad)?;
        for ((acc, s), g) in self
            .sum_gradient_squares
            .iter_mut()
            .zip(step.iter_mut())
            .zip(grad)
        {
            *acc += g * g;
            *s = -self.rate * g / (*acc + self.smooth).sqrt();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "adagrad_test.rs"]
mod tests;
