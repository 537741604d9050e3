use log::debug;

use crate::error::SgdError;
use crate::optim::stepper_trait::{check_decay, check_positive, check_step_shapes, Stepper};
use crate::utils::{or_default, resize_zero};

/// RMSProp: gradient scaled by a decayed root-mean-square of past gradients.
///
/// ```text
/// E[g²]_t = γ E[g²]_{t-1} + (1-γ) df/dx ⊙ df/dx
/// step    = -η / sqrt(E[g²]_t + ϵ) ⊙ df/dx
/// ```
#[derive(Debug, Clone, Default)]
pub struct RmsProp {
    /// Learning rate `η` (default: 0.001 when left at 0).
    pub lr: f64,
    /// Decay `γ` of the squared-gradient average (default: 0.9 when left at 0).
    pub alpha: f64,
    /// Smoothing term `ϵ` (default: 1e-8 when left at 0).
    pub eps: f64,

    rate: f64,
    decay: f64,
    smooth: f64,
    square_avg: Vec<f64>,
    dimension: Option<usize>,
}

impl RmsProp {
    pub fn new(lr: f64, alpha: f64, eps: f64) -> Self {
        RmsProp {
            lr,
            alpha,
            eps,
            ..Default::default()
        }
    }
}

impl Stepper for RmsProp {
    fn name(&self) -> &'static str {
        "rmsprop"
    }

    fn init(&mut self, dimension: usize) -> Result<(), SgdError> {
        let rate = or_default(self.lr, 0.001);
        let decay = or_default(self.alpha, 0.9);
        let smooth = or_default(self.eps, 1e-8);
        check_positive("rmsprop lr", rate)?;
        check_decay("rmsprop alpha", decay)?;
        check_positive("rmsprop eps", smooth)?;
        self.rate = rate;
        self.decay = decay;
        self.smooth = smooth;
        self.square_avg = resize_zero(std::mem::take(&mut self.square_avg), dimension);
        self.dimension = Some(dimension);
        debug!(
            "RmsProp: init dimension={}, lr={}, alpha={}, eps={}",
            dimension, rate, decay, smooth
        );
        Ok(())
    }

    fn step(&mut self, step: &mut [f64], grad: &[f64]) -> Result<(), SgdError> {
        check_step_shapes(self.name(), self.dimension, step, grad)?;
        for ((avg, s), g) in self.square_avg.iter_mut().zip(step.iter_mut()).zip(grad) {
            *avg = self.decay * *avg + (1.0 - self.decay) * g * g;
            *s = -self.rate * g / (*avg + self.smooth).sqrt();
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "rmsprop_test.rs"]
mod tests;
