use log::debug;

use crate::error::SgdError;
use crate::optim::stepper_trait::{check_decay, check_positive, check_step_shapes, Stepper};
use crate::utils::{or_default, resize_zero};

/// Adadelta: per-parameter step sizes from decayed averages of squared
/// gradients and squared past steps, with no global learning rate.
///
/// ```text
/// E[g²]_t = (1-γ) df/dx ⊙ df/dx + γ E[g²]_{t-1}
/// step_t  = -sqrt(E[s²]_{t-1} + ϵ) / sqrt(E[g²]_t + ϵ) ⊙ df/dx
/// E[s²]_t = (1-γ) step_t ⊙ step_t + γ E[s²]_{t-1}
/// ```
#[derive(Debug, Clone, Default)]
pub struct Adadelta {
    /// Decay `γ` of both running averages (default: 0.9 when left at 0).
    pub rho: f64,
    /// Smoothing term `ϵ` (default: 1e-8 when left at 0).
    pub eps: f64,

    decay: f64,
    smooth: f64,
    square_avg: Vec<f64>,
    step_square_avg: Vec<f64>,
    dimension: Option<usize>,
}

impl Adadelta {
    pub fn new(rho: f64, eps: f64) -> Self {
        Adadelta {
            rho,
            eps,
            ..Default::default()
        }
    }
}

impl Stepper for Adadelta {
    fn name(&self) -> &'static str {
        "adadelta"
    }

    fn init(&mut self, dimension: usize) -> Result<(), SgdError> {
        let decay = or_default(self.rho, 0.9);
        let smooth = or_default(self.eps, 1e-8);
        check_decay("adadelta rho", decay)?;
        check_positive("adadelta eps", smooth)?;
        self.decay = decay;
        self.smooth = smooth;
        self.square_avg = resize_zero(std::mem::take(&mut self.square_avg), dimension);
        self.step_square_avg = resize_zero(std::mem::take(&mut self.step_square_avg), dimension);
        self.dimension = Some(dimension);
        debug!("Adadelta: init dimension={}, rho={}, eps={}", dimension, decay, smooth);
        Ok(())
    }

    fn step(&mut self, step: &mut [f64], grad: &[f64]) -> Result<(), SgdError> {
        check_step_shapes(self.name(), self.dimension, step, grad)?;
        let (decay, smooth) = (self.decay, self.smooth);
        for (i, g) in grad.iter().enumerate() {
            let eg = (1.0 - decay) * g * g + decay * self.square_avg[i];
            self.square_avg[i] = eg;
            let s = -(self.step_square_avg[i] + smooth).sqrt() / (eg + smooth).sqrt() * g;
            step[i] = s;
            self.step_square_avg[i] = (1.0 - decay) * s * s + decay * self.step_square_avg[i];
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "adadelta_test.rs"]
mod tests;
