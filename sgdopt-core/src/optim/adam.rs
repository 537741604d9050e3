use log::debug;

use crate::error::SgdError;
use crate::optim::stepper_trait::{check_decay, check_positive, check_step_shapes, Stepper};
use crate::utils::{or_default, resize_zero};

/// Adaptive moment estimation.
///
/// ```text
/// m_t  = β1 m_{t-1} + (1-β1) df/dx
/// v_t  = β2 v_{t-1} + (1-β2) df/dx ⊙ df/dx
/// m̂_t  = m_t / (1 - β1^t)
/// v̂_t  = v_t / (1 - β2^t)
/// step = -η m̂_t / (sqrt(v̂_t) + ϵ)
/// ```
///
/// See <https://arxiv.org/abs/1412.6980>.
#[derive(Debug, Clone, Default)]
pub struct Adam {
    /// Learning rate `η` (default: 0.001 when left at 0).
    pub lr: f64,
    /// Decay `β1` of the first moment (default: 0.9 when left at 0).
    pub beta1: f64,
    /// Decay `β2` of the second moment (default: 0.999 when left at 0).
    pub beta2: f64,
    /// Smoothing term `ϵ` (default: 1e-8 when left at 0).
    pub eps: f64,

    rate: f64,
    betas: (f64, f64),
    smooth: f64,
    time: f64,
    m: Vec<f64>,
    v: Vec<f64>,
    dimension: Option<usize>,
}

impl Adam {
    pub fn new(lr: f64, beta1: f64, beta2: f64, eps: f64) -> Self {
        Adam {
            lr,
            beta1,
            beta2,
            eps,
            ..Default::default()
        }
    }
}

impl Stepper for Adam {
    fn name(&self) -> &'static str {
        "adam"
    }

    fn init(&mut self, dimension: usize) -> Result<(), SgdError> {
        let rate = or_default(self.lr, 0.001);
        let beta1 = or_default(self.beta1, 0.9);
        let beta2 = or_default(self.beta2, 0.999);
        let smooth = or_default(self.eps, 1e-8);
        check_positive("adam lr", rate)?;
        check_decay("adam beta1", beta1)?;
        check_decay("adam beta2", beta2)?;
        check_positive("adam eps", smooth)?;

        self.rate = rate;
        self.betas = (beta1, beta2);
        self.smooth = smooth;
        self.time = 0.0;
        self.m = resize_zero(std::mem::take(&mut self.m), dimension);
        self.v = resize_zero(std::mem::take(&mut self.v), dimension);
        self.dimension = Some(dimension);
        debug!(
            "Adam: init dimension={}, lr={}, betas=({}, {}), eps={}",
            dimension, rate, beta1, beta2, smooth
        );
        Ok(())
    }

    fn step(&mut self, step: &mut [f64], grad: &[f64]) -> Result<(), SgdError> {
        check_step_shapes(self.name(), self.dimension, step, grad)?;
        self.time += 1.0;
        let (beta1, beta2) = self.betas;
        let bias_correction1 = 1.0 - beta1.powf(self.time);
        let bias_correction2 = 1.0 - beta2.powf(self.time);

        for (i, g) in grad.iter().enumerate() {
            self.m[i] = beta1 * self.m[i] + (1.0 - beta1) * g;
            self.v[i] = beta2 * self.v[i] + (1.0 - beta2) * g * g;
            let m_hat = self.m[i] / bias_correction1;
            let v_hat = self.v[i] / bias_correction2;
            step[i] = -self.rate * m_hat / (v_hat.sqrt() + self.smooth);
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "adam_test.rs"]
mod tests;
