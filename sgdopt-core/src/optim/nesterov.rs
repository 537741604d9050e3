use log::debug;

use crate::error::SgdError;
use crate::optim::stepper_trait::{check_positive, check_step_shapes, Stepper};
use crate::utils::{or_default, resize_zero};

/// Nesterov's accelerated gradient with the `1 - 3/(t+5)` momentum schedule.
///
/// ```text
/// μ      = 1 - 3 / (t + 5)
/// v_t    = μ * v_{t-1} - β * df/dx
/// step_t = -μ * v_{t-1} + (1 + μ) * v_t
/// ```
///
/// See <https://arxiv.org/abs/1503.01243> (eq. 1).
#[derive(Debug, Clone, Default)]
pub struct Nesterov {
    /// Step scale `β` (default: 0.01 when left at 0).
    pub beta: f64,

    rate: f64,
    time: f64,
    velocity: Vec<f64>,
    prev_velocity: Vec<f64>,
    dimension: Option<usize>,
}

impl Nesterov {
    pub fn new(beta: f64) -> Self {
        Nesterov {
            beta,
            ..Default::default()
        }
    }
}

impl Stepper for Nesterov {
    fn name(&self) -> &'static str {
        "nesterov"
    }

    fn init(&mut self, dimension: usize) -> Result<(), SgdError> {
        let rate = or_default(self.beta, 0.01);
        check_positive("nesterov beta", rate)?;
        self.rate = rate;
        self.time = 0.0;
        self.velocity = resize_zero(std::mem::take(&mut self.velocity), dimension);
        self.prev_velocity = resize_zero(std::mem::take(&mut self.prev_velocity), dimension);
        self.dimension = Some(dimension);
        debug!("Nesterov: init dimension={}, beta={}", dimension, rate);
        Ok(())
    }

    fn step(&mut self, step: &mut [f64], grad: &[f64]) -> Result<(), SgdError> {
        check_step_shapes(self.name(), self.dimension, step, grad)?;
        let mu = 1.0 - 3.0 / (self.time + 5.0);
        self.prev_velocity.copy_from_slice(&self.velocity);
        for (i, g) in grad.iter().enumerate() {
            let prev = self.prev_velocity[i];
            self.velocity[i] = mu * prev - self.rate * g;
            step[i] = -mu * prev + (1.0 + mu) * self.velocity[i];
        }
        self.time += 1.0;
        Ok(())
    }
}

#[cfg(test)]
#[path = "nesterov_test.rs"]
mod tests;
