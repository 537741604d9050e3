use log::debug;

use crate::error::SgdError;
use crate::optim::schedule::InverseTimeDecay;
use crate::optim::stepper_trait::{check_decay, check_positive, check_step_shapes, Stepper};
use crate::utils::{or_default, resize_zero};

/// Heavy-ball momentum with an annealed step size.
///
/// ```text
/// η      = a / (b + t)
/// v_t    = γ * v_{t-1} - η * df/dx
/// step_t = v_t
/// ```
#[derive(Debug, Clone, Default)]
pub struct Momentum {
    /// Step-size scale `a` (default: 1 when left at 0).
    pub size: f64,
    /// Step-size offset `b` (default: 1 when left at 0).
    pub offset: f64,
    /// Momentum decay `γ` (default: 0.9 when left at 0).
    pub momentum: f64,

    schedule: InverseTimeDecay,
    decay: f64,
    velocity: Vec<f64>,
    dimension: Option<usize>,
}

impl Momentum {
    pub fn new(size: f64, offset: f64, momentum: f64) -> Self {
        Momentum {
            size,
            offset,
            momentum,
            ..Default::default()
        }
    }
}

impl Stepper for Momentum {
    fn name(&self) -> &'static str {
        "momentum"
    }

    fn init(&mut self, dimension: usize) -> Result<(), SgdError> {
        let size = or_default(self.size, 1.0);
        let offset = or_default(self.offset, 1.0);
        let decay = or_default(self.momentum, 0.9);
        check_positive("momentum size", size)?;
        check_positive("momentum offset", offset)?;
        check_decay("momentum", decay)?;

        self.schedule = InverseTimeDecay::new(size, offset);
        self.decay = decay;
        self.velocity = resize_zero(std::mem::take(&mut self.velocity), dimension);
        self.dimension = Some(dimension);
        debug!(
            "Momentum: init dimension={}, size={}, offset={}, momentum={}",
            dimension, size, offset, decay
        );
        Ok(())
    }

    fn step(&mut self, step: &mut [f64], grad: &[f64]) -> Result<(), SgdError> {
        check_step_shapes(self.name(), self.dimension, step, grad)?;
        let eta = self.schedule.rate();
        for ((v, s), g) in self.velocity.iter_mut().zip(step.iter_mut()).zip(grad) {
            *v = self.decay * *v - eta * g;
            *s = *v;
        }
        self.schedule.advance();
        Ok(())
    }
}

#[cfg(test)]
#[path = "momentum_test.rs"]
mod tests;
