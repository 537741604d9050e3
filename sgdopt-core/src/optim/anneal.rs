use log::debug;

use crate::error::SgdError;
use crate::optim::schedule::InverseTimeDecay;
use crate::optim::stepper_trait::{check_positive, check_step_shapes, Stepper};
use crate::utils::or_default;

/// Plain gradient descent with an annealed step size.
///
/// ```text
/// η    = a / (b + t)
/// step = -η * df/dx
/// ```
#[derive(Debug, Clone, Default)]
pub struct Anneal {
    /// Step-size scale `a` (default: 1 when left at 0).
    pub size: f64,
    /// Step-size offset `b` (default: 1 when left at 0).
    pub offset: f64,

    schedule: InverseTimeDecay,
    dimension: Option<usize>,
}

impl Anneal {
    pub fn new(size: f64, offset: f64) -> Self {
        Anneal {
            size,
            offset,
            ..Default::default()
        }
    }
}

impl Stepper for Anneal {
    fn name(&self) -> &'static str {
        "anneal"
    }

    fn init(&mut self, dimension: usize) -> Result<(), SgdError> {
        let size = or_default(self.size, 1.0);
        let offset = or_default(self.offset, 1.0);
        check_positive("anneal size", size)?;
        check_positive("anneal offset", offset)?;
        self.schedule = InverseTimeDecay::new(size, offset);
        self.dimension = Some(dimension);
        debug!("Anneal: init dimension={}, size={}, offset={}", dimension, size, offset);
        Ok(())
    }

    fn step(&mut self, step: &mut [f64], grad: &[f64]) -> Result<(), SgdError> {
        check_step_shapes(self.name(), self.dimension, step, grad)?;
        let eta = self.schedule.rate();
        for (s, g) in step.iter_mut().zip(grad) {
            *s = -eta * g;
        }
        self.schedule.advance();
        Ok(())
    }
}

#[cfg(test)]
#[path = "anneal_test.rs"]
mod tests;
