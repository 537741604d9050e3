/// Step tolerance used when [`Settings::step_tolerance`] is left at zero.
pub const DEFAULT_STEP_TOLERANCE: f64 = 1e-8;

/// Stopping configuration for [`minimize`](crate::driver::minimize).
///
/// The zero value is a usable configuration: unbounded iterations and the
/// default step tolerance.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Settings {
    /// Maximum number of stepper calls. `0` means unbounded.
    pub max_iterations: usize,
    /// Stop once the Euclidean norm of a proposed step falls below this value.
    ///
    /// `0` selects [`DEFAULT_STEP_TOLERANCE`]; a negative value disables the
    /// check so only `max_iterations` (or divergence) ends the run.
    pub step_tolerance: f64,
}

impl Settings {
    pub fn new(max_iterations: usize, step_tolerance: f64) -> Self {
        Settings {
            max_iterations,
            step_tolerance,
        }
    }

    /// Returns a copy with zero-valued fields replaced by their defaults.
    pub fn resolved(&self) -> Settings {
        let step_tolerance = if self.step_tolerance == 0.0 {
            DEFAULT_STEP_TOLERANCE
        } else {
            self.step_tolerance
        };
        Settings {
            max_iterations: self.max_iterations,
            step_tolerance,
        }
    }
}
