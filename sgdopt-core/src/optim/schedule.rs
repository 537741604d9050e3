/// Step size that decays as the inverse of elapsed iterations.
///
/// ```text
/// η_t = size / (offset + t)
/// ```
///
/// Shared by [`Anneal`](super::Anneal) and [`Momentum`](super::Momentum).
#[derive(Debug, Clone, PartialEq)]
pub struct InverseTimeDecay {
    size: f64,
    offset: f64,
    time: f64,
}

impl InverseTimeDecay {
    pub fn new(size: f64, offset: f64) -> Self {
        InverseTimeDecay {
            size,
            offset,
            time: 0.0,
        }
    }

    /// Step size for the current iteration.
    pub fn rate(&self) -> f64 {
        self.size / (self.offset + self.time)
    }

    /// Moves on to the next iteration.
    pub fn advance(&mut self) {
        self.time += 1.0;
    }

    /// Rewinds to iteration zero.
    pub fn reset(&mut self) {
        self.time = 0.0;
    }

    pub fn time(&self) -> f64 {
        self.time
    }
}

impl Default for InverseTimeDecay {
    fn default() -> Self {
        InverseTimeDecay::new(1.0, 1.0)
    }
}
