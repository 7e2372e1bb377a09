//! Linear ramp
//!
//! Output climbs linearly from zero at step 0 to the full peak rate at
//! `peak_step`, then holds there for the rest of the run.

use super::RateShaper;

/// Linear ramp to the peak rate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RampShaper {
    peak_step: u64,
}

impl RampShaper {
    /// Create a ramp that reaches the peak rate at `peak_step`
    ///
    /// A `peak_step` of zero means the peak rate applies from the first step.
    pub fn new(peak_step: u64) -> Self {
        Self { peak_step }
    }

    /// Step at which the full rate is reached
    pub fn peak_step(&self) -> u64 {
        self.peak_step
    }
}

impl RateShaper for RampShaper {
    #[inline]
    fn fraction(&self, step: u64) -> f64 {
        if step < self.peak_step {
            step as f64 / self.peak_step as f64
        } else {
            1.0
        }
    }
}
