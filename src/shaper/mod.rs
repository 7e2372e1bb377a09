//! Rate shaping
//!
//! A rate shaper maps a discrete time step to the fraction of the peak rate
//! that should be emitted during that step. The emitter multiplies the
//! per-step character budget by this fraction.
//!
//! # Shapes
//!
//! - **Ramp**: Linear climb from zero to the peak rate, then constant
//! - **Logistic**: Smooth rise and fall around a randomly chosen peak step
//!
//! # Example
//!
//! ```
//! use logburst::shaper::{RateShaper, ramp::RampShaper};
//!
//! let shaper = RampShaper::new(4);
//! assert_eq!(shaper.fraction(0), 0.0);
//! assert_eq!(shaper.fraction(2), 0.5);
//! assert_eq!(shaper.fraction(10), 1.0);
//! ```

pub mod logistic;
pub mod ramp;

use crate::config::{Config, Mode};
use logistic::LogisticShaper;
use rand::Rng;
use ramp::RampShaper;
use tracing::info;

/// Fraction of the peak rate to emit at a given step
///
/// Implementations are immutable after construction and must return a value in
/// [0.0, 1.0] for every step.
pub trait RateShaper: Send {
    /// Fraction (0.0-1.0) of the peak rate for `step`
    fn fraction(&self, step: u64) -> f64;
}

/// Shaper selected from the configured mode
#[derive(Debug, Clone, PartialEq)]
pub enum Shaper {
    Ramp(RampShaper),
    Logistic(LogisticShaper),
}

impl Shaper {
    /// Build the shaper for `config`
    ///
    /// In logistic mode the peak step is drawn from `rng` uniformly over the
    /// steps of the run. The configuration must already be validated.
    pub fn from_config<R: Rng + ?Sized>(config: &Config, rng: &mut R) -> Self {
        match config.mode {
            Mode::Ramp => {
                let shaper = RampShaper::new(config.ramp_peak_step());
                info!(peak_step = shaper.peak_step(), "ramp shaper ready");
                Shaper::Ramp(shaper)
            }
            Mode::Logistic => {
                let shaper = LogisticShaper::random(rng, config.total_steps(), config.scale);
                info!(peak_step = shaper.mu(), scale = shaper.scale(), "logistic shaper ready");
                Shaper::Logistic(shaper)
            }
        }
    }
}

impl RateShaper for Shaper {
    #[inline]
    fn fraction(&self, step: u64) -> f64 {
        match self {
            Shaper::Ramp(s) => s.fraction(step),
            Shaper::Logistic(s) => s.fraction(step),
        }
    }
}
