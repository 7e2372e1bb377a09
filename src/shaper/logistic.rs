//! Logistic bell curve
//!
//! Uses the logistic probability density, rescaled so that its value at the
//! peak step is exactly 1.0:
//!
//! ```text
//! a = exp(-(step - mu) / scale)
//! f = 4 * scale * a / (scale * (1 + a)^2)
//! ```
//!
//! The curve is symmetric about `mu`, so it is evaluated on the distance from
//! the peak. That keeps `a` in (0, 1], which makes the result exactly
//! symmetric and avoids `inf / inf` far before the peak.

use super::RateShaper;
use rand::Rng;

/// Logistic rise and fall around a peak step
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LogisticShaper {
    /// Step with the full peak rate
    mu: u64,

    /// Spread of the curve, in steps
    scale: f64,
}

impl LogisticShaper {
    /// Create a logistic shaper peaking at `mu`
    ///
    /// # Panics
    ///
    /// Panics if scale is not a positive finite number.
    pub fn new(mu: u64, scale: f64) -> Self {
        assert!(scale.is_finite() && scale > 0.0, "Scale must be positive");
        Self { mu, scale }
    }

    /// Create a logistic shaper with its peak drawn uniformly from [0, total_steps)
    ///
    /// # Panics
    ///
    /// Panics if scale is not a positive finite number.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, total_steps: u64, scale: f64) -> Self {
        let mu = if total_steps == 0 {
            0
        } else {
            rng.gen_range(0..total_steps)
        };
        Self::new(mu, scale)
    }

    /// Peak step
    pub fn mu(&self) -> u64 {
        self.mu
    }

    /// Spread of the curve
    pub fn scale(&self) -> f64 {
        self.scale
    }
}

impl RateShaper for LogisticShaper {
    #[inline]
    fn fraction(&self, step: u64) -> f64 {
        let distance = step.abs_diff(self.mu) as f64;
        let a = (-distance / self.scale).exp();
        let b = self.scale * (1.0 + a) * (1.0 + a);
        4.0 * self.scale * a / b
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_logistic_peak_is_one() {
        for scale in [0.5, 1.0, 3.0, 25.0, 1000.0] {
            let shaper = LogisticShaper::new(120, scale);
            assert_eq!(shaper.fraction(120), 1.0, "scale {}", scale);
        }
    }

    #[test]
    fn test_logistic_bounds() {
        let shaper = LogisticShaper::new(100, 25.0);
        for step in 0..10_000 {
            let f = shaper.fraction(step);
            assert!((0.0..=1.0).contains(&f), "fraction {} out of range at step {}", f, step);
        }
    }

    #[test]
    fn test_logistic_far_from_peak() {
        // Large distances underflow to zero instead of producing NaN
        let shaper = LogisticShaper::new(5000, 1.0);
        assert_eq!(shaper.fraction(0), 0.0);
        assert_eq!(shaper.fraction(u64::MAX), 0.0);
    }

    #[test]
    fn test_logistic_symmetry() {
        let shaper = LogisticShaper::new(50, 7.0);
        for d in 0..=50 {
            assert_eq!(shaper.fraction(50 + d), shaper.fraction(50 - d), "offset {}", d);
        }
    }

    #[test]
    fn test_logistic_rises_then_falls() {
        let shaper = LogisticShaper::new(30, 5.0);
        for step in 1..=30 {
            assert!(shaper.fraction(step) > shaper.fraction(step - 1));
        }
        for step in 31..60 {
            assert!(shaper.fraction(step) < shaper.fraction(step - 1));
        }
    }

    #[test]
    fn test_logistic_matches_density_formula() {
        let (mu, scale) = (10u64, 4.0f64);
        let shaper = LogisticShaper::new(mu, scale);
        for step in [0u64, 3, 9, 10, 11, 25] {
            let a = (-(step as f64 - mu as f64) / scale).exp();
            let expected = 4.0 * scale * a / (scale * (1.0 + a) * (1.0 + a));
            assert!((shaper.fraction(step) - expected).abs() < 1e-12, "step {}", step);
        }
    }

    #[test]
    fn test_logistic_random_peak_in_range() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        for _ in 0..1000 {
            let shaper = LogisticShaper::random(&mut rng, 240, 25.0);
            assert!(shaper.mu() < 240);
        }
    }

    #[test]
    fn test_logistic_random_single_step() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(1);
        assert_eq!(LogisticShaper::random(&mut rng, 1, 25.0).mu(), 0);
    }

    #[test]
    #[should_panic(expected = "Scale must be positive")]
    fn test_logistic_invalid_scale() {
        let _ = LogisticShaper::new(0, 0.0);
    }
}
