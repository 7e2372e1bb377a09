//! Skip sampling
//!
//! Once per slice the emitter asks how many trailing steps of the slice should
//! be silent. A slice has skips with probability `skip_probability`; when it
//! does, the count is drawn from a Poisson distribution whose mean is the
//! expected number of skips.
//!
//! The draw is not clamped to the slice length. A count at or above the slice
//! length silences the rest of the slice.

use rand::Rng;

/// Per-slice skip decision parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipSampler {
    expected_skips: u64,
    skip_probability: f64,
}

impl SkipSampler {
    pub fn new(expected_skips: u64, skip_probability: f64) -> Self {
        Self {
            expected_skips,
            skip_probability,
        }
    }

    /// Draw the skip count for the next slice
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> u64 {
        sample(rng, self.expected_skips, self.skip_probability)
    }
}

/// Draw a skip count
///
/// Returns 0 if `expected_skips` is 0, or with probability
/// `1 - skip_probability`. Otherwise returns a Poisson(`expected_skips`) sample
/// using Knuth's multiplicative method: multiply uniform draws together until
/// the product falls to `exp(-expected_skips)` or below.
pub fn sample<R: Rng + ?Sized>(rng: &mut R, expected_skips: u64, skip_probability: f64) -> u64 {
    if expected_skips == 0 || rng.gen::<f64>() >= skip_probability {
        return 0;
    }

    let limit = (-(expected_skips as f64)).exp();
    let mut k = 0u64;
    let mut p = 1.0f64;
    loop {
        p *= rng.gen::<f64>();
        if p <= limit {
            return k;
        }
        k += 1;
    }
}

/// Whether a step produces output given its position in the slice
///
/// The last `skips` steps of each slice are silent. When `skips` reaches the
/// slice length, the whole slice is silent.
#[inline]
pub fn is_active(slice_idx: u64, slice_len: u64, skips: u64) -> bool {
    skips < slice_len && slice_idx < slice_len - skips
}
