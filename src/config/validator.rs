//! Configuration validation

use super::{Config, Mode};
use crate::{Error, Result};
use tracing::warn;

/// Validate complete configuration
///
/// Checks every relationship the emitter relies on. Runs before any output is
/// produced, so a failure here never leaves a partial run behind.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_rate(config)?;
    validate_timing(config)?;
    validate_skips(config)?;
    validate_shape(config)?;

    if config.block_size == 0 {
        return Err(Error::config("invalid block size: must be greater than zero"));
    }
    if config.block_size == 1 {
        warn!("block size 1 produces output made only of newlines");
    }

    Ok(())
}

fn validate_rate(config: &Config) -> Result<()> {
    if config.peak_rate == 0 {
        return Err(Error::config("invalid rate: must be greater than zero"));
    }
    Ok(())
}

fn validate_timing(config: &Config) -> Result<()> {
    if config.step.is_zero() {
        return Err(Error::config("invalid step size: must be greater than zero"));
    }
    if config.step > config.duration {
        return Err(Error::config(format!(
            "invalid step size: must not exceed duration ({:?} > {:?})",
            config.step, config.duration
        )));
    }
    Ok(())
}

fn validate_skips(config: &Config) -> Result<()> {
    if config.slice_len == 0 {
        return Err(Error::config("invalid slice length: must be at least 1"));
    }
    if config.skips > config.slice_len {
        return Err(Error::config(format!(
            "invalid skips: must not exceed slice length ({} > {})",
            config.skips, config.slice_len
        )));
    }
    if !(0.0..=1.0).contains(&config.skip_probability) {
        return Err(Error::config(format!(
            "invalid skip probability: must be in [0.0, 1.0], got {}",
            config.skip_probability
        )));
    }
    Ok(())
}

fn validate_shape(config: &Config) -> Result<()> {
    match config.mode {
        Mode::Logistic => {
            if !(config.scale.is_finite() && config.scale > 0.0) {
                return Err(Error::config(format!(
                    "invalid scale: must be greater than zero, got {}",
                    config.scale
                )));
            }
        }
        Mode::Ramp => {
            if config.ramp_duration < config.step {
                warn!(
                    "ramp duration {:?} is shorter than one step; output starts at the peak rate",
                    config.ramp_duration
                );
            }
        }
    }
    Ok(())
}
