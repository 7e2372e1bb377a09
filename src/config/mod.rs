//! Configuration module
//!
//! Handles CLI argument parsing, TOML configuration files, and validation.
//!
//! Values are resolved in order of precedence: command-line flag, then the TOML
//! file given with `--config`, then the built-in default.

pub mod cli;
pub mod cli_convert;
pub mod toml;
pub mod validator;

use crate::util::time::format_duration;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Number of pre-generated buffers in the output pool
pub const POOL_SIZE: usize = 32;

/// Time-domain shape of the output rate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Bell curve centered on a random peak step
    #[default]
    Logistic,
    /// Linear climb to the peak rate, then constant
    Ramp,
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Mode::Logistic => write!(f, "logistic"),
            Mode::Ramp => write!(f, "ramp"),
        }
    }
}

/// Complete generator configuration
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Peak character rate (chars/s)
    pub peak_rate: u64,
    /// Rate shape
    pub mode: Mode,
    /// Length of one time step
    pub step: Duration,
    /// Total run time
    pub duration: Duration,
    /// Steps per skip-decision slice
    pub slice_len: u64,
    /// Expected number of silent steps in a slice that has skips
    pub skips: u64,
    /// Probability that a slice contains skips (0.0-1.0)
    pub skip_probability: f64,
    /// Spread of the logistic curve, in steps
    pub scale: f64,
    /// Time taken to reach the peak rate in ramp mode
    pub ramp_duration: Duration,
    /// Bytes per pool buffer (and the longest line emitted)
    pub block_size: usize,
    /// RNG seed for reproducible runs
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            peak_rate: 128,
            mode: Mode::Logistic,
            step: Duration::from_millis(250),
            duration: Duration::from_secs(60),
            slice_len: 16,
            skips: 2,
            skip_probability: 0.0,
            scale: 25.0,
            ramp_duration: Duration::from_secs(10),
            block_size: 4096,
            seed: None,
        }
    }
}

impl Config {
    /// Number of whole steps that fit in the run
    pub fn total_steps(&self) -> u64 {
        steps_in(self.duration, self.step)
    }

    /// Step at which the ramp reaches the peak rate
    pub fn ramp_peak_step(&self) -> u64 {
        steps_in(self.ramp_duration, self.step)
    }

    /// Characters emitted in one step at the peak rate
    pub fn chars_per_step(&self) -> f64 {
        self.peak_rate as f64 * self.step.as_secs_f64()
    }
}

fn steps_in(span: Duration, step: Duration) -> u64 {
    if step.is_zero() {
        return 0;
    }
    (span.as_nanos() / step.as_nanos()) as u64
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Configuration:")?;
        writeln!(f, "  Peak rate:        {} chars/s", self.peak_rate)?;
        writeln!(f, "  Mode:             {}", self.mode)?;
        writeln!(f, "  Duration:         {}", format_duration(self.duration))?;
        writeln!(f, "  Step size:        {}", format_duration(self.step))?;
        writeln!(f, "  Slice length:     {} steps", self.slice_len)?;
        writeln!(f, "  Skips:            {} (probability {})", self.skips, self.skip_probability)?;
        match self.mode {
            Mode::Logistic => writeln!(f, "  Scale:            {}", self.scale)?,
            Mode::Ramp => writeln!(f, "  Ramp duration:    {}", format_duration(self.ramp_duration))?,
        }
        writeln!(f, "  Block size:       {} bytes", self.block_size)?;
        match self.seed {
            Some(seed) => write!(f, "  Seed:             {}", seed),
            None => write!(f, "  Seed:             (entropy)"),
        }
    }
}

/// Resolve the final configuration from CLI arguments and an optional TOML file
///
/// The result has been validated and is ready to hand to the emitter.
pub fn load(cli: &cli::Cli) -> Result<Config> {
    let mut config = Config::default();

    if let Some(ref path) = cli.config {
        self::toml::parse_toml_file(path)?.apply(&mut config)?;
    }

    cli_convert::apply_cli(cli, &mut config)?;
    validator::validate_config(&config)?;

    Ok(config)
}
