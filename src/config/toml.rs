//! TOML configuration file parsing
//!
//! Keys mirror the long CLI flags in snake_case:
//!
//! ```toml
//! rate = "10k"
//! mode = "ramp"
//! duration = "5m"
//! step_size = "250ms"
//! ramp_duration = "30s"
//! slice_length = 16
//! skips = 2
//! skip_probability = 0.1
//! block_size = 4096
//! seed = 42
//! ```

use super::cli_convert::{parse_duration, parse_rate};
use super::{Config, Mode};
use crate::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Rate given either as a bare integer or as a suffixed string
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum RateValue {
    Number(u64),
    Text(String),
}

impl RateValue {
    fn resolve(&self) -> Result<u64> {
        match self {
            RateValue::Number(n) => Ok(*n),
            RateValue::Text(s) => parse_rate(s),
        }
    }
}

/// Contents of a TOML configuration file; every key is optional
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub rate: Option<RateValue>,
    pub mode: Option<Mode>,
    pub scale: Option<f64>,
    pub ramp_duration: Option<String>,
    pub duration: Option<String>,
    pub step_size: Option<String>,
    pub slice_length: Option<u64>,
    pub skips: Option<u64>,
    pub skip_probability: Option<f64>,
    pub block_size: Option<usize>,
    pub seed: Option<u64>,
}

impl FileConfig {
    /// Override configuration values with the keys present in the file
    pub fn apply(&self, config: &mut Config) -> Result<()> {
        if let Some(ref rate) = self.rate {
            config.peak_rate = rate.resolve()?;
        }
        if let Some(mode) = self.mode {
            config.mode = mode;
        }
        if let Some(scale) = self.scale {
            config.scale = scale;
        }
        if let Some(ref ramp) = self.ramp_duration {
            config.ramp_duration = parse_duration(ramp)?;
        }
        if let Some(ref duration) = self.duration {
            config.duration = parse_duration(duration)?;
        }
        if let Some(ref step) = self.step_size {
            config.step = parse_duration(step)?;
        }
        if let Some(slice_len) = self.slice_length {
            config.slice_len = slice_len;
        }
        if let Some(skips) = self.skips {
            config.skips = skips;
        }
        if let Some(prob) = self.skip_probability {
            config.skip_probability = prob;
        }
        if let Some(block_size) = self.block_size {
            config.block_size = block_size;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        Ok(())
    }
}

/// Parse TOML configuration file
pub fn parse_toml_file(path: &Path) -> Result<FileConfig> {
    let contents = fs::read_to_string(path).map_err(|e| {
        Error::config(format!("failed to read config file {}: {}", path.display(), e))
    })?;

    parse_toml_string(&contents)
        .map_err(|e| Error::config(format!("failed to parse config file {}: {}", path.display(), e)))
}

/// Parse TOML configuration from string
pub fn parse_toml_string(contents: &str) -> Result<FileConfig> {
    ::toml::from_str(contents).map_err(|e| Error::config(format!("invalid TOML configuration: {}", e)))
}
