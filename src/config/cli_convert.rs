//! CLI to Config conversion utilities

use crate::config::cli::{self, Cli};
use crate::config::{Config, Mode};
use crate::{Error, Result};
use std::time::Duration;

/// Parse a rate string (e.g., "128", "10k", "2M", "1G") to chars/s
///
/// Suffixes are decimal: k = 10^3, M = 10^6, G = 10^9 (case-insensitive).
pub fn parse_rate(s: &str) -> Result<u64> {
    let s = s.trim();
    if s.is_empty() {
        return Err(Error::config("invalid rate: rate must be non-empty"));
    }

    let (num_str, multiplier) = match s.as_bytes()[s.len() - 1] {
        b'k' | b'K' => (&s[..s.len() - 1], 1_000u64),
        b'm' | b'M' => (&s[..s.len() - 1], 1_000_000),
        b'g' | b'G' => (&s[..s.len() - 1], 1_000_000_000),
        _ => (s, 1),
    };

    let base: u64 = num_str
        .parse()
        .map_err(|e| Error::config(format!("invalid rate {:?}: {}", s, e)))?;

    base.checked_mul(multiplier)
        .ok_or_else(|| Error::config(format!("invalid rate {:?}: value too large", s)))
}

/// Parse a duration string (e.g., "250ms", "1.5s", "5m", "1m30s") to a Duration
///
/// Units: ns, us (or µs), ms, s (sec), m (min), h (hr). A bare number is seconds.
pub fn parse_duration(s: &str) -> Result<Duration> {
    let s = s.trim().to_lowercase();
    if s.is_empty() {
        return Err(Error::config("invalid duration: must be non-empty"));
    }

    if let Ok(secs) = s.parse::<f64>() {
        return nanos_to_duration(secs * 1e9, &s);
    }

    let mut total_nanos = 0f64;
    let mut rest = s.as_str();
    while !rest.is_empty() {
        let num_end = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        if num_end == 0 {
            return Err(Error::config(format!("invalid duration format: {}", s)));
        }
        let value: f64 = rest[..num_end]
            .parse()
            .map_err(|_| Error::config(format!("invalid duration format: {}", s)))?;
        rest = &rest[num_end..];

        let unit_end = rest
            .find(|c: char| c.is_ascii_digit() || c == '.')
            .unwrap_or(rest.len());
        let unit_nanos = match &rest[..unit_end] {
            "ns" => 1.0,
            "us" | "µs" => 1e3,
            "ms" => 1e6,
            "s" | "sec" => 1e9,
            "m" | "min" => 60e9,
            "h" | "hr" => 3600e9,
            unit => {
                return Err(Error::config(format!(
                    "invalid duration {}: unknown unit {:?}",
                    s, unit
                )))
            }
        };
        total_nanos += value * unit_nanos;
        rest = &rest[unit_end..];
    }

    nanos_to_duration(total_nanos, &s)
}

fn nanos_to_duration(nanos: f64, original: &str) -> Result<Duration> {
    if !nanos.is_finite() || nanos < 0.0 || nanos > u64::MAX as f64 {
        return Err(Error::config(format!("invalid duration: {}", original)));
    }
    Ok(Duration::from_nanos(nanos.round() as u64))
}

/// Convert CLI ShapeMode to config Mode
pub fn convert_mode(cli_mode: cli::ShapeMode) -> Mode {
    match cli_mode {
        cli::ShapeMode::Logistic => Mode::Logistic,
        cli::ShapeMode::Ramp => Mode::Ramp,
    }
}

/// Override configuration values with the flags present on the command line
pub fn apply_cli(cli: &Cli, config: &mut Config) -> Result<()> {
    if let Some(ref rate) = cli.rate {
        config.peak_rate = parse_rate(rate)?;
    }
    if let Some(mode) = cli.mode {
        config.mode = convert_mode(mode);
    }
    if let Some(scale) = cli.scale {
        config.scale = scale;
    }
    if let Some(ref ramp) = cli.ramp_duration {
        config.ramp_duration = parse_duration(ramp)?;
    }
    if let Some(ref duration) = cli.duration {
        config.duration = parse_duration(duration)?;
    }
    if let Some(ref step) = cli.step_size {
        config.step = parse_duration(step)?;
    }
    if let Some(slice_len) = cli.slice_length {
        config.slice_len = slice_len;
    }
    if let Some(skips) = cli.skips {
        config.skips = skips;
    }
    if let Some(prob) = cli.skip_probability {
        config.skip_probability = prob;
    }
    if let Some(block_size) = cli.block_size {
        config.block_size = block_size;
    }
    if cli.seed.is_some() {
        config.seed = cli.seed;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_parse_rate_plain() {
        assert_eq!(parse_rate("5").unwrap(), 5);
        assert_eq!(parse_rate("128").unwrap(), 128);
    }

    #[test]
    fn test_parse_rate_suffixes() {
        assert_eq!(parse_rate("10k").unwrap(), 10_000);
        assert_eq!(parse_rate("10K").unwrap(), 10_000);
        assert_eq!(parse_rate("2M").unwrap(), 2_000_000);
        assert_eq!(parse_rate("2m").unwrap(), 2_000_000);
        assert_eq!(parse_rate("3G").unwrap(), 3_000_000_000);
    }

    #[test]
    fn test_parse_rate_errors() {
        assert!(parse_rate("").is_err());
        assert!(parse_rate("   ").is_err());
        assert!(parse_rate("k").is_err());
        assert!(parse_rate("fast").is_err());
        assert!(parse_rate("-5").is_err());
        assert!(parse_rate("1.5k").is_err());
        assert!(parse_rate("99999999999999G").is_err());
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("250ms").unwrap(), Duration::from_millis(250));
        assert_eq!(parse_duration("60s").unwrap(), Duration::from_secs(60));
        assert_eq!(parse_duration("60sec").unwrap(), Duration::from_secs(60));
        assert_eq!(parse_duration("5m").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration("5min").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_duration("100us").unwrap(), Duration::from_micros(100));
        assert_eq!(parse_duration("100µs").unwrap(), Duration::from_micros(100));
        assert_eq!(parse_duration("10ns").unwrap(), Duration::from_nanos(10));
    }

    #[test]
    fn test_parse_duration_bare_number_is_seconds() {
        assert_eq!(parse_duration("10").unwrap(), Duration::from_secs(10));
        assert_eq!(parse_duration("0.5").unwrap(), Duration::from_millis(500));
    }

    #[test]
    fn test_parse_duration_fractional_and_compound() {
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
        assert_eq!(parse_duration("1m30s").unwrap(), Duration::from_secs(90));
        assert_eq!(parse_duration("1h2m3s").unwrap(), Duration::from_secs(3723));
        assert_eq!(parse_duration("2S").unwrap(), Duration::from_secs(2));
    }

    #[test]
    fn test_parse_duration_errors() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("fast").is_err());
        assert!(parse_duration("-5s").is_err());
        assert!(parse_duration("5d").is_err());
        assert!(parse_duration("1m30").is_err());
        assert!(parse_duration("s").is_err());
    }

    #[test]
    fn test_apply_cli_only_touches_given_flags() {
        let cli = Cli::try_parse_from(["logburst", "--rate", "1k", "--step-size", "500ms"]).unwrap();
        let mut config = Config::default();
        apply_cli(&cli, &mut config).unwrap();

        assert_eq!(config.peak_rate, 1000);
        assert_eq!(config.step, Duration::from_millis(500));
        assert_eq!(config.mode, Mode::Logistic);
        assert_eq!(config.slice_len, 16);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_apply_cli_bad_rate() {
        let cli = Cli::try_parse_from(["logburst", "--rate", "lots"]).unwrap();
        let mut config = Config::default();
        assert!(apply_cli(&cli, &mut config).is_err());
    }

    #[test]
    fn test_convert_mode() {
        assert_eq!(convert_mode(cli::ShapeMode::Ramp), Mode::Ramp);
        assert_eq!(convert_mode(cli::ShapeMode::Logistic), Mode::Logistic);
    }
}
