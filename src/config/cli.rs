//! CLI argument parsing using clap
//!
//! Every tuning flag is optional so that values from a `--config` file are only
//! overridden when the flag is actually given.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// logburst - bursty random log output generator
#[derive(Parser, Debug)]
#[command(name = "logburst")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === Rate Options ===
    /// Peak character rate in chars/s, with optional k/M/G suffix [default: 128]
    #[arg(short = 'r', long)]
    pub rate: Option<String>,

    /// Shape of the output rate over time [default: logistic]
    #[arg(short = 'm', long, value_enum)]
    pub mode: Option<ShapeMode>,

    /// Scale factor for the output distribution; only used with --mode=logistic [default: 25]
    #[arg(long)]
    pub scale: Option<f64>,

    /// Time taken to reach the peak rate; only used with --mode=ramp [default: 10s]
    #[arg(long)]
    pub ramp_duration: Option<String>,

    // === Timing Options ===
    /// Total run time (e.g., 60s, 5m, 1m30s) [default: 60s]
    #[arg(short = 'd', long)]
    pub duration: Option<String>,

    /// Length of each time step (e.g., 250ms, 1s) [default: 250ms]
    #[arg(long)]
    pub step_size: Option<String>,

    // === Skip Options ===
    /// Number of time steps per slice [default: 16]
    #[arg(long)]
    pub slice_length: Option<u64>,

    /// Expected number of time steps with no output per slice [default: 2]
    #[arg(long)]
    pub skips: Option<u64>,

    /// Probability that a given slice will contain skips [default: 0]
    #[arg(long)]
    pub skip_probability: Option<f64>,

    // === Output Options ===
    /// Maximum number of characters printed in one line/operation [default: 4096]
    #[arg(short = 'b', long)]
    pub block_size: Option<usize>,

    /// Write a JSON run summary to this path when the run ends
    #[arg(long)]
    pub stats_output: Option<PathBuf>,

    // === Runtime Options ===
    /// Seed for the random number generator (reproducible output)
    #[arg(long, env = "LOGBURST_SEED")]
    pub seed: Option<u64>,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Dry run - validate configuration without emitting anything
    #[arg(long)]
    pub dry_run: bool,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub debug: bool,
}

/// Rate shape
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ShapeMode {
    /// Bell curve around a randomly chosen peak
    Logistic,
    /// Linear climb to the peak rate, then constant
    Ramp,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_flags_leaves_everything_unset() {
        let cli = Cli::try_parse_from(["logburst"]).unwrap();
        assert!(cli.rate.is_none());
        assert!(cli.mode.is_none());
        assert!(cli.duration.is_none());
        assert!(!cli.dry_run);
        assert!(!cli.debug);
    }

    #[test]
    fn test_parse_all_flags() {
        let cli = Cli::try_parse_from([
            "logburst",
            "--rate", "1M",
            "--mode", "ramp",
            "--scale", "12.5",
            "--ramp-duration", "30s",
            "--duration", "2m",
            "--step-size", "100ms",
            "--slice-length", "10",
            "--skips", "3",
            "--skip-probability", "0.25",
            "--block-size", "512",
            "--seed", "99",
            "--dry-run",
        ])
        .unwrap();

        assert_eq!(cli.rate.as_deref(), Some("1M"));
        assert_eq!(cli.mode, Some(ShapeMode::Ramp));
        assert_eq!(cli.scale, Some(12.5));
        assert_eq!(cli.ramp_duration.as_deref(), Some("30s"));
        assert_eq!(cli.duration.as_deref(), Some("2m"));
        assert_eq!(cli.step_size.as_deref(), Some("100ms"));
        assert_eq!(cli.slice_length, Some(10));
        assert_eq!(cli.skips, Some(3));
        assert_eq!(cli.skip_probability, Some(0.25));
        assert_eq!(cli.block_size, Some(512));
        assert_eq!(cli.seed, Some(99));
        assert!(cli.dry_run);
    }

    #[test]
    fn test_rejects_unknown_mode() {
        assert!(Cli::try_parse_from(["logburst", "--mode", "sine"]).is_err());
    }

    #[test]
    fn test_rejects_negative_skips() {
        assert!(Cli::try_parse_from(["logburst", "--skips", "-1"]).is_err());
    }
}
