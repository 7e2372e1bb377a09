//! logburst CLI entry point

use anyhow::{Context, Result};
use logburst::config::{self, cli::Cli, Config};
use logburst::util::time::{format_duration, format_rate};
use logburst::{Emitter, RunStats};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse_args();
    init_tracing(cli.debug);

    let config = config::load(&cli).context("Configuration validation failed")?;

    if cli.dry_run {
        println!("{}", config);
        println!();
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    let stats = run(config)?;
    print_summary(&stats);

    if let Some(ref path) = cli.stats_output {
        let json = stats.to_json().context("Failed to serialize run statistics")?;
        std::fs::write(path, json)
            .with_context(|| format!("Failed to write stats output: {}", path.display()))?;
        info!("Run statistics written to {}", path.display());
    }

    Ok(())
}

/// Run the emitter against stdout on a single-threaded runtime
fn run(config: Config) -> Result<RunStats> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .enable_io()
        .build()
        .context("Failed to create tokio runtime")?;

    runtime.block_on(async {
        let mut emitter = Emitter::new(config)?;
        let mut stdout = tokio::io::stdout();
        emitter.run(&mut stdout).await
    })
    .context("Emission aborted")
}

/// Log output goes to stderr; stdout carries the generated text
fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn print_summary(stats: &RunStats) {
    info!(
        steps = stats.steps,
        active = stats.active_steps,
        skipped = stats.skipped_steps,
        slices_with_skips = stats.slices_with_skips,
        "Run complete: {} chars in {} ({} chars/s average, {} peak per step)",
        stats.bytes_written,
        format_duration(stats.elapsed()),
        format_rate(stats.average_rate()),
        stats.peak_step_bytes
    );
}
