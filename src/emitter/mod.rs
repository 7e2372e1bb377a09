//! Timed emission loop
//!
//! The emitter drives the run on a fixed step grid. For every step it works out
//! how many characters to write, checks the skip schedule for the current
//! slice, and writes that many bytes from the buffer pool to the sink.
//!
//! # Loop
//!
//! 1. At the start of each slice (`step % slice_len == 0`) redraw the skip count
//! 2. Wait for the next step tick or the end of the run, whichever comes first;
//!    the end of the run wins a tie
//! 3. If the step is in the active part of its slice, write
//!    `floor(peak_rate * step_secs * fraction(step))` bytes
//! 4. Advance the step counter
//!
//! Any sink error stops the loop immediately and is returned to the caller.
//!
//! # Example
//!
//! ```no_run
//! use logburst::config::Config;
//! use logburst::emitter::Emitter;
//!
//! # async fn run() -> logburst::Result<()> {
//! let mut emitter = Emitter::new(Config::default())?;
//! let stats = emitter.run(&mut tokio::io::stdout()).await?;
//! println!("wrote {} bytes", stats.bytes_written);
//! # Ok(())
//! # }
//! ```

use crate::config::{validator, Config, POOL_SIZE};
use crate::shaper::{RateShaper, Shaper};
use crate::skip::{self, SkipSampler};
use crate::stats::RunStats;
use crate::util::buffer::RandomAlphabetPool;
use crate::Result;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256PlusPlus;
use tokio::io::{AsyncWrite, AsyncWriteExt};
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::{debug, info};

/// Timed output generator for one run
///
/// Owns the random number generator and threads it through every draw: pool
/// construction, peak-step selection and skip sampling. With a fixed seed the
/// byte content and the skip schedule are reproducible.
pub struct Emitter {
    config: Config,
    shaper: Shaper,
    sampler: SkipSampler,
    pool: RandomAlphabetPool,
    rng: Xoshiro256PlusPlus,
    chars_per_step: f64,
}

impl Emitter {
    /// Create an emitter, seeding the RNG from `config.seed` or from entropy
    pub fn new(config: Config) -> Result<Self> {
        let rng = match config.seed {
            Some(seed) => Xoshiro256PlusPlus::seed_from_u64(seed),
            None => Xoshiro256PlusPlus::from_entropy(),
        };
        Self::with_rng(config, rng)
    }

    /// Create an emitter that draws from `rng`
    ///
    /// The configuration is validated first; nothing is drawn from `rng` if
    /// validation fails.
    pub fn with_rng(config: Config, mut rng: Xoshiro256PlusPlus) -> Result<Self> {
        validator::validate_config(&config)?;

        let pool = RandomAlphabetPool::new(&mut rng, POOL_SIZE, config.block_size);
        let shaper = Shaper::from_config(&config, &mut rng);
        let sampler = SkipSampler::new(config.skips, config.skip_probability);
        let chars_per_step = config.chars_per_step();

        debug!(
            chars_per_step,
            total_steps = config.total_steps(),
            pool_size = pool.len(),
            "emitter ready"
        );

        Ok(Self {
            config,
            shaper,
            sampler,
            pool,
            rng,
            chars_per_step,
        })
    }

    pub fn shaper(&self) -> &Shaper {
        &self.shaper
    }

    /// Number of bytes to emit at `step` when the step is active
    #[inline]
    pub fn chars_for_step(&self, step: u64) -> usize {
        (self.chars_per_step * self.shaper.fraction(step)) as usize
    }

    /// Run until the configured duration elapses
    ///
    /// Writes to `sink` on every active step and flushes after each write.
    /// Returns the run statistics, or the first sink error.
    pub async fn run<W>(&mut self, sink: &mut W) -> Result<RunStats>
    where
        W: AsyncWrite + Unpin + ?Sized,
    {
        let slice_len = self.config.slice_len;
        let mut stats = RunStats::new();

        let start = Instant::now();
        let end = time::sleep_until(start + self.config.duration);
        tokio::pin!(end);

        // First tick completes immediately, so step 0 starts the run
        let mut steps = time::interval(self.config.step);
        steps.set_missed_tick_behavior(MissedTickBehavior::Skip);

        info!(
            mode = %self.config.mode,
            peak_rate = self.config.peak_rate,
            duration = ?self.config.duration,
            step = ?self.config.step,
            "emission started"
        );

        let mut skips = 0u64;
        let mut step = 0u64;
        loop {
            let slice_idx = step % slice_len;
            if slice_idx == 0 {
                skips = self.sampler.sample(&mut self.rng);
                stats.record_slice(skips);
                if skips > 0 {
                    debug!(step, skips, "slice ends in silence");
                }
            }

            tokio::select! {
                biased;
                _ = &mut end => break,
                _ = steps.tick() => {}
            }

            if skip::is_active(slice_idx, slice_len, skips) {
                let n = self.chars_for_step(step);
                if n > 0 {
                    self.pool.write_n(&mut self.rng, sink, n).await?;
                    sink.flush().await?;
                }
                stats.record_active(n as u64);
            } else {
                stats.record_skipped();
            }

            step += 1;
        }

        stats.set_elapsed(start.elapsed());
        debug!(steps = stats.steps, bytes = stats.bytes_written, "emission finished");

        Ok(stats)
    }
}
