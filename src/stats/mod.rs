//! Run statistics
//!
//! Counters collected by the emitter over one run. They are returned to the
//! caller when the run ends, logged as a summary, and can be written out as
//! JSON with `--stats-output`.

use crate::util::time::calculate_rate;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Counters for one run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RunStats {
    /// Steps that ticked before the run ended
    pub steps: u64,

    /// Steps in the active part of their slice
    pub active_steps: u64,

    /// Steps silenced by the skip schedule
    pub skipped_steps: u64,

    /// Slices whose skip draw was nonzero
    pub slices_with_skips: u64,

    /// Bytes written to the sink
    pub bytes_written: u64,

    /// Largest number of bytes written in one step
    pub peak_step_bytes: u64,

    /// Wall-clock run time in seconds
    pub elapsed_secs: f64,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an active step that wrote `bytes`
    #[inline]
    pub fn record_active(&mut self, bytes: u64) {
        self.steps += 1;
        self.active_steps += 1;
        self.bytes_written += bytes;
        self.peak_step_bytes = self.peak_step_bytes.max(bytes);
    }

    /// Record a silent step
    #[inline]
    pub fn record_skipped(&mut self) {
        self.steps += 1;
        self.skipped_steps += 1;
    }

    /// Record a slice boundary and its skip draw
    #[inline]
    pub fn record_slice(&mut self, skips: u64) {
        if skips > 0 {
            self.slices_with_skips += 1;
        }
    }

    pub fn set_elapsed(&mut self, elapsed: Duration) {
        self.elapsed_secs = elapsed.as_secs_f64();
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_secs_f64(self.elapsed_secs.max(0.0))
    }

    /// Average output rate over the run (chars/s)
    pub fn average_rate(&self) -> f64 {
        calculate_rate(self.bytes_written, self.elapsed())
    }

    /// Serialize as pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_steps() {
        let mut stats = RunStats::new();
        stats.record_active(100);
        stats.record_active(0);
        stats.record_active(250);
        stats.record_skipped();

        assert_eq!(stats.steps, 4);
        assert_eq!(stats.active_steps, 3);
        assert_eq!(stats.skipped_steps, 1);
        assert_eq!(stats.bytes_written, 350);
        assert_eq!(stats.peak_step_bytes, 250);
    }

    #[test]
    fn test_record_slice() {
        let mut stats = RunStats::new();
        stats.record_slice(0);
        stats.record_slice(3);
        stats.record_slice(20);
        assert_eq!(stats.slices_with_skips, 2);
    }

    #[test]
    fn test_average_rate() {
        let mut stats = RunStats::new();
        stats.record_active(1000);
        stats.set_elapsed(Duration::from_secs(4));
        assert_eq!(stats.average_rate(), 250.0);
    }

    #[test]
    fn test_average_rate_zero_elapsed() {
        let mut stats = RunStats::new();
        stats.record_active(1000);
        assert_eq!(stats.average_rate(), 0.0);
    }

    #[test]
    fn test_json_round_trip() {
        let mut stats = RunStats::new();
        stats.record_active(42);
        stats.record_skipped();
        stats.set_elapsed(Duration::from_millis(1500));

        let json = stats.to_json().unwrap();
        assert!(json.contains("\"bytes_written\": 42"));

        let parsed: RunStats = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, stats);
    }
}
