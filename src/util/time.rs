//! Timing and rate formatting utilities

use std::time::Duration;

const DURATION_UNITS: [(u128, &str); 3] = [(1_000_000_000, "s"), (1_000_000, "ms"), (1_000, "us")];

const RATE_UNITS: [(f64, &str); 3] = [(1e9, "G"), (1e6, "M"), (1e3, "K")];

/// Format a duration with two decimals in the largest unit that fits
///
/// Sub-microsecond values are printed as whole nanoseconds.
pub fn format_duration(duration: Duration) -> String {
    let nanos = duration.as_nanos();
    for (scale, unit) in DURATION_UNITS {
        if nanos >= scale {
            return format!("{:.2}{}", nanos as f64 / scale as f64, unit);
        }
    }
    format!("{}ns", nanos)
}

/// Format a chars/s rate with a decimal K/M/G suffix
///
/// ```
/// use logburst::util::time::format_rate;
///
/// // --rate 2M at its peak
/// assert_eq!(format_rate(2_000_000.0), "2.00M");
/// // default --rate 128
/// assert_eq!(format_rate(128.0), "128");
/// ```
pub fn format_rate(rate: f64) -> String {
    for (scale, unit) in RATE_UNITS {
        if rate >= scale {
            return format!("{:.2}{}", rate / scale, unit);
        }
    }
    format!("{:.0}", rate)
}

/// Calculate a per-second rate from a count and the time it took
///
/// Returns 0.0 for a zero duration.
pub fn calculate_rate(count: u64, duration: Duration) -> f64 {
    let seconds = duration.as_secs_f64();
    if seconds > 0.0 {
        count as f64 / seconds
    } else {
        0.0
    }
}
