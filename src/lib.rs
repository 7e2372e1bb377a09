//! logburst - bursty random log output generator
//!
//! logburst writes a continuous stream of random printable text at a rate
//! that changes over time, imitating the bursty output of build and CI jobs.
//! It is meant for exercising whatever consumes log output downstream.
//!
//! # Architecture
//!
//! - **Rate shapers**: ramp or logistic curve giving the fraction of the peak rate per step
//! - **Skip sampling**: Poisson-distributed silent stretches at the end of each slice
//! - **Buffer pool**: pre-generated random lines, so output needs no per-character RNG
//! - **Emitter**: step timer racing the run deadline, writing to any async sink

pub mod config;
pub mod emitter;
pub mod error;
pub mod shaper;
pub mod skip;
pub mod stats;
pub mod util;

// Re-export commonly used types
pub use config::Config;
pub use emitter::Emitter;
pub use error::{Error, Result};
pub use stats::RunStats;
