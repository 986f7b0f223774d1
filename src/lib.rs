//! Speculation microbenchmark.
//!
//! A gather through bounds checked arrays runs next to a T-table AES encryption. Both
//! phases are timed with fenced cycle counter reads, so protecting the key page (or the
//! whole cipher output) shows up as a change in the encrypt share of the total.
#![deny(unsafe_op_in_unsafe_fn)]

pub mod bounded;
pub mod checksum;
pub mod cli;
pub mod context;
pub mod data;
pub mod error;
pub mod harness;
pub mod placement;
pub mod scenario;
pub mod workload;

pub use context::WorkloadContext;
pub use error::{BenchmarkError, USAGE};
pub use harness::{TimingHarness, TimingReport, TimingSample};
pub use scenario::{BenchmarkConfig, Scenario, ScenarioConfig, TRIALS};

/// Builds the buffers and runs every trial of `config`.
pub fn run_benchmark(config: &BenchmarkConfig) -> Result<TimingReport, BenchmarkError> {
    let mut ctx = WorkloadContext::new(config)?;
    Ok(TimingHarness::new(*config).run(&mut ctx))
}
