//! Trial loop and cycle accounting.

use core::fmt;
use core::hint::black_box;
use core::ops::AddAssign;

use aes_t_tables::BLOCK_LEN;
use arrayref::array_ref;
use cache_utils::{CycleCounter, Rdtscp};
use tracing::{info, trace};

use crate::context::WorkloadContext;
use crate::scenario::BenchmarkConfig;
use crate::workload::run_work;

/// Cycles spent in each phase, for one trial or summed over many.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimingSample {
    pub cycles_work: u64,
    pub cycles_encrypt: u64,
}

impl AddAssign for TimingSample {
    fn add_assign(&mut self, rhs: TimingSample) {
        self.cycles_work += rhs.cycles_work;
        self.cycles_encrypt += rhs.cycles_encrypt;
    }
}

/// Raw sums over all trials.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TimingReport {
    pub total: TimingSample,
    pub trials: usize,
}

impl TimingReport {
    pub fn work_cycles(&self) -> u64 {
        self.total.cycles_work
    }

    pub fn encrypt_cycles(&self) -> u64 {
        self.total.cycles_encrypt
    }

    pub fn total_cycles(&self) -> u64 {
        self.total.cycles_work + self.total.cycles_encrypt
    }

    /// Fraction of the measured cycles spent encrypting, 0 when nothing was measured.
    pub fn encrypt_share(&self) -> f64 {
        match self.total_cycles() {
            0 => 0.0,
            total => self.encrypt_cycles() as f64 / total as f64,
        }
    }
}

impl fmt::Display for TimingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "work time   :[{}]", self.work_cycles())?;
        writeln!(f, "encrypt time:[{}]", self.encrypt_cycles())?;
        writeln!(f, "total time  :[{}]", self.total_cycles())
    }
}

pub struct TimingHarness<C: CycleCounter = Rdtscp> {
    config: BenchmarkConfig,
    counter: C,
}

impl TimingHarness<Rdtscp> {
    pub fn new(config: BenchmarkConfig) -> Self {
        Self::with_counter(config, Rdtscp)
    }
}

impl<C: CycleCounter> TimingHarness<C> {
    pub fn with_counter(config: BenchmarkConfig, counter: C) -> Self {
        TimingHarness { config, counter }
    }

    /// One trial: the work phase then the encrypt phase, each between two fenced
    /// timestamps. The counter is read exactly four times.
    pub fn run_trial(&mut self, ctx: &mut WorkloadContext) -> TimingSample {
        let work_iterations = self.config.scenario.work_iterations;
        let crypto_iterations = self.config.scenario.crypto_iterations as usize;
        let variant = self.config.variant;
        ctx.checksum[0].reset();

        let start = self.counter.timestamp();
        run_work(
            &ctx.index_source,
            &ctx.value_source,
            &mut ctx.destination,
            work_iterations,
        );
        let end = self.counter.timestamp();
        let cycles_work = end.wrapping_sub(start);

        // Resolve every placed handle before the timed region.
        let plaintext = ctx.destination.as_bytes();
        let key = &ctx.key[0];
        let out: &mut [u8] = &mut ctx.cipher_out;
        let checksum = &mut ctx.checksum[0];

        let start = self.counter.timestamp();
        for i in 0..crypto_iterations {
            let offset = i * BLOCK_LEN;
            let block = array_ref!(plaintext, offset, BLOCK_LEN);
            variant.encrypt_block(key, block, out, offset);
            // Select and accumulate on the block just written.
            checksum.fold(&out[offset..offset + BLOCK_LEN]);
        }
        let end = self.counter.timestamp();
        let cycles_encrypt = end.wrapping_sub(start);

        black_box(*checksum);
        TimingSample {
            cycles_work,
            cycles_encrypt,
        }
    }

    pub fn run(&mut self, ctx: &mut WorkloadContext) -> TimingReport {
        let mut report = TimingReport::default();
        for trial in 0..self.config.trials {
            let sample = self.run_trial(ctx);
            trace!(
                trial,
                work = sample.cycles_work,
                encrypt = sample.cycles_encrypt,
                "trial done"
            );
            report.total += sample;
            report.trials += 1;
        }
        info!(
            trials = report.trials,
            work = report.work_cycles(),
            encrypt = report.encrypt_cycles(),
            "benchmark done"
        );
        report
    }
}
