//! Simulation driver.
//!
//! [`Simulator`] owns the MMU and the counters and consumes accesses one at a
//! time, in order. Input comes from any iterator of [`AccessRequest`]s (for
//! files, a [`trace::TraceReader`]); output goes to a [`report::ReportSink`].

use log::info;

use crate::common::error::Result;
use crate::config::Config;
use crate::core::mmu::Mmu;
use crate::core::mmu::page_table::PageTable;
use crate::core::types::{AccessOutcome, AccessRequest};
use crate::stats::SimStats;

use self::report::ReportSink;

pub mod report;
pub mod trace;

pub struct Simulator {
    pub mmu: Mmu,
    stats: SimStats,
}

impl Simulator {
    /// Creates a simulator with the standard page table.
    ///
    /// # Errors
    ///
    /// Fails if the configuration is invalid or TLB storage cannot be
    /// allocated.
    pub fn new(config: &Config) -> Result<Self> {
        Ok(Self {
            mmu: Mmu::new(config)?,
            stats: SimStats::new(),
        })
    }

    /// Creates a simulator over a caller-supplied page table.
    pub fn with_page_table(page_table: PageTable, config: &Config) -> Result<Self> {
        Ok(Self {
            mmu: Mmu::with_page_table(page_table, config)?,
            stats: SimStats::new(),
        })
    }

    /// Simulates a single access and updates the counters.
    pub fn step(&mut self, req: AccessRequest) -> AccessOutcome {
        let outcome = self.mmu.translate(req);
        self.stats.record(outcome);
        outcome
    }

    /// Consumes every access from `source` and returns the final counters.
    pub fn run<I>(&mut self, source: I) -> SimStats
    where
        I: IntoIterator<Item = AccessRequest>,
    {
        let mut accesses = 0u64;
        for req in source {
            self.step(req);
            accesses += 1;
        }
        let hit_rate = self
            .stats
            .hit_rate()
            .map_or_else(|| "n/a".to_string(), |r| format!("{:.1}%", r * 100.0));
        info!(
            "simulated {} accesses: {} hits, {} misses ({} hit rate), {} segfaults",
            accesses, self.stats.tlb_hits, self.stats.tlb_misses, hit_rate, self.stats.seg_faults
        );
        self.stats
    }

    /// Runs `source` to completion and hands the counters to `sink`.
    pub fn run_and_report<I, S>(&mut self, source: I, sink: &mut S) -> Result<SimStats>
    where
        I: IntoIterator<Item = AccessRequest>,
        S: ReportSink + ?Sized,
    {
        let stats = self.run(source);
        sink.report(&stats)?;
        Ok(stats)
    }

    pub fn stats(&self) -> &SimStats {
        &self.stats
    }
}
