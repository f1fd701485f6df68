//! Counters accumulated over a simulation run.

use serde::{Deserialize, Serialize};

use crate::core::types::AccessOutcome;

/// Aggregate TLB and fault counters.
///
/// `tlb_hits + tlb_misses` equals the number of in-table pages translated by
/// non-faulting accesses. A faulting access adds exactly one to `seg_faults`
/// regardless of how many of its pages are unmapped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimStats {
    pub tlb_hits: u64,
    pub tlb_misses: u64,
    pub seg_faults: u64,
}

impl SimStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Folds the outcome of one access into the counters.
    pub fn record(&mut self, outcome: AccessOutcome) {
        match outcome {
            AccessOutcome::Empty => {}
            AccessOutcome::SegFault { .. } => self.seg_faults += 1,
            AccessOutcome::Translated { hits, misses } => {
                self.tlb_hits += hits;
                self.tlb_misses += misses;
            }
        }
    }

    /// Total TLB lookups (hits plus misses).
    pub fn lookups(&self) -> u64 {
        self.tlb_hits + self.tlb_misses
    }

    /// Fraction of lookups that hit, or `None` before the first lookup.
    pub fn hit_rate(&self) -> Option<f64> {
        match self.lookups() {
            0 => None,
            n => Some(self.tlb_hits as f64 / n as f64),
        }
    }
}
