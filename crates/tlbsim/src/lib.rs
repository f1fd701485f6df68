//! Page table and TLB simulator core library.
//!
//! This crate models address translation for a small virtual-memory system:
//! a fixed 16-entry page table and a fully associative TLB with a relative-age
//! LRU replacement scheme. A trace of `(address, size)` accesses is folded into
//! three counters: TLB hits, TLB misses and segmentation faults.
//!
//! The crate is organized as follows:
//! - `common`: Address helpers, layout constants and the error type.
//! - `config`: Simulator configuration (TLB capacity).
//! - `core`: The translation pipeline (page table, TLB, MMU).
//! - `sim`: Trace reading, the run loop and report sinks.
//! - `stats`: Counters accumulated over a run.

/// Common address types, constants and errors.
pub mod common;

/// Simulator configuration.
pub mod config;

/// Translation pipeline: page table, TLB and MMU.
pub mod core;

/// Trace input, run loop and report output.
pub mod sim;

/// Run statistics.
pub mod stats;

pub use crate::common::error::{Result, SimError};
pub use crate::config::Config;
pub use crate::core::mmu::Mmu;
pub use crate::core::types::{AccessOutcome, AccessRequest};
pub use crate::sim::Simulator;
pub use crate::stats::SimStats;
