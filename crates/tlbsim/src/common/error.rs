//! Simulator error type.
//!
//! Every variant is fatal for a run and is detected before the first access is
//! simulated or at the I/O boundary. Segmentation faults are not errors; they
//! are counted in [`SimStats`](crate::stats::SimStats).

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the simulator and its I/O shell.
#[derive(Debug, Error)]
pub enum SimError {
    /// The TLB capacity is below one entry.
    #[error("TLB size must be >= 1 (got {0})")]
    InvalidTlbSize(i64),

    /// A TLB size argument that is not an integer.
    #[error("invalid TLB size '{0}': expected a positive integer")]
    UnparsableTlbSize(String),

    /// Storage for the TLB slots could not be reserved.
    #[error("failed to allocate memory for {entries} TLB entries")]
    Allocation { entries: usize },

    /// The trace file could not be opened.
    #[error("cannot open trace file '{}': {source}", path.display())]
    TraceOpen {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file could not be read.
    #[error("cannot read config file '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config file '{}': {source}", path.display())]
    InvalidConfig {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The final report could not be written.
    #[error("failed to write report: {0}")]
    Report(#[from] io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SimError>;
