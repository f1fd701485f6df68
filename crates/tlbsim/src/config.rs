//! Simulator configuration.
//!
//! Configuration is plain data with serde support so it can be loaded from a
//! JSON file. Missing fields fall back to their defaults, e.g. `{}` yields a
//! 4-entry TLB.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::common::constants::DEFAULT_TLB_SIZE;
use crate::common::error::{Result, SimError};

/// Top-level simulator configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub tlb: TlbConfig,
}

/// TLB parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TlbConfig {
    /// Number of fully associative entries. Must be at least 1.
    pub size: usize,
}

impl Default for TlbConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_TLB_SIZE,
        }
    }
}

impl Config {
    /// Builds a configuration with the given TLB capacity.
    pub fn with_tlb_size(size: usize) -> Self {
        Self {
            tlb: TlbConfig { size },
        }
    }

    /// Parses a configuration from a JSON string and validates it.
    pub fn from_json_str(json: &str, origin: &Path) -> Result<Self> {
        let config: Config =
            serde_json::from_str(json).map_err(|source| SimError::InvalidConfig {
                path: origin.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| SimError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content, path)
    }

    /// Checks the invariants the simulator relies on.
    pub fn validate(&self) -> Result<()> {
        if self.tlb.size < 1 {
            return Err(SimError::InvalidTlbSize(self.tlb.size as i64));
        }
        Ok(())
    }
}

/// Parses a TLB size given on the command line.
///
/// Leading and trailing whitespace is ignored. Non-numeric input and values
/// below 1 are configuration errors.
pub fn parse_tlb_size(arg: &str) -> Result<usize> {
    let value: i64 = arg
        .trim()
        .parse()
        .map_err(|_| SimError::UnparsableTlbSize(arg.to_string()))?;
    if value < 1 {
        return Err(SimError::InvalidTlbSize(value));
    }
    usize::try_from(value).map_err(|_| SimError::UnparsableTlbSize(arg.to_string()))
}
