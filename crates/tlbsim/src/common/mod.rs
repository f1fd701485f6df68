//! Common definitions shared across the simulator.

/// Virtual address newtype and page arithmetic.
pub mod addr;

/// Memory layout constants.
pub mod constants;

/// Error type and result alias.
pub mod error;

pub use self::addr::VirtAddr;
pub use self::error::{Result, SimError};
