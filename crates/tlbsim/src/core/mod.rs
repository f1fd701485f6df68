//! Translation pipeline.

pub mod mmu;
pub mod types;

pub use self::mmu::Mmu;
