//! # Core Unit Tests
//!
//! Tests for the translation pipeline components.


/// Tests for TLB lookup, recency ranking and replacement.
pub mod tlb;

/// Tests for per-access translation in the MMU.
pub mod mmu;
