//! # Simulation Unit Tests
//!
//! This module contains unit tests for trace input and report output.

/// Tests for the trace reader over in-memory input.
pub mod trace;
