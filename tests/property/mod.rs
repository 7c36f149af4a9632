//! Property-based tests for store and digest guarantees

mod determinism;
