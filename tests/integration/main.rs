//! Cross-layer integration tests for tagline
//!
//! Tests that verify correct interaction between multiple crates.
