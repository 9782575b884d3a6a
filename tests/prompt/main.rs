//! Integration tests for the tagline_prompt crate.
//!
//! Tests for prompt sessions driven by a scripted messenger:
//! - Straight-through resolution
//! - Reprompt, splice, and budget behavior
//! - Abort words, timeouts, and cancellation

mod harness;
mod session_tests;
