//! Integration tests for the tagline_resolver crate.
//!
//! Tests for token resolution:
//! - Built-in coercions and bound checks
//! - Member and role lookup through the directory
//! - Custom resolver registration

mod registry_tests;
