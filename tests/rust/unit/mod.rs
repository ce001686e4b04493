//! Unit tests - translation scenarios and parser edge cases
//!
//! These tests run against in-memory schemas and need no external services.

mod parser_robustness_tests;
mod translation_tests;
