//! Integration test support library
//!
//! Provides a test server harness, HTTP helpers, and data fixtures for the
//! end-to-end API tests in `tests/`.

pub mod fixtures;
pub mod helpers;

pub use helpers::{assert_json, assert_status, check_test_env, TestServer};
