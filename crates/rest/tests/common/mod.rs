//! Common test utilities for REST API testing.
//!
//! - [`harness`] - Test server over an in-memory SQLite backend
//! - [`fixtures`] - Patient parameter fixtures
//! - [`assertions`] - HTTP response assertions
//! - [`failing`] - A storage double whose every call fails
//! - [`slow`] - A storage double that outlasts the request timeout

// Each test binary uses a different subset of these helpers.
#![allow(dead_code)]

pub mod assertions;
pub mod failing;
pub mod fixtures;
pub mod harness;
pub mod slow;
