//! Shared test helpers for `messenger-core` integration tests.
//!
//! These helpers provide a scripted executor so that service tests can focus
//! on behaviour instead of HTTP plumbing.

pub mod executor;
