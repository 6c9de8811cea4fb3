//! Shared test helpers for `dlpscope-core` integration tests.
//!
//! These helpers provide a scripted transport so pipeline tests can focus on
//! behaviour instead of HTTP plumbing.

#![allow(dead_code)]

pub mod transport;
