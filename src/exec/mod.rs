// src/exec/mod.rs

//! Build execution layer.
//!
//! This module is responsible for actually running `buildStyles` on behalf
//! of the watch runtime and reporting back via `RuntimeEvent`s.
//!
//! - [`build_runner`] runs one build on the blocking pool.
//! - [`backend`] provides the `BuildBackend` trait and the concrete
//!   `RealBuildBackend` the runtime uses in production, and which tests can
//!   replace with a fake implementation.

pub mod backend;
pub mod build_runner;

pub use backend::{BuildBackend, RealBuildBackend};
