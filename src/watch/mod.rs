// src/watch/mod.rs

//! File watching.
//!
//! This module wires up a cross-platform filesystem watcher (`notify`) on the
//! source directory and exposes it as a [`ChangeSubscription`]: a stream of
//! [`ChangeEvent`]s restricted to paths the source pattern selects.
//!
//! It does **not** know about builds; turning changes into builds is the job
//! of the engine.

pub mod path_utils;
pub mod watcher;

pub use watcher::{subscribe, ChangeEvent, ChangeKind, ChangeSubscription};
