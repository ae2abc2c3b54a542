// src/engine/mod.rs

//! Orchestration engine for `serve`.
//!
//! This module ties together:
//! - the trigger queue (what happens when changes arrive while a build runs)
//! - the main runtime event loop that reacts to:
//!   - source change triggers
//!   - build completion events
//!   - shutdown signals
//!
//! The pure core state machine lives in [`core`]; the async/IO shell is
//! implemented in [`runtime`].

use std::path::PathBuf;

/// Monotonic identifier of a build started by the runtime.
pub type BuildId = u64;

/// How a build ended, as reported back to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    /// The run went through every source. Per-file failures are counted but
    /// do not make the run fail.
    Finished { written: usize, failed: usize },
    /// The run stopped on a filesystem error.
    Aborted(String),
}

/// A build the core wants the backend to run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledBuild {
    pub id: BuildId,
    /// Changed paths that led to this build.
    pub changed: Vec<PathBuf>,
}

/// Events flowing into the runtime from the watcher, the backend, etc.
#[derive(Debug, Clone)]
pub enum RuntimeEvent {
    /// One or more watched sources changed.
    SourcesChanged { paths: Vec<PathBuf> },
    /// A build started by the runtime finished.
    BuildCompleted {
        build: BuildId,
        outcome: BuildOutcome,
    },
    /// Graceful shutdown requested (e.g. Ctrl-C).
    ShutdownRequested,
}

pub mod core;
pub mod event_handlers;
pub mod queue;
pub mod runtime;

pub use core::{BuildState, CoreRuntime};
pub use event_handlers::{CoreCommand, CoreStep};
pub use queue::TriggerQueue;
pub use crate::types::TriggerWhileRunningBehaviour;
pub use runtime::Runtime;
