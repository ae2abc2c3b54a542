// src/engine/core.rs

//! Pure core runtime state machine.
//!
//! This module contains a synchronous, deterministic "core runtime" that
//! consumes [`RuntimeEvent`]s and produces:
//! - an updated core state
//! - a list of "commands" describing what the IO shell should do next
//!
//! At most one build is in flight at any time; everything that arrives in
//! the meantime goes through the [`TriggerQueue`].
//!
//! The core is unit tested without any Tokio, channels, filesystem, or
//! builds.

use crate::engine::event_handlers::{handle_build_completed, handle_sources_changed, CoreStep};
use crate::engine::queue::TriggerQueue;
use crate::engine::{BuildId, RuntimeEvent};
use crate::types::TriggerWhileRunningBehaviour;

/// Whether a build is currently in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildState {
    Idle,
    Building(BuildId),
}

/// Pure core runtime state.
///
/// It has **no** channels, no Tokio types, and does not perform any IO.
#[derive(Debug)]
pub struct CoreRuntime {
    state: BuildState,
    queue: TriggerQueue,
    next_id: BuildId,
}

impl CoreRuntime {
    pub fn new(behaviour: TriggerWhileRunningBehaviour, queue_length: usize) -> Self {
        Self {
            state: BuildState::Idle,
            queue: TriggerQueue::new(behaviour, queue_length),
            next_id: 1,
        }
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    pub fn is_idle(&self) -> bool {
        self.state == BuildState::Idle
    }

    /// Builds waiting behind the current one.
    pub fn pending_runs(&self) -> usize {
        self.queue.pending_runs()
    }

    /// Handle a single runtime event, updating core state and returning the
    /// resulting commands for the IO shell.
    pub fn step(&mut self, event: RuntimeEvent) -> CoreStep {
        match event {
            RuntimeEvent::SourcesChanged { paths } => {
                handle_sources_changed(&mut self.state, &mut self.queue, &mut self.next_id, paths)
            }
            RuntimeEvent::BuildCompleted { build, outcome } => handle_build_completed(
                &mut self.state,
                &mut self.queue,
                &mut self.next_id,
                build,
                outcome,
            ),
            RuntimeEvent::ShutdownRequested => CoreStep {
                commands: Vec::new(),
                keep_running: false,
            },
        }
    }
}
