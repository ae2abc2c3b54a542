// src/engine/event_handlers.rs

//! Event handling logic for the core runtime.

use std::path::PathBuf;

use tracing::{debug, error, info, warn};

use crate::engine::core::BuildState;
use crate::engine::queue::TriggerQueue;
use crate::engine::{BuildId, BuildOutcome, ScheduledBuild};

/// Command produced by the pure core, to be executed by the outer IO shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoreCommand {
    /// Hand this build to the backend.
    StartBuild(ScheduledBuild),
}

/// Decision returned by the core after handling a single `RuntimeEvent`.
#[derive(Debug, Clone)]
pub struct CoreStep {
    /// Commands the IO shell should execute.
    pub commands: Vec<CoreCommand>,
    /// Whether the outer runtime loop should keep running.
    pub keep_running: bool,
}

impl CoreStep {
    fn continue_with(commands: Vec<CoreCommand>) -> Self {
        Self {
            commands,
            keep_running: true,
        }
    }
}

/// Handle a source change trigger.
///
/// - Idle: start a build right away.
/// - Building: let the queue decide (queue or drop).
pub fn handle_sources_changed(
    state: &mut BuildState,
    queue: &mut TriggerQueue,
    next_id: &mut BuildId,
    paths: Vec<PathBuf>,
) -> CoreStep {
    match *state {
        BuildState::Idle => {
            info!(changed = paths.len(), "sources changed; starting build");
            let build = begin_build(state, next_id, paths);
            CoreStep::continue_with(vec![CoreCommand::StartBuild(build)])
        }
        BuildState::Building(current) => {
            debug!(build = current, "build in progress; deferring trigger");
            queue.record_trigger(paths);
            CoreStep::continue_with(Vec::new())
        }
    }
}

/// Handle a build completion event.
pub fn handle_build_completed(
    state: &mut BuildState,
    queue: &mut TriggerQueue,
    next_id: &mut BuildId,
    build: BuildId,
    outcome: BuildOutcome,
) -> CoreStep {
    if *state != BuildState::Building(build) {
        warn!(build, ?state, "completion for a build that is not running; ignoring");
        return CoreStep::continue_with(Vec::new());
    }

    match &outcome {
        BuildOutcome::Finished { written, failed: 0 } => {
            info!(build, written, "build finished");
        }
        BuildOutcome::Finished { written, failed } => {
            warn!(build, written, failed, "build finished with compile errors");
        }
        BuildOutcome::Aborted(reason) => {
            error!(build, %reason, "build aborted");
        }
    }

    *state = BuildState::Idle;

    let mut commands = Vec::new();
    if let Some(paths) = queue.pop_next() {
        let next = begin_build(state, next_id, paths);
        commands.push(CoreCommand::StartBuild(next));
    }

    CoreStep::continue_with(commands)
}

fn begin_build(state: &mut BuildState, next_id: &mut BuildId, changed: Vec<PathBuf>) -> ScheduledBuild {
    let id = *next_id;
    *next_id += 1;
    *state = BuildState::Building(id);
    ScheduledBuild { id, changed }
}
