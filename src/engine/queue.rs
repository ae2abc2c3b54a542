// src/engine/queue.rs

use std::collections::{BTreeSet, VecDeque};
use std::path::PathBuf;

use tracing::debug;

use crate::types::TriggerWhileRunningBehaviour;

/// Triggers that arrive while a build is already executing.
///
/// Semantics:
/// - Each queued entry is one future build, carrying the set of changed paths
///   that asked for it.
/// - `max_runs` (`queue_length`) bounds how many future builds are kept. Once
///   the bound is reached, further triggers are merged into the last pending
///   build, so no change is forgotten but bursts collapse into a single
///   follow-up build.
/// - In `Drop` mode nothing is ever queued.
#[derive(Debug)]
pub struct TriggerQueue {
    behaviour: TriggerWhileRunningBehaviour,
    max_runs: usize,
    runs: VecDeque<BTreeSet<PathBuf>>,
}

impl TriggerQueue {
    /// Create a new queue with the given behaviour and maximum queued runs.
    ///
    /// `max_runs` is clamped to at least 1.
    pub fn new(behaviour: TriggerWhileRunningBehaviour, max_runs: usize) -> Self {
        Self {
            behaviour,
            max_runs: max_runs.max(1),
            runs: VecDeque::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Number of builds waiting to run.
    pub fn pending_runs(&self) -> usize {
        self.runs.len()
    }

    /// Record a trigger that arrived while a build is in progress.
    pub fn record_trigger(&mut self, paths: Vec<PathBuf>) {
        match self.behaviour {
            TriggerWhileRunningBehaviour::Queue => {
                if self.runs.len() < self.max_runs {
                    debug!(
                        changed = paths.len(),
                        pending = self.runs.len() + 1,
                        "queued follow-up build"
                    );
                    self.runs.push_back(paths.into_iter().collect());
                } else if let Some(last) = self.runs.back_mut() {
                    debug!(
                        changed = paths.len(),
                        max_runs = self.max_runs,
                        "queue full; merged trigger into last pending build"
                    );
                    last.extend(paths);
                }
            }
            TriggerWhileRunningBehaviour::Drop => {
                debug!(changed = paths.len(), "build running; dropping trigger (drop mode)");
            }
        }
    }

    /// Take the next pending build, if any.
    pub fn pop_next(&mut self) -> Option<Vec<PathBuf>> {
        self.runs.pop_front().map(|set| set.into_iter().collect())
    }
}
