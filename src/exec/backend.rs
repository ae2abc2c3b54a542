// src/exec/backend.rs

//! Pluggable build backend abstraction.
//!
//! The runtime talks to a `BuildBackend` instead of calling the build task
//! directly. This makes it easy to swap in a fake backend in tests.
//!
//! - `RealBuildBackend` is the implementation used by `serve`. It runs the
//!   `buildStyles` task on a background worker and reports completion through
//!   the runtime event channel.
//! - Tests can provide their own `BuildBackend` that, for example, records
//!   which builds were started and emits `BuildCompleted` when told to.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use tokio::sync::mpsc;

use crate::engine::{RuntimeEvent, ScheduledBuild};
use crate::errors::Result;
use crate::tasks::BuildStylesTask;

use super::build_runner::run_build;

/// Trait abstracting how scheduled builds are executed.
pub trait BuildBackend: Send {
    /// Start the given build.
    ///
    /// Must not wait for the build to finish: completion is reported later
    /// as a `RuntimeEvent::BuildCompleted`.
    fn start_build(
        &mut self,
        build: ScheduledBuild,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>>;
}

/// Real build backend used in production.
pub struct RealBuildBackend {
    task: Arc<BuildStylesTask>,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
}

impl RealBuildBackend {
    pub fn new(task: Arc<BuildStylesTask>, runtime_tx: mpsc::Sender<RuntimeEvent>) -> Self {
        Self { task, runtime_tx }
    }
}

impl BuildBackend for RealBuildBackend {
    fn start_build(
        &mut self,
        build: ScheduledBuild,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        // Clone so the spawned build doesn't borrow `self`.
        let task = Arc::clone(&self.task);
        let tx = self.runtime_tx.clone();

        Box::pin(async move {
            tokio::spawn(run_build(build, task, tx));
            Ok(())
        })
    }
}
