// src/exec/build_runner.rs

//! Runs a single build off the async runtime and reports back.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, error, info};

use crate::engine::{BuildOutcome, RuntimeEvent, ScheduledBuild};
use crate::tasks::BuildStylesTask;

/// Run `task` on the blocking thread pool and send exactly one
/// `BuildCompleted` event for `build`, whatever happens.
pub async fn run_build(
    build: ScheduledBuild,
    task: Arc<BuildStylesTask>,
    runtime_tx: mpsc::Sender<RuntimeEvent>,
) {
    info!(build = build.id, changed = build.changed.len(), "running build");
    for path in &build.changed {
        debug!(build = build.id, path = %path.display(), "changed");
    }

    let joined = tokio::task::spawn_blocking(move || task.run()).await;

    let outcome = match joined {
        Ok(Ok(report)) => BuildOutcome::Finished {
            written: report.written.len(),
            failed: report.failures.len(),
        },
        Ok(Err(err)) => BuildOutcome::Aborted(format!("{err:#}")),
        Err(join_err) => {
            error!(build = build.id, error = %join_err, "build worker panicked");
            BuildOutcome::Aborted(join_err.to_string())
        }
    };

    if let Err(err) = runtime_tx
        .send(RuntimeEvent::BuildCompleted {
            build: build.id,
            outcome,
        })
        .await
    {
        debug!(build = build.id, error = %err, "runtime gone before build completed");
    }
}
