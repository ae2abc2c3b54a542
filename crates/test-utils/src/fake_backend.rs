use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use stylewatch::engine::{BuildOutcome, RuntimeEvent, ScheduledBuild};
use stylewatch::errors::Result;
use stylewatch::exec::BuildBackend;
use tokio::sync::mpsc;

/// A fake backend that:
/// - records which builds were started
/// - reports `BuildCompleted` immediately, unless `manual` is set, in which
///   case the test decides when builds finish.
pub struct FakeBackend {
    runtime_tx: mpsc::Sender<RuntimeEvent>,
    started: Arc<Mutex<Vec<ScheduledBuild>>>,
    manual: bool,
}

impl FakeBackend {
    pub fn new(
        runtime_tx: mpsc::Sender<RuntimeEvent>,
        started: Arc<Mutex<Vec<ScheduledBuild>>>,
    ) -> Self {
        Self {
            runtime_tx,
            started,
            manual: false,
        }
    }

    /// Don't complete builds automatically.
    pub fn manual(mut self) -> Self {
        self.manual = true;
        self
    }
}

impl BuildBackend for FakeBackend {
    fn start_build(
        &mut self,
        build: ScheduledBuild,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + '_>> {
        let tx = self.runtime_tx.clone();
        let started = Arc::clone(&self.started);
        let manual = self.manual;

        Box::pin(async move {
            let id = build.id;
            started.lock().unwrap().push(build);

            if !manual {
                tx.send(RuntimeEvent::BuildCompleted {
                    build: id,
                    outcome: BuildOutcome::Finished {
                        written: 1,
                        failed: 0,
                    },
                })
                .await
                .map_err(anyhow::Error::from)?;
            }
            Ok(())
        })
    }
}
