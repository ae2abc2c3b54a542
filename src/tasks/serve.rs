// src/tasks/serve.rs

use std::future::Future;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::engine::{CoreRuntime, Runtime, RuntimeEvent};
use crate::exec::RealBuildBackend;
use crate::tasks::BuildStylesTask;
use crate::types::TriggerWhileRunningBehaviour;
use crate::watch;

/// Watch the source tree and rebuild on every relevant change.
///
/// Builds never overlap: the engine runs one at a time and applies the
/// configured trigger behaviour to changes that arrive mid-build.
#[derive(Debug, Clone)]
pub struct ServeTask {
    build: Arc<BuildStylesTask>,
    behaviour: TriggerWhileRunningBehaviour,
    queue_length: usize,
}

impl ServeTask {
    pub fn new(
        build: Arc<BuildStylesTask>,
        behaviour: TriggerWhileRunningBehaviour,
        queue_length: usize,
    ) -> Self {
        Self {
            build,
            behaviour,
            queue_length,
        }
    }

    /// Serve until Ctrl-C.
    pub async fn run(&self) -> Result<()> {
        self.run_until(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                warn!("failed to listen for Ctrl+C: {e}");
                std::future::pending::<()>().await;
            }
        })
        .await
    }

    /// Serve until `shutdown` resolves.
    pub async fn run_until<F>(&self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let mut subscription =
            watch::subscribe(self.build.source_dir(), self.build.pattern().clone())?;

        let (rt_tx, rt_rx) = mpsc::channel::<RuntimeEvent>(64);

        // Changes -> runtime. Ends when the runtime goes away.
        {
            let tx = rt_tx.clone();
            tokio::spawn(async move {
                loop {
                    tokio::select! {
                        change = subscription.next() => {
                            let Some(change) = change else { break };
                            debug!(kind = ?change.kind, paths = ?change.paths, "source change");
                            let event = RuntimeEvent::SourcesChanged { paths: change.paths };
                            if tx.send(event).await.is_err() {
                                break;
                            }
                        }
                        _ = tx.closed() => break,
                    }
                }
                subscription.cancel();
            });
        }

        // Shutdown signal -> runtime.
        {
            let tx = rt_tx.clone();
            tokio::spawn(async move {
                shutdown.await;
                let _ = tx.send(RuntimeEvent::ShutdownRequested).await;
            });
        }

        info!(
            pattern = %self.build.pattern().as_str(),
            behaviour = ?self.behaviour,
            "watching styles"
        );

        let core = CoreRuntime::new(self.behaviour, self.queue_length);
        let backend = RealBuildBackend::new(Arc::clone(&self.build), rt_tx);
        Runtime::new(core, rt_rx, backend).run().await?;
        Ok(())
    }
}
