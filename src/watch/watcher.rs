// src/watch/watcher.rs

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use notify::event::{ModifyKind, RenameMode};
use notify::{Config, Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::styles::SourcePattern;
use crate::watch::path_utils::relative_str;

/// What happened to the paths of a [`ChangeEvent`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeKind {
    Created,
    Modified,
    Removed,
}

/// A filesystem change affecting at least one watched source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeEvent {
    pub kind: ChangeKind,
    /// Absolute paths that matched the source pattern.
    pub paths: Vec<PathBuf>,
}

/// A live watch on the source tree.
///
/// Yields [`ChangeEvent`]s for as long as it is alive. Dropping it, or
/// calling [`ChangeSubscription::cancel`], stops the underlying watcher; any
/// events already delivered can still be drained with `next`.
pub struct ChangeSubscription {
    root: PathBuf,
    watcher: Option<RecommendedWatcher>,
    events: mpsc::UnboundedReceiver<ChangeEvent>,
}

impl std::fmt::Debug for ChangeSubscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChangeSubscription")
            .field("root", &self.root)
            .field("active", &self.watcher.is_some())
            .finish()
    }
}

impl ChangeSubscription {
    /// Wait for the next change. Returns `None` once the subscription has
    /// been cancelled and all pending events were consumed.
    pub async fn next(&mut self) -> Option<ChangeEvent> {
        self.events.recv().await
    }

    /// Stop watching.
    pub fn cancel(&mut self) {
        if self.watcher.take().is_some() {
            debug!(root = ?self.root, "file watcher cancelled");
        }
    }
}

/// Watch `root` recursively and report changes to files selected by
/// `pattern` (evaluated relative to `root`).
pub fn subscribe(root: impl Into<PathBuf>, pattern: SourcePattern) -> Result<ChangeSubscription> {
    let root = root.into();
    let root = root
        .canonicalize()
        .with_context(|| format!("source directory {:?} cannot be watched", root))?;

    // Channel from the blocking notify callback into the async world.
    let (event_tx, event_rx) = mpsc::unbounded_channel::<ChangeEvent>();

    let callback_root = root.clone();
    let mut watcher = RecommendedWatcher::new(
        move |res: notify::Result<Event>| match res {
            Ok(event) => {
                if let Some(change) = classify(&callback_root, &pattern, event) {
                    // The receiver only goes away when the subscription is
                    // dropped, at which point nobody cares.
                    let _ = event_tx.send(change);
                }
            }
            Err(err) => warn!(root = ?callback_root, "file watch error: {err}"),
        },
        Config::default(),
    )?;

    watcher
        .watch(&root, RecursiveMode::Recursive)
        .with_context(|| format!("watching {:?}", root))?;

    info!("file watcher started on {:?}", root);

    Ok(ChangeSubscription {
        root,
        watcher: Some(watcher),
        events: event_rx,
    })
}

/// Turn a raw notify event into a [`ChangeEvent`], keeping only paths the
/// pattern selects. Access and metadata-only events are ignored.
fn classify(root: &Path, pattern: &SourcePattern, event: Event) -> Option<ChangeEvent> {
    let kind = match event.kind {
        EventKind::Create(_) => ChangeKind::Created,
        EventKind::Remove(_) => ChangeKind::Removed,
        EventKind::Modify(ModifyKind::Metadata(_)) => return None,
        EventKind::Modify(ModifyKind::Name(RenameMode::From)) => ChangeKind::Removed,
        EventKind::Modify(ModifyKind::Name(RenameMode::To)) => ChangeKind::Created,
        EventKind::Modify(_) => ChangeKind::Modified,
        EventKind::Access(_) | EventKind::Any | EventKind::Other => return None,
    };

    let paths: Vec<PathBuf> = event
        .paths
        .into_iter()
        .filter(|path| {
            relative_str(root, path).is_some_and(|rel| pattern.matches(&rel))
        })
        .collect();

    if paths.is_empty() {
        None
    } else {
        Some(ChangeEvent { kind, paths })
    }
}
