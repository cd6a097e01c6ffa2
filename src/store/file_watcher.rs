use std::path::{Path, PathBuf};

use notify::{Event, EventKind, RecommendedWatcher, Watcher, recommended_watcher};
use tokio::sync::mpsc;
use tracing::warn;

/// Represents a file system event for the watched file.
#[derive(Debug, Clone)]
pub(super) struct FileEvent {
    /// The path of the file that changed
    pub path: PathBuf,
    /// The type of change that occurred
    pub kind: FileEventKind,
}

/// The type of file system change that occurred.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum FileEventKind {
    /// File was modified
    Modified,
    /// File was created
    Created,
    /// File was removed
    Removed,
}

/// Bridge from the notify crate to a Tokio-compatible event stream.
///
/// Holds the underlying watcher alive; dropping the `FileWatcher` closes the
/// subscription, which in turn closes the event channel once any queued
/// events have been delivered.
pub(super) struct FileWatcher {
    _watcher: RecommendedWatcher,
}

impl FileWatcher {
    /// Subscribes to change events for a single file.
    ///
    /// The path is canonicalized to handle symlinks and relative paths.
    /// Watcher errors are logged and never terminate the subscription.
    ///
    /// # Errors
    /// Returns error if the path cannot be canonicalized or the underlying
    /// file system watcher cannot be initialized.
    pub fn subscribe(
        path: impl AsRef<Path>,
    ) -> Result<(Self, mpsc::UnboundedReceiver<FileEvent>), notify::Error> {
        let canonical = path.as_ref().canonicalize()?;
        let (event_tx, event_rx) = mpsc::unbounded_channel();

        let mut watcher = recommended_watcher(move |res: notify::Result<Event>| {
            let event = match res {
                Ok(event) => event,
                Err(e) => {
                    warn!("file watcher error: {e}");
                    return;
                }
            };

            let kind = match event.kind {
                EventKind::Create(_) => FileEventKind::Created,
                EventKind::Modify(_) => FileEventKind::Modified,
                EventKind::Remove(_) => FileEventKind::Removed,
                _ => return,
            };

            for path in event.paths {
                let _ = event_tx.send(FileEvent {
                    path,
                    kind: kind.clone(),
                });
            }
        })?;

        watcher.watch(&canonical, notify::RecursiveMode::NonRecursive)?;

        Ok((Self { _watcher: watcher }, event_rx))
    }
}
