use std::{
    fs,
    mem,
    path::PathBuf,
    sync::{Arc, RwLock},
};

use tokio::{sync::mpsc, task::JoinHandle};
use tracing::{debug, warn};

use crate::{
    document::Document,
    error::{ConfigError, Result},
};

use super::{
    Store,
    file_watcher::{FileEvent, FileEventKind, FileWatcher},
};

/// Watch lifecycle of one [`Store`]. Transitions are guarded by the store's
/// watch mutex, so concurrent starts and stops serialize per handle.
pub(super) enum WatchState {
    /// Not watching.
    Idle,
    /// One active subscription with its background listener.
    Watching(WatchHandle),
}

pub(super) struct WatchHandle {
    watcher: FileWatcher,
    listener: JoinHandle<()>,
}

impl Store {
    /// Starts watching the backing file for changes.
    ///
    /// Spawns a background listener that reloads the document on each write
    /// to the file and sends one `()` on the returned channel per successful
    /// reload. Failed reloads (unreadable file, malformed JSON) are logged
    /// and skipped; the in-memory document stays at the last good state and
    /// no notification is sent.
    ///
    /// Must be called from within a Tokio runtime.
    ///
    /// # Errors
    /// Returns [`ConfigError::AlreadyWatched`] if this handle is already
    /// watching, or [`ConfigError::FileWatcherInit`] if the file-change
    /// subscription cannot be set up.
    pub fn watch(&self) -> Result<mpsc::UnboundedReceiver<()>> {
        let mut state = self.lock_watch_state();

        if matches!(*state, WatchState::Watching(_)) {
            return Err(ConfigError::AlreadyWatched);
        }

        let (watcher, event_rx) =
            FileWatcher::subscribe(&self.path).map_err(|e| ConfigError::FileWatcherInit {
                details: e.to_string(),
            })?;

        let (reload_tx, reload_rx) = mpsc::unbounded_channel();
        let listener = tokio::spawn(listen(
            Arc::clone(&self.doc),
            self.path.clone(),
            event_rx,
            reload_tx,
        ));

        *state = WatchState::Watching(WatchHandle { watcher, listener });

        Ok(reload_rx)
    }

    /// Stops watching the backing file.
    ///
    /// Closes the file-change subscription, then waits for the background
    /// listener to drain any in-flight event. The listener owns the
    /// notification sender, so the channel returned by [`Store::watch`]
    /// closes only after the last send has completed.
    ///
    /// # Errors
    /// Returns [`ConfigError::NotWatched`] if this handle is not watching.
    pub async fn stop_watching(&self) -> Result<()> {
        let handle = {
            let mut state = self.lock_watch_state();

            match mem::replace(&mut *state, WatchState::Idle) {
                WatchState::Watching(handle) => handle,
                WatchState::Idle => return Err(ConfigError::NotWatched),
            }
        };

        // Closing the subscription ends the event stream; the listener exits
        // once it has drained what was already queued.
        drop(handle.watcher);
        let _ = handle.listener.await;

        Ok(())
    }

    /// Returns `true` while this handle has an active watch.
    pub fn is_watching(&self) -> bool {
        matches!(*self.lock_watch_state(), WatchState::Watching(_))
    }
}

/// Background listener for one watching period.
///
/// Runs until the file-change subscription closes. Each write event is
/// handled independently: read, parse, then swap the document under the
/// write lock. Parse work happens before the lock is taken, so the lock is
/// held only for the swap itself.
async fn listen(
    doc: Arc<RwLock<Document>>,
    path: PathBuf,
    mut events: mpsc::UnboundedReceiver<FileEvent>,
    reload_tx: mpsc::UnboundedSender<()>,
) {
    while let Some(event) = events.recv().await {
        // Created covers editors that replace the file on save.
        if !matches!(
            event.kind,
            FileEventKind::Modified | FileEventKind::Created
        ) {
            continue;
        }

        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) => {
                warn!("failed to read config file '{}': {e}", path.display());
                continue;
            }
        };

        let fresh = match Document::parse(&text) {
            Ok(fresh) => fresh,
            Err(e) => {
                warn!("failed to reload config file '{}': {e}", path.display());
                continue;
            }
        };

        match doc.write() {
            Ok(mut guard) => *guard = fresh,
            Err(poisoned) => *poisoned.into_inner() = fresh,
        }

        debug!("reloaded config from '{}'", path.display());

        let _ = reload_tx.send(());
    }
}
