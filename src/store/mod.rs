//! Root configuration handle backed by a file, with live reload.
//!
//! A [`Store`] owns the current [`Document`] behind a reader-writer lock.
//! Accessors take the read side, so any number of them may run concurrently;
//! a reload takes the write side only for the wholesale swap of the
//! document. Watching is per handle: [`Store::watch`] starts a background
//! listener on the backing file and [`Store::stop_watching`] tears it down.

mod file_watcher;
mod watch;


use std::{
    fs,
    path::{Path, PathBuf},
    sync::{Arc, Mutex, MutexGuard, PoisonError, RwLock},
};

use serde::de::DeserializeOwned;

use crate::{
    access::ConfigRead,
    document::{DecodeValue, Document},
    error::{ConfigError, Result},
};

use watch::WatchState;

/// A file-backed configuration store safe for concurrent access.
pub struct Store {
    doc: Arc<RwLock<Document>>,
    path: PathBuf,
    watch: Mutex<WatchState>,
}

impl Store {
    /// Reads and parses the configuration file at `path`.
    ///
    /// The store is created idle; call [`Store::watch`] to start reloading
    /// on file changes.
    ///
    /// # Errors
    /// Returns [`ConfigError::Io`] if the file cannot be read, or a parse
    /// error as described by [`Document::parse`].
    pub fn load(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();

        let text = fs::read_to_string(&path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            details: e.to_string(),
        })?;

        let doc = Document::parse(&text)?;

        Ok(Self {
            doc: Arc::new(RwLock::new(doc)),
            path,
            watch: Mutex::new(WatchState::Idle),
        })
    }

    /// Returns the path of the backing configuration file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Runs `f` against the current document under the read lock.
    fn with_doc<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
        match self.doc.read() {
            Ok(guard) => f(&guard),
            Err(poisoned) => f(&poisoned.into_inner()),
        }
    }

    fn lock_watch_state(&self) -> MutexGuard<'_, WatchState> {
        self.watch.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl ConfigRead for Store {
    fn section(&self, key: &str) -> Result<Document> {
        self.with_doc(|doc| doc.section(key))
    }

    fn section_as_text(&self, key: &str) -> Result<String> {
        self.with_doc(|doc| doc.section_as_text(key))
    }

    fn decode<T: DecodeValue>(&self, key: &str) -> Result<T> {
        self.with_doc(|doc| doc.decode(key))
    }

    fn unmarshal_section<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        self.with_doc(|doc| doc.unmarshal_section(key))
    }
}
