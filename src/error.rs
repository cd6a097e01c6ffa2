use std::{path::PathBuf, result};

use thiserror::Error;

/// Errors that can occur during configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The requested key is not present in the document.
    #[error("key '{0}' was not found in the config")]
    KeyNotFound(String),

    /// A value exists under the key but could not be decoded into the
    /// requested type.
    #[error("failed to decode key '{key}': {details}")]
    Decode {
        /// The key whose value failed to decode.
        key: String,
        /// Details from the underlying decoder.
        details: String,
    },

    /// The top level of the document is valid JSON but not an object.
    #[error("not a valid configuration root: top level must be a JSON object")]
    InvalidRoot,

    /// The document is not syntactically valid JSON.
    #[error("failed to parse JSON: {details}")]
    Parse {
        /// Parse error details.
        details: String,
    },

    /// Error occurred during file I/O operations.
    #[error("I/O error on '{path}': {details}")]
    Io {
        /// Path where the I/O error occurred.
        path: PathBuf,
        /// I/O error details.
        details: String,
    },

    /// Failed to set up the file-change subscription.
    #[error("failed to initialize file watcher: {details}")]
    FileWatcherInit {
        /// File watcher initialization error details.
        details: String,
    },

    /// `watch` was called while the config is already being watched.
    #[error("config is already being watched")]
    AlreadyWatched,

    /// `stop_watching` was called while the config is not being watched.
    #[error("config is not being watched")]
    NotWatched,
}

/// A specialized `Result` type for configuration operations.
pub type Result<T> = result::Result<T, ConfigError>;
