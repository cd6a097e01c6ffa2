//! reconfig - Typed JSON configuration with live reload.
//!
//! reconfig loads a JSON configuration file once and answers typed queries
//! against it: scalar values with default fallback or panic-on-missing
//! semantics, nested sections as independent documents, and whole
//! sub-documents deserialized into caller types. The root handle can watch
//! its backing file and atomically swap in the new document when the file
//! changes on disk, notifying subscribers of each successful reload.
//!
//! Values stay in their raw encoded form until an accessor asks for them,
//! so a reload replaces the whole document in one pointer swap and readers
//! never observe a partially decoded state.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use reconfig::{ConfigRead, Store};
//!
//! # fn main() -> reconfig::Result<()> {
//! let store = Store::load("service.json")?;
//!
//! let port: i64 = store.get("port", 8080);
//! let db = store.section("database")?;
//! let host = db.get("host", String::from("localhost"));
//! # Ok(())
//! # }
//! ```

/// The accessor surface shared by every configuration handle.
pub mod access;

/// Parsed configuration documents with decode-on-read typed access.
pub mod document;

/// Error types and result alias.
pub mod error;

/// Root file-backed configuration handle with live reload.
pub mod store;

pub use access::ConfigRead;
pub use document::{DecodeValue, Document};
pub use error::{ConfigError, Result};
pub use store::Store;
