//! The accessor surface shared by every configuration handle.

use serde::de::DeserializeOwned;

use crate::{
    document::{DecodeValue, Document},
    error::Result,
};

/// Read access to a configuration document.
///
/// Implemented uniformly by [`Document`] and by the root
/// [`Store`](crate::store::Store), so nested sections answer the same
/// queries as the handle they were taken from.
pub trait ConfigRead {
    /// Returns the nested object under `key` as an independent document.
    ///
    /// # Errors
    /// Returns [`ConfigError::KeyNotFound`](crate::ConfigError::KeyNotFound)
    /// if the key is absent, or
    /// [`ConfigError::Decode`](crate::ConfigError::Decode) if the value is
    /// not an object.
    fn section(&self, key: &str) -> Result<Document>;

    /// Returns the raw, still-encoded text of the value under `key`.
    ///
    /// Useful for handing a sub-document to a separate decoder.
    ///
    /// # Errors
    /// Returns [`ConfigError::KeyNotFound`](crate::ConfigError::KeyNotFound)
    /// if the key is absent.
    fn section_as_text(&self, key: &str) -> Result<String>;

    /// Decodes the value under `key` into the requested type.
    ///
    /// # Errors
    /// Returns [`ConfigError::KeyNotFound`](crate::ConfigError::KeyNotFound)
    /// if the key is absent, or
    /// [`ConfigError::Decode`](crate::ConfigError::Decode) if the value
    /// cannot be decoded into `T`.
    fn decode<T: DecodeValue>(&self, key: &str) -> Result<T>;

    /// Decodes the sub-document under `key` directly into a caller-supplied
    /// shape, bypassing the document abstraction.
    ///
    /// # Errors
    /// Returns [`ConfigError::KeyNotFound`](crate::ConfigError::KeyNotFound)
    /// if the key is absent, or
    /// [`ConfigError::Decode`](crate::ConfigError::Decode) if the value does
    /// not deserialize into `T`.
    fn unmarshal_section<T: DeserializeOwned>(&self, key: &str) -> Result<T>;

    /// Decodes the value under `key`, falling back to `default` on any
    /// error.
    ///
    /// Missing keys, type mismatches, and malformed literals are all
    /// silently collapsed into the default; use [`ConfigRead::decode`] when
    /// the cause matters.
    fn get<T: DecodeValue>(&self, key: &str, default: T) -> T {
        self.decode(key).unwrap_or(default)
    }

    /// Decodes the value under `key`, panicking on any error.
    ///
    /// An escape hatch for keys the caller asserts must exist and be
    /// well-typed. Never use it on optional or externally controlled keys.
    ///
    /// # Panics
    /// Panics with the underlying error if the key is absent or its value
    /// cannot be decoded into `T`.
    #[allow(clippy::panic)]
    fn must_get<T: DecodeValue>(&self, key: &str) -> T {
        match self.decode(key) {
            Ok(value) => value,
            Err(e) => panic!("required config key '{key}': {e}"),
        }
    }
}
