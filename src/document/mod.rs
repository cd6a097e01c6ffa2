//! Parsed configuration documents with decode-on-read typed access.
//!
//! A [`Document`] holds one JSON object as a mapping from key to the raw,
//! still-encoded value text. Values are decoded into concrete types only
//! when an accessor asks for them, so a document is cheap to construct and
//! cheap to replace wholesale on reload.

mod decode;

#[cfg(test)]
mod tests;

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde_json::{error::Category, value::RawValue};

use crate::{
    access::ConfigRead,
    error::{ConfigError, Result},
};

pub use decode::DecodeValue;

/// One fully-parsed configuration document.
///
/// Immutable after construction; nested objects are reachable through
/// [`ConfigRead::section`], which produces an independent `Document`.
#[derive(Debug)]
pub struct Document {
    entries: HashMap<String, Box<RawValue>>,
}

impl Document {
    /// Parses a JSON string into a document.
    ///
    /// The top level must be a JSON object. A syntactically valid document
    /// whose top level is an array or scalar is rejected as
    /// [`ConfigError::InvalidRoot`]; malformed JSON is reported as
    /// [`ConfigError::Parse`].
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidRoot`] or [`ConfigError::Parse`] as
    /// described above.
    pub fn parse(text: &str) -> Result<Self> {
        match serde_json::from_str::<HashMap<String, Box<RawValue>>>(text) {
            Ok(entries) => Ok(Self { entries }),
            Err(e) if e.classify() == Category::Data => Err(ConfigError::InvalidRoot),
            Err(e) => Err(ConfigError::Parse {
                details: e.to_string(),
            }),
        }
    }

    /// Returns the number of top-level keys in the document.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the document has no top-level keys.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the document contains the given top-level key.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Iterates over the top-level keys of the document, in arbitrary order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    fn raw(&self, key: &str) -> Result<&RawValue> {
        self.entries
            .get(key)
            .map(Box::as_ref)
            .ok_or_else(|| ConfigError::KeyNotFound(key.to_string()))
    }
}

impl ConfigRead for Document {
    fn section(&self, key: &str) -> Result<Document> {
        let raw = self.raw(key)?;

        let entries = serde_json::from_str::<HashMap<String, Box<RawValue>>>(raw.get())
            .map_err(|e| ConfigError::Decode {
                key: key.to_string(),
                details: e.to_string(),
            })?;

        Ok(Document { entries })
    }

    fn section_as_text(&self, key: &str) -> Result<String> {
        Ok(self.raw(key)?.get().to_string())
    }

    fn decode<T: DecodeValue>(&self, key: &str) -> Result<T> {
        T::decode_raw(self.raw(key)?, key)
    }

    fn unmarshal_section<T: DeserializeOwned>(&self, key: &str) -> Result<T> {
        let raw = self.raw(key)?;

        serde_json::from_str(raw.get()).map_err(|e| ConfigError::Decode {
            key: key.to_string(),
            details: e.to_string(),
        })
    }
}

/// Documents compare equal when they hold the same keys mapping to the same
/// raw value text.
impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .all(|(key, raw)| other.entries.get(key).is_some_and(|o| o.get() == raw.get()))
    }
}
