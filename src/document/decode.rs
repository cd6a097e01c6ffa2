use std::time::Duration;

use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde_json::value::RawValue;

use crate::error::ConfigError;

/// Date layout used for timestamp values, matching the source format
/// `"12.09.2018"` (day, month, four-digit year, no time-of-day).
const DATE_LAYOUT: &str = "%d.%m.%Y";

/// A semantic type that configuration values can be decoded into.
///
/// Decoding always starts from the raw, still-encoded value text and is
/// re-performed on every access. Implementations exist for the scalar types
/// a configuration file is expected to carry: strings, integers, booleans,
/// dates, durations, and string sequences.
pub trait DecodeValue: Sized {
    /// Decodes the raw value stored under `key` into `Self`.
    ///
    /// # Errors
    /// Returns [`ConfigError::Decode`] if the value does not have the
    /// expected type or its literal form is malformed.
    fn decode_raw(raw: &RawValue, key: &str) -> Result<Self, ConfigError>;
}

fn from_json<T: DeserializeOwned>(raw: &RawValue, key: &str) -> Result<T, ConfigError> {
    serde_json::from_str(raw.get()).map_err(|e| ConfigError::Decode {
        key: key.to_string(),
        details: e.to_string(),
    })
}

impl DecodeValue for String {
    fn decode_raw(raw: &RawValue, key: &str) -> Result<Self, ConfigError> {
        from_json(raw, key)
    }
}

impl DecodeValue for i64 {
    fn decode_raw(raw: &RawValue, key: &str) -> Result<Self, ConfigError> {
        from_json(raw, key)
    }
}

impl DecodeValue for u64 {
    fn decode_raw(raw: &RawValue, key: &str) -> Result<Self, ConfigError> {
        from_json(raw, key)
    }
}

impl DecodeValue for bool {
    fn decode_raw(raw: &RawValue, key: &str) -> Result<Self, ConfigError> {
        from_json(raw, key)
    }
}

impl DecodeValue for Vec<String> {
    fn decode_raw(raw: &RawValue, key: &str) -> Result<Self, ConfigError> {
        from_json(raw, key)
    }
}

/// Dates are stored as JSON strings in the `D.M.YYYY` layout.
impl DecodeValue for NaiveDate {
    fn decode_raw(raw: &RawValue, key: &str) -> Result<Self, ConfigError> {
        let text: String = from_json(raw, key)?;

        NaiveDate::parse_from_str(&text, DATE_LAYOUT).map_err(|e| ConfigError::Decode {
            key: key.to_string(),
            details: format!("invalid date '{text}': {e}"),
        })
    }
}

/// Durations are stored as JSON strings in magnitude+unit form
/// (`"30m"`, `"2h"`, `"500ms"`, `"1h30m"`).
impl DecodeValue for Duration {
    fn decode_raw(raw: &RawValue, key: &str) -> Result<Self, ConfigError> {
        let text: String = from_json(raw, key)?;

        humantime::parse_duration(&text).map_err(|e| ConfigError::Decode {
            key: key.to_string(),
            details: format!("invalid duration '{text}': {e}"),
        })
    }
}
