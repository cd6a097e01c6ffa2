//! Unit tests for the document module.
//! No filesystem, timing, or external dependencies.

#![allow(clippy::unwrap_used, clippy::panic)]

use std::time::Duration;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{ConfigError, ConfigRead, Document};

const PERSON: &str = r#"{
    "id": 1,
    "name": "qwerty",
    "birthday": "12.09.2018",
    "to_pay_in": "30m",
    "nicknames": ["a", "b", "c"],
    "premium": true,
    "revision": 18446744073709551615,
    "address": {
        "city": "Moscow",
        "street": "Lenina str."
    }
}"#;

#[test]
fn parses_object_document() {
    let doc = Document::parse(PERSON).unwrap();

    assert_eq!(doc.len(), 8);
    assert!(doc.contains_key("address"));
    assert!(!doc.is_empty());
}

#[test]
fn rejects_top_level_array() {
    let text = r#"[{"id": 1}, {"id": 2}]"#;

    assert!(matches!(
        Document::parse(text),
        Err(ConfigError::InvalidRoot)
    ));
}

#[test]
fn rejects_top_level_scalar() {
    assert!(matches!(
        Document::parse("42"),
        Err(ConfigError::InvalidRoot)
    ));
}

#[test]
fn rejects_malformed_json() {
    let text = r#"{ qwe: "qwe" }"#;

    assert!(matches!(
        Document::parse(text),
        Err(ConfigError::Parse { .. })
    ));
}

#[test]
fn section_returns_independent_document() {
    let doc = Document::parse(PERSON).unwrap();
    let address = doc.section("address").unwrap();

    assert_eq!(address.get("city", String::new()), "Moscow");
    assert_eq!(address.get("street", String::new()), "Lenina str.");
}

#[test]
fn section_of_missing_key_fails() {
    let doc = Document::parse(PERSON).unwrap();

    assert!(matches!(
        doc.section("missing"),
        Err(ConfigError::KeyNotFound(key)) if key == "missing"
    ));
}

#[test]
fn section_of_non_object_value_fails() {
    let doc = Document::parse(PERSON).unwrap();

    assert!(matches!(
        doc.section("name"),
        Err(ConfigError::Decode { key, .. }) if key == "name"
    ));
}

#[test]
fn decodes_scalar_types() {
    let doc = Document::parse(PERSON).unwrap();

    assert_eq!(doc.decode::<i64>("id").unwrap(), 1);
    assert_eq!(doc.decode::<u64>("revision").unwrap(), u64::MAX);
    assert_eq!(doc.decode::<String>("name").unwrap(), "qwerty");
    assert!(doc.decode::<bool>("premium").unwrap());
}

#[test]
fn decode_of_missing_key_fails() {
    let doc = Document::parse(PERSON).unwrap();

    assert!(matches!(
        doc.decode::<i64>("missing"),
        Err(ConfigError::KeyNotFound(key)) if key == "missing"
    ));
}

#[test]
fn decode_of_mismatched_type_fails() {
    let doc = Document::parse(PERSON).unwrap();

    assert!(matches!(
        doc.decode::<i64>("name"),
        Err(ConfigError::Decode { key, .. }) if key == "name"
    ));
}

#[test]
fn decodes_date_in_day_month_year_layout() {
    let doc = Document::parse(PERSON).unwrap();
    let birthday: NaiveDate = doc.decode("birthday").unwrap();

    assert_eq!(birthday, NaiveDate::from_ymd_opt(2018, 9, 12).unwrap());
}

#[test]
fn decodes_unpadded_date() {
    let doc = Document::parse(r#"{"since": "2.1.2006"}"#).unwrap();
    let since: NaiveDate = doc.decode("since").unwrap();

    assert_eq!(since, NaiveDate::from_ymd_opt(2006, 1, 2).unwrap());
}

#[test]
fn rejects_date_with_other_layout() {
    let doc = Document::parse(r#"{"since": "2018-09-12"}"#).unwrap();

    assert!(matches!(
        doc.decode::<NaiveDate>("since"),
        Err(ConfigError::Decode { key, .. }) if key == "since"
    ));
}

#[test]
fn decodes_duration_strings() {
    let doc = Document::parse(
        r#"{"to_pay_in": "30m", "timeout": "500ms", "shift": "2h", "grace": "1h30m"}"#,
    )
    .unwrap();

    assert_eq!(
        doc.decode::<Duration>("to_pay_in").unwrap(),
        Duration::from_secs(30 * 60)
    );
    assert_eq!(
        doc.decode::<Duration>("timeout").unwrap(),
        Duration::from_millis(500)
    );
    assert_eq!(
        doc.decode::<Duration>("shift").unwrap(),
        Duration::from_secs(2 * 3600)
    );
    assert_eq!(
        doc.decode::<Duration>("grace").unwrap(),
        Duration::from_secs(90 * 60)
    );
}

#[test]
fn rejects_malformed_duration() {
    let doc = Document::parse(r#"{"to_pay_in": "half an hour"}"#).unwrap();

    assert!(matches!(
        doc.decode::<Duration>("to_pay_in"),
        Err(ConfigError::Decode { key, .. }) if key == "to_pay_in"
    ));
}

#[test]
fn decodes_string_sequence_in_order() {
    let doc = Document::parse(PERSON).unwrap();

    assert_eq!(
        doc.decode::<Vec<String>>("nicknames").unwrap(),
        vec!["a", "b", "c"]
    );
}

#[test]
fn get_falls_back_to_default_on_any_error() {
    let doc = Document::parse(PERSON).unwrap();

    assert_eq!(doc.get("missing", 42i64), 42);
    assert_eq!(doc.get("name", 42i64), 42);
    assert_eq!(doc.get("id", 42i64), 1);
}

#[test]
#[should_panic(expected = "required config key 'missing'")]
fn must_get_panics_on_missing_key() {
    let doc = Document::parse(PERSON).unwrap();
    let _: i64 = doc.must_get("missing");
}

#[test]
#[should_panic(expected = "required config key 'name'")]
fn must_get_panics_on_type_mismatch() {
    let doc = Document::parse(PERSON).unwrap();
    let _: i64 = doc.must_get("name");
}

#[test]
fn must_get_returns_well_typed_value() {
    let doc = Document::parse(PERSON).unwrap();

    assert_eq!(doc.must_get::<String>("name"), "qwerty");
    assert_eq!(doc.must_get::<i64>("id"), 1);
}

#[test]
fn section_as_text_returns_raw_encoding() {
    let doc = Document::parse(PERSON).unwrap();
    let text = doc.section_as_text("nicknames").unwrap();

    assert_eq!(text, r#"["a", "b", "c"]"#);
}

#[test]
fn section_as_text_round_trips_through_parse() {
    let doc = Document::parse(PERSON).unwrap();

    let reparsed = Document::parse(&doc.section_as_text("address").unwrap()).unwrap();
    let section = doc.section("address").unwrap();

    assert_eq!(reparsed, section);
}

#[test]
fn unmarshal_section_into_caller_shape() {
    #[derive(Debug, Deserialize, PartialEq)]
    struct Address {
        city: String,
        street: String,
    }

    let doc = Document::parse(PERSON).unwrap();
    let address: Address = doc.unmarshal_section("address").unwrap();

    assert_eq!(
        address,
        Address {
            city: "Moscow".to_string(),
            street: "Lenina str.".to_string(),
        }
    );
}

#[test]
fn unmarshal_section_of_missing_key_fails() {
    let doc = Document::parse(PERSON).unwrap();

    assert!(matches!(
        doc.unmarshal_section::<Vec<String>>("missing"),
        Err(ConfigError::KeyNotFound(key)) if key == "missing"
    ));
}
