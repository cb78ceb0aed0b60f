//! Article schema: validates raw front-matter into typed fields
//!
//! Required fields must be present, optional fields must have the right type
//! when present, and defaulted fields fall back to their defaults. Keys the
//! schema does not know about are kept, in order, in `extra`.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use indexmap::IndexMap;
use serde_yaml::Value;
use std::collections::HashMap;

use super::frontmatter::{value_kind, FrontMatter};

/// Front-matter keys with a schema rule
const SCHEMA_KEYS: &[&str] = &[
    "title",
    "author",
    "description",
    "publishDate",
    "updatedDate",
    "tags",
    "draft",
    "featured",
    "slug",
];

/// A single schema violation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub reason: String,
}

impl FieldError {
    fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            reason: reason.into(),
        }
    }

    fn wrong_type(field: &str, expected: &str, found: &Value) -> Self {
        Self::new(
            field,
            format!("must be {}, found {}", expected, value_kind(found)),
        )
    }
}

/// Validated front-matter of one article
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleData {
    pub title: String,
    pub author: String,
    pub description: Option<String>,
    pub publish_date: Option<DateTime<Utc>>,
    pub updated_date: Option<DateTime<Utc>>,
    pub tags: Vec<String>,
    pub draft: bool,
    pub featured: bool,
    /// Explicit id override
    pub slug: Option<String>,
    pub extra: IndexMap<String, Value>,
}

impl ArticleData {
    /// Validate raw front-matter, reporting the first violated field
    pub fn from_frontmatter(frontmatter: FrontMatter) -> Result<Self, FieldError> {
        let mut known: HashMap<String, Value> = HashMap::new();
        let mut extra = IndexMap::new();

        for (key, value) in frontmatter.into_fields() {
            match key {
                Value::String(key) if SCHEMA_KEYS.contains(&key.as_str()) => {
                    known.insert(key, value);
                }
                Value::String(key) => {
                    extra.insert(key, value);
                }
                other => {
                    tracing::debug!("Ignoring non-string front-matter key {:?}", other);
                }
            }
        }

        Ok(Self {
            title: required_string(&mut known, "title")?,
            author: required_string(&mut known, "author")?,
            description: optional_string(&mut known, "description")?,
            publish_date: optional_date(&mut known, "publishDate")?,
            updated_date: optional_date(&mut known, "updatedDate")?,
            tags: string_list(&mut known, "tags")?,
            draft: flag(&mut known, "draft")?,
            featured: flag(&mut known, "featured")?,
            slug: optional_string(&mut known, "slug")?,
            extra,
        })
    }
}

/// Remove a field, treating YAML `null` as absent
fn take(fields: &mut HashMap<String, Value>, name: &str) -> Option<Value> {
    fields.remove(name).filter(|value| !value.is_null())
}

fn required_string(fields: &mut HashMap<String, Value>, name: &str) -> Result<String, FieldError> {
    optional_string(fields, name)?.ok_or_else(|| FieldError::new(name, "is required"))
}

fn optional_string(
    fields: &mut HashMap<String, Value>,
    name: &str,
) -> Result<Option<String>, FieldError> {
    match take(fields, name) {
        None => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(other) => Err(FieldError::wrong_type(name, "a string", &other)),
    }
}

fn optional_date(
    fields: &mut HashMap<String, Value>,
    name: &str,
) -> Result<Option<DateTime<Utc>>, FieldError> {
    take(fields, name)
        .map(|value| coerce_date(&value).map_err(|reason| FieldError::new(name, reason)))
        .transpose()
}

fn string_list(fields: &mut HashMap<String, Value>, name: &str) -> Result<Vec<String>, FieldError> {
    let items = match take(fields, name) {
        None => return Ok(Vec::new()),
        Some(Value::Sequence(items)) => items,
        Some(other) => {
            return Err(FieldError::wrong_type(
                name,
                "a sequence of strings",
                &other,
            ))
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(i, item)| match item {
            Value::String(s) => Ok(s),
            other => Err(FieldError::wrong_type(
                &format!("{}[{}]", name, i),
                "a string",
                &other,
            )),
        })
        .collect()
}

fn flag(fields: &mut HashMap<String, Value>, name: &str) -> Result<bool, FieldError> {
    match take(fields, name) {
        None => Ok(false),
        Some(Value::Bool(b)) => Ok(b),
        Some(other) => Err(FieldError::wrong_type(name, "a boolean", &other)),
    }
}

/// Coerce a front-matter value to an instant.
///
/// Strings are parsed as dates; numbers are milliseconds since the Unix epoch.
pub fn coerce_date(value: &Value) -> Result<DateTime<Utc>, String> {
    match value {
        Value::String(s) => {
            parse_date_string(s).ok_or_else(|| format!("is not a valid date: `{}`", s))
        }
        Value::Number(n) => {
            let millis = n
                .as_i64()
                .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f.trunc() as i64));
            millis
                .and_then(DateTime::from_timestamp_millis)
                .ok_or_else(|| format!("is not a valid timestamp: {}", n))
        }
        other => Err(format!("must be a date, found {}", value_kind(other))),
    }
}

/// Parse a date string in various formats.
///
/// Strings without an offset are taken as UTC.
fn parse_date_string(s: &str) -> Option<DateTime<Utc>> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f%:z") {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(s) {
        return Some(dt.with_timezone(&Utc));
    }

    let datetime_formats = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M",
        "%Y/%m/%d %H:%M:%S",
        "%Y/%m/%d %H:%M",
    ];
    for fmt in datetime_formats {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.and_utc());
        }
    }

    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d.and_hms_opt(0, 0, 0)?.and_utc());
        }
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn validate(yaml: &str) -> Result<ArticleData, FieldError> {
        let content = format!("---\n{}---\n", yaml);
        let (fm, _) = FrontMatter::parse(&content).unwrap();
        ArticleData::from_frontmatter(fm)
    }

    #[test]
    fn test_defaults() {
        let data = validate("title: Hello\nauthor: David\n").unwrap();
        assert_eq!(data.title, "Hello");
        assert_eq!(data.author, "David");
        assert_eq!(data.description, None);
        assert_eq!(data.publish_date, None);
        assert_eq!(data.updated_date, None);
        assert!(data.tags.is_empty());
        assert!(!data.draft);
        assert!(!data.featured);
        assert_eq!(data.slug, None);
        assert!(data.extra.is_empty());
    }

    #[test]
    fn test_full_record() {
        let data = validate(
            r#"title: Rust at the Edge
author: David
description: Notes from a migration
publishDate: 2024-03-01
updatedDate: 2024-03-05T08:30:00Z
tags: [rust, wasm, rust]
draft: false
featured: true
"#,
        )
        .unwrap();
        assert_eq!(data.description.as_deref(), Some("Notes from a migration"));
        assert_eq!(
            data.publish_date,
            Some(Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(
            data.updated_date,
            Some(Utc.with_ymd_and_hms(2024, 3, 5, 8, 30, 0).unwrap())
        );
        // Duplicates within one article are kept
        assert_eq!(data.tags, vec!["rust", "wasm", "rust"]);
        assert!(data.featured);
    }

    #[test]
    fn test_missing_required_fields() {
        let err = validate("author: David\n").unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.reason, "is required");

        let err = validate("title: Hello\n").unwrap_err();
        assert_eq!(err.field, "author");

        let err = validate("title: ~\nauthor: David\n").unwrap_err();
        assert_eq!(err.field, "title");
    }

    #[test]
    fn test_wrong_types() {
        let err = validate("title: 42\nauthor: David\n").unwrap_err();
        assert_eq!(err.field, "title");
        assert_eq!(err.reason, "must be a string, found number");

        let err = validate("title: Hi\nauthor: D\ndraft: \"no\"\n").unwrap_err();
        assert_eq!(err.field, "draft");
        assert_eq!(err.reason, "must be a boolean, found string");

        let err = validate("title: Hi\nauthor: D\ntags: rust\n").unwrap_err();
        assert_eq!(err.field, "tags");

        let err = validate("title: Hi\nauthor: D\ntags: [rust, 7]\n").unwrap_err();
        assert_eq!(err.field, "tags[1]");
    }

    #[test]
    fn test_malformed_date() {
        let err = validate("title: Hi\nauthor: D\npublishDate: someday\n").unwrap_err();
        assert_eq!(err.field, "publishDate");
        assert!(err.reason.contains("someday"));

        let err = validate("title: Hi\nauthor: D\nupdatedDate: true\n").unwrap_err();
        assert_eq!(err.field, "updatedDate");
    }

    #[test]
    fn test_null_optional_fields_are_absent() {
        let data = validate("title: Hi\nauthor: D\ntags:\npublishDate: null\ndraft: ~\n").unwrap();
        assert!(data.tags.is_empty());
        assert_eq!(data.publish_date, None);
        assert!(!data.draft);
    }

    #[test]
    fn test_extra_fields_keep_order() {
        let data = validate("title: Hi\nzeta: 1\nauthor: D\nalpha: two\n").unwrap();
        let keys: Vec<_> = data.extra.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
    }

    #[test]
    fn test_coerce_date_formats() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 15, 10, 30, 0).unwrap();
        for input in [
            "2024-01-15T10:30:00Z",
            "2024-01-15T12:30:00+02:00",
            "2024-01-15 10:30:00",
            "2024-01-15T10:30:00",
            "2024-01-15T10:30",
            "2024/01/15 10:30:00",
            "Mon, 15 Jan 2024 10:30:00 +0000",
        ] {
            let value = Value::String(input.to_string());
            assert_eq!(coerce_date(&value), Ok(expected), "input: {}", input);
        }

        let midnight = Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap();
        assert_eq!(coerce_date(&Value::String("2024/01/15".into())), Ok(midnight));
    }

    #[test]
    fn test_coerce_numeric_timestamp() {
        let value: Value = serde_yaml::from_str("1700000000000").unwrap();
        assert_eq!(
            coerce_date(&value),
            Ok(Utc.with_ymd_and_hms(2023, 11, 14, 22, 13, 20).unwrap())
        );
    }
}
