//! Front-matter parsing

use serde_yaml::{Mapping, Value};
use thiserror::Error;

/// Why a frontmatter block could not be read
#[derive(Debug, Error)]
pub enum FrontMatterError {
    #[error("missing closing `---` delimiter")]
    Unterminated,

    #[error("expected a mapping, found {0}")]
    NotMapping(&'static str),

    #[error("{0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Raw, unvalidated front-matter of an article
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrontMatter {
    fields: Mapping,
}

impl FrontMatter {
    /// Parse front-matter from content string
    /// Returns (front_matter, remaining_content)
    ///
    /// Content that does not open with a `---` line has no front-matter and
    /// yields an empty record.
    pub fn parse(content: &str) -> Result<(Self, &str), FrontMatterError> {
        let content = content.strip_prefix('\u{feff}').unwrap_or(content);

        let (yaml, body) = match split(content)? {
            Some(parts) => parts,
            None => return Ok((FrontMatter::default(), content)),
        };

        if yaml.trim().is_empty() {
            return Ok((FrontMatter::default(), body));
        }

        let fields = match serde_yaml::from_str::<Value>(yaml)? {
            Value::Mapping(fields) => fields,
            // A block holding only comments
            Value::Null => Mapping::new(),
            other => return Err(FrontMatterError::NotMapping(value_kind(&other))),
        };

        Ok((Self { fields }, body))
    }

    /// Look up a raw field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn into_fields(self) -> Mapping {
        self.fields
    }
}

/// Split `---` delimited YAML from the body that follows it
fn split(content: &str) -> Result<Option<(&str, &str)>, FrontMatterError> {
    let rest = match content.find('\n') {
        Some(pos) if content[..pos].trim_end() == "---" => &content[pos + 1..],
        _ => return Ok(None),
    };

    let mut offset = 0;
    for line in rest.split_inclusive('\n') {
        if line.trim_end() == "---" {
            return Ok(Some((&rest[..offset], &rest[offset + line.len()..])));
        }
        offset += line.len();
    }

    Err(FrontMatterError::Unterminated)
}

/// Human-readable name of a YAML value's type
pub(crate) fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
