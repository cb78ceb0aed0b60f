//! Article model

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::Serialize;
use std::path::{Path, PathBuf};

use super::schema::ArticleData;

/// One markdown-backed article
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    /// Identity key, unique within a collection
    pub id: String,

    /// Source file the article was loaded from
    pub file_path: PathBuf,

    pub title: String,

    pub author: String,

    pub description: Option<String>,

    pub publish_date: Option<DateTime<Utc>>,

    pub updated_date: Option<DateTime<Utc>>,

    pub tags: Vec<String>,

    /// Drafts are excluded from every public listing
    pub draft: bool,

    pub featured: bool,

    /// Raw markdown body (everything after the front-matter)
    #[serde(skip)]
    pub body: String,

    /// Front-matter fields outside the schema
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub extra: IndexMap<String, serde_yaml::Value>,
}

impl Article {
    /// Create a new article with minimal required fields
    pub fn new(id: impl Into<String>, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            file_path: PathBuf::new(),
            title: title.into(),
            author: author.into(),
            description: None,
            publish_date: None,
            updated_date: None,
            tags: Vec::new(),
            draft: false,
            featured: false,
            body: String::new(),
            extra: IndexMap::new(),
        }
    }

    /// Build an article from validated front-matter
    pub fn from_data(id: String, file_path: PathBuf, data: ArticleData, body: String) -> Self {
        Self {
            id,
            file_path,
            title: data.title,
            author: data.author,
            description: data.description,
            publish_date: data.publish_date,
            updated_date: data.updated_date,
            tags: data.tags,
            draft: data.draft,
            featured: data.featured,
            body,
            extra: data.extra,
        }
    }

    /// Date used for chronological ordering; undated articles count as the epoch
    pub fn sort_date(&self) -> DateTime<Utc> {
        // DateTime<Utc>::default() is 1970-01-01T00:00:00Z
        self.publish_date.unwrap_or_default()
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

/// Derive an article id from its path relative to the content base.
///
/// Each segment is slugified, the extension dropped, and a trailing
/// `/index` removed so that `guides/index.md` becomes `guides`.
pub fn derive_id(relative: &Path) -> String {
    let segments: Vec<String> = relative
        .with_extension("")
        .components()
        .map(|c| slug::slugify(c.as_os_str().to_string_lossy()))
        .collect();

    let id = segments.join("/");
    match id.strip_suffix("/index") {
        Some(parent) => parent.to_string(),
        None => id,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_derive_id() {
        assert_eq!(derive_id(Path::new("hello-world.md")), "hello-world");
        assert_eq!(derive_id(Path::new("My First Post.md")), "my-first-post");
        assert_eq!(derive_id(Path::new("my_post.md")), "my-post");
        assert_eq!(
            derive_id(Path::new("2024/Rust Notes/part-1.md")),
            "2024/rust-notes/part-1"
        );
    }

    #[test]
    fn test_derive_id_index() {
        assert_eq!(derive_id(Path::new("guides/index.md")), "guides");
        assert_eq!(derive_id(Path::new("a/b/index.md")), "a/b");
        // A top-level index keeps its name
        assert_eq!(derive_id(Path::new("index.md")), "index");
    }

    #[cfg(unix)]
    #[test]
    fn test_derive_id_non_utf8_segment() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let relative = Path::new(OsStr::from_bytes(b"n\xffested")).join("deep.md");
        let id = derive_id(&relative);
        assert!(id.ends_with("/deep"), "id: {}", id);
        assert_eq!(id.matches('/').count(), 1);
    }

    #[test]
    fn test_sort_date_defaults_to_epoch() {
        let mut article = Article::new("a", "A", "D");
        assert_eq!(article.sort_date(), Utc.timestamp_opt(0, 0).unwrap());

        let date = Utc.with_ymd_and_hms(2024, 5, 1, 0, 0, 0).unwrap();
        article.publish_date = Some(date);
        assert_eq!(article.sort_date(), date);
    }

    #[test]
    fn test_has_tag_is_case_sensitive() {
        let mut article = Article::new("a", "A", "D");
        article.tags = vec!["Rust".to_string()];
        assert!(article.has_tag("Rust"));
        assert!(!article.has_tag("rust"));
    }

    #[test]
    fn test_serialize_camel_case() {
        let mut article = Article::new("hello", "Hello", "David");
        article.publish_date = Some(Utc.with_ymd_and_hms(2024, 1, 15, 0, 0, 0).unwrap());
        article.body = "secret body".to_string();

        let json = serde_json::to_value(&article).unwrap();
        assert_eq!(json["publishDate"], "2024-01-15T00:00:00Z");
        assert_eq!(json["filePath"], "");
        assert!(json.get("body").is_none());
        assert!(json.get("extra").is_none());
    }
}
