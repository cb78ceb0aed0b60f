//! Site configuration (blog.yml)

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,
    pub url: String,
    pub author: String,

    // Content
    #[serde(default)]
    pub content: ContentConfig,

    // Rendering
    #[serde(default)]
    pub highlight: HighlightConfig,

    // Writing
    pub new_article_name: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),
            url: "http://example.com".to_string(),
            author: String::new(),

            content: ContentConfig::default(),
            highlight: HighlightConfig::default(),

            new_article_name: ":title.md".to_string(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {:?}", path))?;
        let config: SiteConfig = serde_yaml::from_str(&content)
            .with_context(|| format!("failed to parse config {:?}", path))?;
        tracing::debug!("Loaded site config from {:?}", path);
        Ok(config)
    }
}

/// Where articles live and which files count as articles
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Content base directory, relative to the site directory
    pub base: String,
    /// Glob pattern matched against paths relative to `base`
    pub pattern: String,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            base: "src/data/articles".to_string(),
            pattern: "**/*.md".to_string(),
        }
    }
}

/// Code block highlighting configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    pub theme: String,
    pub line_number: bool,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            theme: "base16-ocean.dark".to_string(),
            line_number: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.url, "http://example.com");
        assert_eq!(config.content.base, "src/data/articles");
        assert_eq!(config.content.pattern, "**/*.md");
        assert!(!config.highlight.line_number);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: davideme.dev
url: https://davideme.dev
author: David
content:
  base: content/posts
highlight:
  line_number: true
analytics: plausible
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "davideme.dev");
        assert_eq!(config.url, "https://davideme.dev");
        assert_eq!(config.content.base, "content/posts");
        // Unspecified nested fields keep their defaults
        assert_eq!(config.content.pattern, "**/*.md");
        assert_eq!(config.highlight.theme, "base16-ocean.dark");
        assert!(config.highlight.line_number);
        assert!(config.extra.contains_key("analytics"));
    }

    #[test]
    fn test_load_reports_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blog.yml");
        fs::write(&path, "title: [unclosed\n").unwrap();

        let err = SiteConfig::load(&path).unwrap_err();
        assert!(format!("{:#}", err).contains("blog.yml"));
    }
}
