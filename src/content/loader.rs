//! Content loader - discovers and parses articles under the content base

use glob::{MatchOptions, Pattern};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::article::derive_id;
use super::schema::ArticleData;
use super::{Article, ArticleCollection, ContentError, FrontMatter};
use crate::config::ContentConfig;

/// `*` stays within one directory, `**` spans any depth
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Loads articles from a content base directory
#[derive(Debug, Clone)]
pub struct ContentLoader {
    base: PathBuf,
    pattern: Pattern,
}

impl ContentLoader {
    /// Create a loader for files under `base` whose relative path matches `pattern`
    pub fn new(base: impl Into<PathBuf>, pattern: &str) -> Result<Self, ContentError> {
        Ok(Self {
            base: base.into(),
            pattern: Pattern::new(pattern)?,
        })
    }

    /// Create a loader from the content section of the site config
    pub fn from_config(site_dir: &Path, config: &ContentConfig) -> Result<Self, ContentError> {
        Self::new(site_dir.join(&config.base), &config.pattern)
    }

    /// Load every matching article.
    ///
    /// The first invalid file aborts the load.
    pub fn load(&self) -> Result<ArticleCollection, ContentError> {
        if !self.base.is_dir() {
            tracing::warn!("Content directory {:?} does not exist", self.base);
            return Ok(ArticleCollection::default());
        }

        let mut articles = Vec::new();
        let mut seen: HashMap<String, PathBuf> = HashMap::new();

        for path in self.discover() {
            let article = self.load_article(&path)?;
            if let Some(first) = seen.insert(article.id.clone(), path.clone()) {
                return Err(ContentError::DuplicateId {
                    id: article.id,
                    first,
                    second: path,
                });
            }
            articles.push(article);
        }

        if articles.is_empty() {
            tracing::warn!(
                "No files found matching {:?} in {:?}",
                self.pattern.as_str(),
                self.base
            );
        } else {
            tracing::info!("Loaded {} articles from {:?}", articles.len(), self.base);
        }

        Ok(ArticleCollection::new(articles))
    }

    /// Matching files in file-name order
    fn discover(&self) -> Vec<PathBuf> {
        let mut paths = Vec::new();

        for entry in WalkDir::new(&self.base)
            .follow_links(true)
            .sort_by_file_name()
        {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    tracing::warn!("Skipping unreadable entry: {}", e);
                    continue;
                }
            };

            if !entry.file_type().is_file() {
                continue;
            }

            let matched = entry
                .path()
                .strip_prefix(&self.base)
                .map(|relative| self.matches(relative))
                .unwrap_or(false);
            if matched {
                paths.push(entry.into_path());
            }
        }

        paths
    }

    /// Match a base-relative path using `/` separators on every platform
    fn matches(&self, relative: &Path) -> bool {
        // Non-UTF-8 segments are kept (lossily) so nesting is never flattened
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        self.pattern.matches_with(&segments.join("/"), MATCH_OPTIONS)
    }

    /// Load a single article from a file
    fn load_article(&self, path: &Path) -> Result<Article, ContentError> {
        let content =
            fs::read_to_string(path).map_err(|e| ContentError::Io(path.to_path_buf(), e))?;

        let (frontmatter, body) =
            FrontMatter::parse(&content).map_err(|e| ContentError::InvalidFrontmatter {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        let data = ArticleData::from_frontmatter(frontmatter).map_err(|e| {
            ContentError::SchemaValidation {
                path: path.to_path_buf(),
                field: e.field,
                reason: e.reason,
            }
        })?;

        let relative = path.strip_prefix(&self.base).unwrap_or(path);
        let id = data.slug.clone().unwrap_or_else(|| derive_id(relative));
        tracing::debug!("Loaded article `{}` from {:?}", id, path);

        Ok(Article::from_data(
            id,
            path.to_path_buf(),
            data,
            body.to_string(),
        ))
    }
}
