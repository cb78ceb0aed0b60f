//! article-content: the content layer of a static blog
//!
//! Articles are markdown files with YAML front-matter. This crate discovers
//! them under a content directory, validates their front-matter against the
//! article schema, and offers pure query helpers (published, featured, by
//! tag, all tags) over the loaded collection.

pub mod commands;
pub mod config;
pub mod content;
pub mod query;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub use content::{Article, ArticleCollection, ContentError};

/// Site configuration file name
pub const CONFIG_FILE: &str = "blog.yml";

/// A blog site rooted at a directory
#[derive(Debug, Clone)]
pub struct Blog {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Content (articles) directory
    pub content_dir: PathBuf,
}

impl Blog {
    /// Create a new Blog instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join(CONFIG_FILE);

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            tracing::debug!("No {} in {:?}, using defaults", CONFIG_FILE, base_dir);
            config::SiteConfig::default()
        };

        Ok(Self::with_config(base_dir, config))
    }

    /// Create a Blog from an already loaded configuration
    pub fn with_config(base_dir: PathBuf, config: config::SiteConfig) -> Self {
        let content_dir = base_dir.join(&config.content.base);
        Self {
            config,
            base_dir,
            content_dir,
        }
    }

    /// Load and validate every article of the site
    pub fn load_articles(&self) -> std::result::Result<ArticleCollection, ContentError> {
        content::ContentLoader::from_config(&self.base_dir, &self.config.content)?.load()
    }

    /// Scaffold a new draft article
    pub fn new_article(&self, title: &str, author: Option<&str>) -> Result<PathBuf> {
        commands::new::create_article(self, title, author)
    }
}
