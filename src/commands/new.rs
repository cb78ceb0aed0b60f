//! Create a new article

use anyhow::Result;
use serde::Serialize;
use std::fs;
use std::path::PathBuf;

use crate::Blog;

/// Front-matter written into a fresh article
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Scaffold<'a> {
    title: &'a str,
    author: &'a str,
    publish_date: String,
    tags: Vec<String>,
    draft: bool,
}

/// Create a new draft article under the content directory
pub fn create_article(blog: &Blog, title: &str, author: Option<&str>) -> Result<PathBuf> {
    let now = chrono::Local::now();

    let author = match author {
        Some(author) => author,
        None if !blog.config.author.is_empty() => blog.config.author.as_str(),
        None => anyhow::bail!("No author given and `author` is not set in the site config"),
    };

    let slug = slug::slugify(title);
    let filename = blog
        .config
        .new_article_name
        .replace(":title", &slug)
        .replace(":year", &now.format("%Y").to_string())
        .replace(":month", &now.format("%m").to_string())
        .replace(":day", &now.format("%d").to_string());

    let file_path = blog.content_dir.join(filename);

    // Check if file already exists
    if file_path.exists() {
        anyhow::bail!("File already exists: {:?}", file_path);
    }

    let frontmatter = serde_yaml::to_string(&Scaffold {
        title,
        author,
        publish_date: now.format("%Y-%m-%d").to_string(),
        tags: Vec::new(),
        draft: true,
    })?;

    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, format!("---\n{}---\n\n", frontmatter))?;

    tracing::info!("Created: {:?}", file_path);

    Ok(file_path)
}
