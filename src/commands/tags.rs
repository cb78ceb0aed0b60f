//! List article tags

use anyhow::Result;

use crate::content::Article;
use crate::query::{all_tags, tag_counts};
use crate::Blog;

/// Print the tags of published articles, or of every article with `all`
pub fn run(blog: &Blog, all: bool, count: bool) -> Result<()> {
    let collection = blog.load_articles()?;
    let articles: Vec<&Article> = if all {
        collection.iter().collect()
    } else {
        collection.published()
    };

    print!("{}", format_tags(&articles, count));
    Ok(())
}

pub fn format_tags(articles: &[&Article], count: bool) -> String {
    let lines: Vec<String> = if count {
        tag_counts(articles.iter().copied())
            .into_iter()
            .map(|(tag, n)| format!("  {} ({})", tag, n))
            .collect()
    } else {
        all_tags(articles.iter().copied())
            .into_iter()
            .map(|tag| format!("  {}", tag))
            .collect()
    };

    let mut out = format!("Tags ({}):\n", lines.len());
    for line in lines {
        out.push_str(&line);
        out.push('\n');
    }
    out
}
