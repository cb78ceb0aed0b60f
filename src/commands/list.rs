//! List site articles

use anyhow::Result;

use crate::content::{Article, ArticleCollection};
use crate::Blog;

/// List articles of one view, optionally narrowed to a tag
pub fn run(blog: &Blog, view: &str, tag: Option<&str>, json: bool) -> Result<()> {
    let collection = blog.load_articles()?;
    let articles = select(&collection, view, tag)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&articles)?);
    } else {
        print!("{}", format_listing(&articles));
    }

    Ok(())
}

/// Pick the articles of a named view
pub fn select<'a>(
    collection: &'a ArticleCollection,
    view: &str,
    tag: Option<&str>,
) -> Result<Vec<&'a Article>> {
    let articles = match view {
        "published" | "post" | "posts" => collection.published(),
        "featured" => collection.featured(),
        "draft" | "drafts" => collection.drafts(),
        "all" => collection.iter().collect(),
        _ => {
            anyhow::bail!(
                "Unknown type: {}. Available: published, featured, drafts, all",
                view
            );
        }
    };

    Ok(match tag {
        Some(tag) => articles.into_iter().filter(|a| a.has_tag(tag)).collect(),
        None => articles,
    })
}

/// Human-readable listing, one article per line
pub fn format_listing(articles: &[&Article]) -> String {
    let mut out = format!("Articles ({}):\n", articles.len());
    for article in articles {
        let date = article
            .publish_date
            .map(|d| d.format("%Y-%m-%d").to_string())
            .unwrap_or_else(|| "undated   ".to_string());
        let marker = if article.featured { " *" } else { "" };
        out.push_str(&format!(
            "  {} - {} [{}]{}\n",
            date, article.title, article.id, marker
        ));
    }
    out
}
