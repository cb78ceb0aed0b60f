//! Render one article body to HTML

use anyhow::Result;

use crate::content::MarkdownRenderer;
use crate::Blog;

/// Print the rendered HTML of the article with `id`
pub fn run(blog: &Blog, id: &str) -> Result<()> {
    let collection = blog.load_articles()?;
    let Some(article) = collection.get(id) else {
        anyhow::bail!("No article with id `{}`", id);
    };

    let renderer = MarkdownRenderer::with_config(&blog.config.highlight);
    print!("{}", renderer.render(&article.body));
    Ok(())
}
