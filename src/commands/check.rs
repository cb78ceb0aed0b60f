//! Validate site content

use anyhow::Result;

use crate::content::ArticleCollection;
use crate::Blog;

/// Load every article and print a summary; any content error fails the run
pub fn run(blog: &Blog) -> Result<()> {
    let collection = blog.load_articles()?;
    println!("{}", summarize(&collection));
    Ok(())
}

/// One-line summary of a loaded collection
pub fn summarize(collection: &ArticleCollection) -> String {
    let published = collection.published();
    format!(
        "{} articles: {} published, {} drafts, {} featured, {} tags",
        collection.len(),
        published.len(),
        collection.len() - published.len(),
        collection.featured().len(),
        collection.tags().len()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Article;

    #[test]
    fn test_summarize() {
        let mut draft = Article::new("draft", "Draft", "D");
        draft.draft = true;
        draft.tags = vec!["hidden".into()];
        let mut live = Article::new("live", "Live", "D");
        live.featured = true;
        live.tags = vec!["rust".into(), "astro".into()];

        let collection = ArticleCollection::new(vec![draft, live]);
        assert_eq!(
            summarize(&collection),
            "2 articles: 1 published, 1 drafts, 1 featured, 2 tags"
        );
    }
}
