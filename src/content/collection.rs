//! The loaded article collection

use super::Article;
use crate::query;

/// Every article loaded from one content source.
///
/// The collection is built once and then only read; the query methods
/// borrow from it and never reorder or mutate the stored articles.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArticleCollection {
    articles: Vec<Article>,
}

impl ArticleCollection {
    pub fn new(articles: Vec<Article>) -> Self {
        Self { articles }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Article> {
        self.articles.iter()
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// Look up an article by id
    pub fn get(&self, id: &str) -> Option<&Article> {
        self.articles.iter().find(|a| a.id == id)
    }

    /// Non-draft articles, newest first
    pub fn published(&self) -> Vec<&Article> {
        query::published_articles(&self.articles)
    }

    /// Draft articles, newest first
    pub fn drafts(&self) -> Vec<&Article> {
        query::draft_articles(&self.articles)
    }

    /// Published articles flagged as featured
    pub fn featured(&self) -> Vec<&Article> {
        query::featured_articles(&self.articles)
    }

    /// Published articles carrying `tag`
    pub fn by_tag(&self, tag: &str) -> Vec<&Article> {
        query::articles_by_tag(&self.articles, tag)
    }

    /// Sorted, deduplicated tags of the published articles
    pub fn tags(&self) -> Vec<String> {
        query::all_tags(self.published())
    }
}
