//! Article views: published, drafts, featured, by tag

use std::cmp::Reverse;

use crate::content::Article;

/// Non-draft articles, newest first.
///
/// Undated articles sort as if published at the Unix epoch, so they come
/// after every article dated later than 1970. Articles sharing a date keep
/// their input order.
pub fn published_articles(articles: &[Article]) -> Vec<&Article> {
    newest_first(articles.iter().filter(|a| !a.draft).collect())
}

/// Draft articles, ordered like [`published_articles`]
pub fn draft_articles(articles: &[Article]) -> Vec<&Article> {
    newest_first(articles.iter().filter(|a| a.draft).collect())
}

/// Published articles flagged as featured, newest first
pub fn featured_articles(articles: &[Article]) -> Vec<&Article> {
    published_articles(articles)
        .into_iter()
        .filter(|a| a.featured)
        .collect()
}

/// Published articles whose tags contain `tag` (exact match), newest first.
///
/// An unknown tag yields an empty list.
pub fn articles_by_tag<'a>(articles: &'a [Article], tag: &str) -> Vec<&'a Article> {
    published_articles(articles)
        .into_iter()
        .filter(|a| a.has_tag(tag))
        .collect()
}

/// The entries directly before and after `id` in an ordered list.
///
/// For a newest-first list that is (newer, older).
pub fn neighbors<'a>(
    list: &[&'a Article],
    id: &str,
) -> (Option<&'a Article>, Option<&'a Article>) {
    let Some(pos) = list.iter().position(|a| a.id == id) else {
        return (None, None);
    };
    let before = pos.checked_sub(1).map(|i| list[i]);
    let after = list.get(pos + 1).copied();
    (before, after)
}

fn newest_first(mut list: Vec<&Article>) -> Vec<&Article> {
    // sort_by_key is stable
    list.sort_by_key(|a| Reverse(a.sort_date()));
    list
}
