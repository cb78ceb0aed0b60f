//! Tag views

use std::collections::{BTreeMap, BTreeSet};

use crate::content::Article;

/// Every distinct tag across `articles`, in ascending order.
///
/// The caller decides whether to pass only published articles.
pub fn all_tags<'a, I>(articles: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a Article>,
{
    articles
        .into_iter()
        .flat_map(|a| a.tags.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Distinct tags with the number of articles carrying each, by tag name.
///
/// A tag repeated within one article counts once for it.
pub fn tag_counts<'a, I>(articles: I) -> Vec<(String, usize)>
where
    I: IntoIterator<Item = &'a Article>,
{
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();

    for article in articles {
        let unique: BTreeSet<&str> = article.tags.iter().map(String::as_str).collect();
        for tag in unique {
            *counts.entry(tag).or_insert(0) += 1;
        }
    }

    counts
        .into_iter()
        .map(|(tag, count)| (tag.to_string(), count))
        .collect()
}
