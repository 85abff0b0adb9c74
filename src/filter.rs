//! Removal of retracted entries from a raw result list.

use crate::models::Article;

/// Drop every article carrying a removal sentinel, keeping the rest in order.
///
/// `None` (no `articles` in the response, or no response at all) yields an
/// empty list.
pub fn filter_articles(raw: Option<Vec<Article>>) -> Vec<Article> {
    raw.unwrap_or_default()
        .into_iter()
        .filter(|article| !article.is_removed())
        .collect()
}
