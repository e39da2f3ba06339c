//! News entities and headline selection.

/// Maximum number of articles returned for a country.
pub const MAX_HEADLINES: usize = 5;

/// A single news article about the subject's country.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsItem {
    pub title: String,
    pub image_url: String,
    pub description: String,
    pub article_url: String,
}

/// Case-insensitive check that a headline mentions the country.
///
/// Search providers match loosely (stemming, other fields), so results are
/// re-checked locally against the raw title.
pub fn mentions_country(title: &str, country: &str) -> bool {
    title.to_lowercase().contains(&country.to_lowercase())
}

/// Keeps the first [`MAX_HEADLINES`] items whose raw title mentions `country`.
///
/// `title_of` extracts the upstream title; items without one never match.
/// Upstream ordering is preserved.
pub fn select_headlines<T, F>(items: Vec<T>, country: &str, title_of: F) -> Vec<T>
where
    F: Fn(&T) -> Option<&str>,
{
    items
        .into_iter()
        .filter(|item| title_of(item).is_some_and(|t| mentions_country(t, country)))
        .take(MAX_HEADLINES)
        .collect()
}
