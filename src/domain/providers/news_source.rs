//! Source of country news.

use crate::domain::entities::NewsItem;
use crate::error::ProviderError;
use async_trait::async_trait;

/// Searches recent articles mentioning a country in their title.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait NewsSource: Send + Sync {
    /// Returns at most [`crate::domain::entities::news::MAX_HEADLINES`]
    /// articles whose title mentions `country`, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on any failure.
    async fn headlines(&self, country: &str) -> Result<Vec<NewsItem>, ProviderError>;
}
