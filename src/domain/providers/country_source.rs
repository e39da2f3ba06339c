//! Source of country metadata.

use crate::domain::entities::CountryCandidate;
use crate::error::ProviderError;
use async_trait::async_trait;

/// Looks up metadata for a country by its exact name.
///
/// Two implementations are chained by
/// [`crate::application::services::CountryResolver`]:
///
/// - [`crate::infrastructure::providers::CountryLayerClient`] - primary
/// - [`crate::infrastructure::providers::RestCountriesClient`] - fallback
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CountrySource: Send + Sync {
    /// Fetches the first exact (full-text) match for `name`.
    ///
    /// Returns `Ok(None)` when the provider knows no such country.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] when the call itself fails.
    async fn lookup(&self, name: &str) -> Result<Option<CountryCandidate>, ProviderError>;
}
