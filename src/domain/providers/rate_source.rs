//! Source of exchange rates.

use crate::domain::entities::RateRecord;
use crate::error::ProviderError;
use async_trait::async_trait;

/// Fetches the latest exchange rates for a base currency.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RateSource: Send + Sync {
    /// Fetches USD and KZT rates relative to `base`.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on any failure; the caller treats it as fatal.
    async fn latest(&self, base: &str) -> Result<RateRecord, ProviderError>;
}
