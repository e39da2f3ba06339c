//! Profile aggregation service.

use std::sync::Arc;

use tracing::{error, info, warn};

use super::CountryResolver;
use crate::domain::entities::{CountryRecord, ProfileDocument};
use crate::domain::providers::{NewsSource, PersonSource, RateSource};
use crate::error::ProviderError;

/// Base currency used when the country's currency is unknown.
pub const FALLBACK_BASE_CURRENCY: &str = "USD";

/// Failures that abort a profile request.
///
/// Only the person and rate sources are essential; every other provider
/// degrades to placeholders, so no other variant exists.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error(transparent)]
    Person(ProviderError),

    #[error(transparent)]
    Rates(ProviderError),
}

/// Builds [`ProfileDocument`]s from the upstream providers.
///
/// # Pipeline
///
/// 1. Person source (fatal)
/// 2. Country resolver with the person's country (never fails)
/// 3. Rate source with the resolved currency, or `USD` (fatal)
/// 4. News source with the person's country (degrades to `[]`)
///
/// Steps 3 and 4 are independent and run concurrently.
pub struct ProfileService {
    person_source: Arc<dyn PersonSource>,
    country_resolver: CountryResolver,
    rate_source: Arc<dyn RateSource>,
    news_source: Arc<dyn NewsSource>,
}

impl ProfileService {
    /// Creates a new profile service.
    pub fn new(
        person_source: Arc<dyn PersonSource>,
        country_resolver: CountryResolver,
        rate_source: Arc<dyn RateSource>,
        news_source: Arc<dyn NewsSource>,
    ) -> Self {
        Self {
            person_source,
            country_resolver,
            rate_source,
            news_source,
        }
    }

    /// Assembles one profile document.
    ///
    /// # Errors
    ///
    /// Returns [`ProfileError::Person`] if no person could be fetched and
    /// [`ProfileError::Rates`] if exchange rates are unavailable.
    pub async fn build_profile(&self) -> Result<ProfileDocument, ProfileError> {
        let person = self.person_source.random_person().await.map_err(|e| {
            error!(provider = %e.provider, "Person lookup failed: {}", e);
            ProfileError::Person(e)
        })?;

        let country = self.country_resolver.resolve(&person.country_name).await;
        let base = base_currency(&country);

        let (rates, news) = tokio::join!(
            self.rate_source.latest(base),
            self.news_source.headlines(&person.country_name)
        );

        let rates = rates.map_err(|e| {
            error!(provider = %e.provider, base, "Rate lookup failed: {}", e);
            ProfileError::Rates(e)
        })?;

        let news = news.unwrap_or_else(|e| {
            warn!(provider = %e.provider, "News lookup failed, returning no articles: {}", e);
            Vec::new()
        });

        info!(
            country = %country.name,
            base = %rates.base_currency_code,
            articles = news.len(),
            "Profile assembled"
        );

        Ok(ProfileDocument {
            person,
            country,
            rates,
            news,
        })
    }
}

/// Selects the base currency for the rate lookup.
pub fn base_currency(country: &CountryRecord) -> &str {
    if country.needs_currency() {
        FALLBACK_BASE_CURRENCY
    } else {
        &country.currency.code
    }
}
