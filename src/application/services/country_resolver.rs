//! Country metadata resolution across a primary and a fallback source.

use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::entities::CountryRecord;
use crate::domain::providers::CountrySource;

/// Resolves country metadata from two sources without ever failing.
///
/// # Merge Policy
///
/// 1. Start from [`CountryRecord::placeholder`]
/// 2. Apply the primary source; it may also rename the country
/// 3. Consult the fallback only if languages or currency are still unresolved
/// 4. The fallback fills placeholder fields only, never a resolved value
///
/// Failures of either source are logged and leave the record as it was.
pub struct CountryResolver {
    primary: Arc<dyn CountrySource>,
    fallback: Arc<dyn CountrySource>,
}

impl CountryResolver {
    /// Creates a resolver over a primary and a fallback source.
    pub fn new(primary: Arc<dyn CountrySource>, fallback: Arc<dyn CountrySource>) -> Self {
        Self { primary, fallback }
    }

    /// Resolves metadata for `country_name`, degrading to placeholders.
    pub async fn resolve(&self, country_name: &str) -> CountryRecord {
        let mut record = CountryRecord::placeholder(country_name);

        match self.primary.lookup(country_name).await {
            Ok(Some(mut candidate)) => {
                if let Some(name) = candidate.name.take() {
                    record.name = name;
                }
                record.fill_from(candidate);
            }
            Ok(None) => debug!(country = country_name, "Primary source has no match"),
            Err(e) => warn!(
                provider = %e.provider,
                country = country_name,
                "Country lookup failed, continuing with placeholders: {}",
                e
            ),
        }

        if !record.needs_languages() && !record.needs_currency() {
            return record;
        }

        debug!(
            country = country_name,
            need_languages = record.needs_languages(),
            need_currency = record.needs_currency(),
            "Consulting fallback country source"
        );

        match self.fallback.lookup(country_name).await {
            Ok(Some(candidate)) => record.fill_from(candidate),
            Ok(None) => debug!(country = country_name, "Fallback source has no match"),
            Err(e) => warn!(
                provider = %e.provider,
                country = country_name,
                "Fallback country lookup failed: {}",
                e
            ),
        }

        record
    }
}
