//! Source of the profile subject.

use crate::domain::entities::PersonRecord;
use crate::error::ProviderError;
use async_trait::async_trait;

/// Generates the random person a profile is built around.
///
/// # Implementations
///
/// - [`crate::infrastructure::providers::RandomUserClient`] - randomuser.me
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PersonSource: Send + Sync {
    /// Fetches one random person.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError`] on transport failure, a non-2xx status, a
    /// malformed body, or an empty result set.
    async fn random_person(&self) -> Result<PersonRecord, ProviderError>;
}
