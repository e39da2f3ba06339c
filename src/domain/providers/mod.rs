//! Provider trait definitions for the domain layer.
//!
//! Each trait abstracts one kind of upstream API. Concrete HTTP clients live
//! in `crate::infrastructure::providers`; mock implementations are generated
//! via `mockall` for testing.
//!
//! # Available Providers
//!
//! - [`PersonSource`] - Random person generator
//! - [`CountrySource`] - Country metadata lookup (primary and fallback)
//! - [`RateSource`] - Currency exchange rates
//! - [`NewsSource`] - News search

pub mod country_source;
pub mod news_source;
pub mod person_source;
pub mod rate_source;

pub use country_source::CountrySource;
pub use news_source::NewsSource;
pub use person_source::PersonSource;
pub use rate_source::RateSource;

#[cfg(test)]
pub use country_source::MockCountrySource;
#[cfg(test)]
pub use news_source::MockNewsSource;
#[cfg(test)]
pub use person_source::MockPersonSource;
#[cfg(test)]
pub use rate_source::MockRateSource;
