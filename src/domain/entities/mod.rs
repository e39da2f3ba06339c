//! Core domain entities.
//!
//! Every entity is request-scoped: built while serving one profile request
//! and dropped once the response is written.

pub mod country;
pub mod news;
pub mod person;
pub mod profile;
pub mod rates;

pub use country::{CountryCandidate, CountryRecord, CurrencyInfo};
pub use news::NewsItem;
pub use person::PersonRecord;
pub use profile::ProfileDocument;
pub use rates::RateRecord;
