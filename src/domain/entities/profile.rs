//! The aggregated profile document.

use super::{CountryRecord, NewsItem, PersonRecord, RateRecord};

/// Everything the profile page renders, assembled once per request.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileDocument {
    pub person: PersonRecord,
    pub country: CountryRecord,
    pub rates: RateRecord,
    pub news: Vec<NewsItem>,
}
