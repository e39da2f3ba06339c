//! DTOs for the profile endpoint.
//!
//! Field names follow the JSON contract consumed by the profile page, which
//! differs from the domain naming (`picture`, `dob`, `USD`, ...).

use serde::Serialize;

use crate::domain::entities::{
    CountryRecord, CurrencyInfo, NewsItem, PersonRecord, ProfileDocument, RateRecord,
};

/// Response body for `GET /api/profile`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileResponse {
    pub user: UserResponse,
    pub country_info: CountryInfoResponse,
    pub rates: RatesResponse,
    pub news: Vec<NewsItemResponse>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub picture: String,
    pub age: Option<u32>,
    pub dob: String,
    pub city: String,
    pub country: String,
    pub full_address: String,
}

#[derive(Debug, Serialize)]
pub struct CountryInfoResponse {
    pub name: String,
    pub capital: String,
    pub languages: Vec<String>,
    pub currency: CurrencyResponse,
    pub flag: String,
}

#[derive(Debug, Serialize)]
pub struct CurrencyResponse {
    pub code: String,
    pub name: String,
    pub symbol: String,
}

#[derive(Debug, Serialize)]
pub struct RatesResponse {
    pub base: String,
    #[serde(rename = "USD")]
    pub usd: Option<f64>,
    #[serde(rename = "KZT")]
    pub kzt: Option<f64>,
    #[serde(rename = "updatedUtc")]
    pub updated_utc: String,
}

#[derive(Debug, Serialize)]
pub struct NewsItemResponse {
    pub title: String,
    pub image: String,
    pub description: String,
    pub url: String,
}

impl From<PersonRecord> for UserResponse {
    fn from(p: PersonRecord) -> Self {
        Self {
            first_name: p.first_name,
            last_name: p.last_name,
            gender: p.gender,
            picture: p.picture_url,
            age: p.age,
            dob: p.date_of_birth,
            city: p.city,
            country: p.country_name,
            full_address: p.full_address,
        }
    }
}

impl From<CurrencyInfo> for CurrencyResponse {
    fn from(c: CurrencyInfo) -> Self {
        Self {
            code: c.code,
            name: c.name,
            symbol: c.symbol,
        }
    }
}

impl From<CountryRecord> for CountryInfoResponse {
    fn from(c: CountryRecord) -> Self {
        Self {
            name: c.name,
            capital: c.capital,
            languages: c.languages,
            currency: c.currency.into(),
            flag: c.flag_url,
        }
    }
}

impl From<RateRecord> for RatesResponse {
    fn from(r: RateRecord) -> Self {
        Self {
            base: r.base_currency_code,
            usd: r.usd_rate,
            kzt: r.kzt_rate,
            updated_utc: r.last_updated_utc,
        }
    }
}

impl From<NewsItem> for NewsItemResponse {
    fn from(n: NewsItem) -> Self {
        Self {
            title: n.title,
            image: n.image_url,
            description: n.description,
            url: n.article_url,
        }
    }
}

impl From<ProfileDocument> for ProfileResponse {
    fn from(doc: ProfileDocument) -> Self {
        Self {
            user: doc.person.into(),
            country_info: doc.country.into(),
            rates: doc.rates.into(),
            news: doc.news.into_iter().map(Into::into).collect(),
        }
    }
}
