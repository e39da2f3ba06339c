//! Fallback country source backed by restcountries.com.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use super::http::{endpoint, get_json, is_not_found};
use crate::domain::entities::{CountryCandidate, CurrencyInfo};
use crate::domain::providers::CountrySource;
use crate::error::{Provider, ProviderError};
use crate::utils::normalize::{non_blank, text};

const PROVIDER: Provider = Provider::CountryFallback;

/// Client for `GET /v3.1/name/{name}?fullText=true`. Needs no credential.
pub struct RestCountriesClient {
    http: Client,
    base_url: Url,
}

impl RestCountriesClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }
}

#[derive(Debug, Deserialize)]
struct RestCountry {
    capital: Option<Vec<String>>,
    flags: Option<Flags>,
    /// ISO 639-3 code to language name, in document order.
    languages: Option<Map<String, Value>>,
    /// ISO 4217 code to `{name, symbol}`, in document order.
    currencies: Option<Map<String, Value>>,
}

#[derive(Debug, Deserialize)]
struct Flags {
    png: Option<String>,
    svg: Option<String>,
}

impl From<RestCountry> for CountryCandidate {
    fn from(country: RestCountry) -> Self {
        let capital = country
            .capital
            .and_then(|c| c.into_iter().next())
            .and_then(|c| non_blank(Some(c.as_str())));

        let flag_url = country
            .flags
            .and_then(|f| non_blank(f.png.as_deref()).or_else(|| non_blank(f.svg.as_deref())));

        let languages = country
            .languages
            .unwrap_or_default()
            .values()
            .filter_map(|v| non_blank(v.as_str()))
            .collect();

        let currency = country
            .currencies
            .unwrap_or_default()
            .into_iter()
            .next()
            .and_then(|(code, details)| {
                non_blank(Some(code.as_str())).map(|code| CurrencyInfo {
                    code,
                    name: text(details.get("name").and_then(Value::as_str)),
                    symbol: text(details.get("symbol").and_then(Value::as_str)),
                })
            });

        CountryCandidate {
            name: None,
            capital,
            languages,
            currency,
            flag_url,
        }
    }
}

#[async_trait]
impl CountrySource for RestCountriesClient {
    async fn lookup(&self, name: &str) -> Result<Option<CountryCandidate>, ProviderError> {
        let url = endpoint(PROVIDER, &self.base_url, &["v3.1", "name", name])?;
        debug!(provider = %PROVIDER, country = name, "Looking up country");

        let request = self.http.get(url).query(&[("fullText", "true")]);

        match get_json::<Vec<RestCountry>>(PROVIDER, request).await {
            Ok(matches) => Ok(matches.into_iter().next().map(CountryCandidate::from)),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
