//! Primary country source backed by countrylayer.com.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::http::{endpoint, get_json, is_not_found};
use crate::config::ApiKey;
use crate::domain::entities::{CountryCandidate, CurrencyInfo};
use crate::domain::providers::CountrySource;
use crate::error::{Provider, ProviderError, ProviderErrorKind};
use crate::utils::normalize::{non_blank, text};

const PROVIDER: Provider = Provider::CountryPrimary;

/// Client for `GET /v2/name/{name}?access_key=..&fullText=true`.
pub struct CountryLayerClient {
    http: Client,
    base_url: Url,
    api_key: ApiKey,
}

impl CountryLayerClient {
    pub fn new(http: Client, base_url: Url, api_key: ApiKey) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }
}

/// countrylayer answers errors with an object instead of an array,
/// sometimes with a 200 status.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum CountryLayerResponse {
    Matches(Vec<CountryLayerCountry>),
    Failure { error: CountryLayerFailure },
}

#[derive(Debug, Deserialize)]
struct CountryLayerFailure {
    code: Option<u16>,
    #[serde(rename = "type")]
    kind: Option<String>,
    info: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CountryLayerCountry {
    name: Option<String>,
    capital: Option<String>,
    languages: Option<Vec<NamedEntry>>,
    currencies: Option<Vec<CountryLayerCurrency>>,
    flag: Option<String>,
}

#[derive(Debug, Deserialize)]
struct NamedEntry {
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CountryLayerCurrency {
    code: Option<String>,
    name: Option<String>,
    symbol: Option<String>,
}

impl From<CountryLayerCountry> for CountryCandidate {
    fn from(country: CountryLayerCountry) -> Self {
        let languages = country
            .languages
            .unwrap_or_default()
            .into_iter()
            .filter_map(|l| non_blank(l.name.as_deref()))
            .collect();

        let currency = country
            .currencies
            .unwrap_or_default()
            .into_iter()
            .next()
            .filter(|c| non_blank(c.code.as_deref()).is_some())
            .map(|c| CurrencyInfo {
                code: text(c.code.as_deref()),
                name: text(c.name.as_deref()),
                symbol: text(c.symbol.as_deref()),
            });

        CountryCandidate {
            name: non_blank(country.name.as_deref()),
            capital: non_blank(country.capital.as_deref()),
            languages,
            currency,
            flag_url: non_blank(country.flag.as_deref()),
        }
    }
}

#[async_trait]
impl CountrySource for CountryLayerClient {
    async fn lookup(&self, name: &str) -> Result<Option<CountryCandidate>, ProviderError> {
        let url = endpoint(PROVIDER, &self.base_url, &["v2", "name", name])?;
        debug!(provider = %PROVIDER, country = name, "Looking up country");

        let request = self.http.get(url).query(&[
            ("access_key", self.api_key.expose()),
            ("fullText", "true"),
        ]);

        match get_json::<CountryLayerResponse>(PROVIDER, request).await {
            Ok(CountryLayerResponse::Matches(matches)) => {
                Ok(matches.into_iter().next().map(CountryCandidate::from))
            }
            Ok(CountryLayerResponse::Failure { error }) if error.code == Some(404) => Ok(None),
            Ok(CountryLayerResponse::Failure { error }) => Err(ProviderError::new(
                PROVIDER,
                ProviderErrorKind::Rejected(
                    error
                        .info
                        .or(error.kind)
                        .unwrap_or_else(|| "unknown error".to_string()),
                ),
            )),
            Err(e) if is_not_found(&e) => Ok(None),
            Err(e) => Err(e),
        }
    }
}
