//! Rate source backed by exchangerate-api.com.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::debug;
use url::Url;

use super::http::{endpoint, get_json};
use crate::config::ApiKey;
use crate::domain::entities::RateRecord;
use crate::domain::providers::RateSource;
use crate::error::{Provider, ProviderError, ProviderErrorKind};
use crate::utils::normalize::text;

const PROVIDER: Provider = Provider::Rates;

/// Client for `GET /v6/{key}/latest/{base}`.
pub struct ExchangeRateClient {
    http: Client,
    base_url: Url,
    api_key: ApiKey,
}

impl ExchangeRateClient {
    pub fn new(http: Client, base_url: Url, api_key: ApiKey) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct LatestRatesResponse {
    result: Option<String>,
    #[serde(rename = "error-type")]
    error_type: Option<String>,
    /// Non-numeric entries read as unknown rates.
    conversion_rates: Option<Map<String, Value>>,
    time_last_update_utc: Option<String>,
}

impl LatestRatesResponse {
    fn into_record(self, base: &str) -> Result<RateRecord, ProviderError> {
        if self.result.as_deref() == Some("error") {
            return Err(ProviderError::new(
                PROVIDER,
                ProviderErrorKind::Rejected(
                    self.error_type
                        .unwrap_or_else(|| "unknown error".to_string()),
                ),
            ));
        }

        let rates = self.conversion_rates.unwrap_or_default();

        Ok(RateRecord {
            base_currency_code: base.to_string(),
            usd_rate: rates.get("USD").and_then(Value::as_f64),
            kzt_rate: rates.get("KZT").and_then(Value::as_f64),
            last_updated_utc: text(self.time_last_update_utc.as_deref()),
        })
    }
}

#[async_trait]
impl RateSource for ExchangeRateClient {
    async fn latest(&self, base: &str) -> Result<RateRecord, ProviderError> {
        let url = endpoint(
            PROVIDER,
            &self.base_url,
            &["v6", self.api_key.expose(), "latest", base],
        )?;
        debug!(provider = %PROVIDER, base, "Fetching exchange rates");

        get_json::<LatestRatesResponse>(PROVIDER, self.http.get(url))
            .await?
            .into_record(base)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> LatestRatesResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_record_from_success() {
        let record = decode(json!({
            "result": "success",
            "time_last_update_utc": "Sat, 17 Oct 2026 00:00:01 +0000",
            "base_code": "KZT",
            "conversion_rates": { "KZT": 1, "USD": 0.00196, "EUR": 0.00181 }
        }))
        .into_record("KZT")
        .unwrap();

        assert_eq!(record.base_currency_code, "KZT");
        assert_eq!(record.usd_rate, Some(0.00196));
        assert_eq!(record.kzt_rate, Some(1.0));
        assert_eq!(record.last_updated_utc, "Sat, 17 Oct 2026 00:00:01 +0000");
    }

    #[test]
    fn test_missing_rates_stay_null() {
        let record = decode(json!({ "result": "success", "conversion_rates": { "EUR": 0.9 } }))
            .into_record("USD")
            .unwrap();

        assert_eq!(record.usd_rate, None);
        assert_eq!(record.kzt_rate, None);
        assert_eq!(record.last_updated_utc, "N/A");
    }

    #[test]
    fn test_null_and_non_numeric_entries_are_tolerated() {
        let record = decode(json!({
            "result": "success",
            "conversion_rates": { "USD": 1, "KZT": null, "XXX": "n/a" }
        }))
        .into_record("USD")
        .unwrap();

        assert_eq!(record.usd_rate, Some(1.0));
        assert_eq!(record.kzt_rate, None);

        let record = decode(json!({
            "result": "success",
            "conversion_rates": { "USD": 1, "KZT": 450.1, "XXX": "n/a" }
        }))
        .into_record("USD")
        .unwrap();

        assert_eq!(record.kzt_rate, Some(450.1));
    }

    #[test]
    fn test_error_result_is_rejected() {
        let err = decode(json!({ "result": "error", "error-type": "invalid-key" }))
            .into_record("USD")
            .unwrap_err();

        assert!(matches!(err.kind, ProviderErrorKind::Rejected(ref t) if t == "invalid-key"));
    }
}
