//! News source backed by newsapi.org.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;
use url::Url;

use super::http::{endpoint, get_json};
use crate::config::ApiKey;
use crate::domain::entities::NewsItem;
use crate::domain::entities::news::select_headlines;
use crate::domain::providers::NewsSource;
use crate::error::{Provider, ProviderError, ProviderErrorKind};
use crate::utils::normalize::{text, text_or, url};

const PROVIDER: Provider = Provider::News;

/// Articles requested per search before local filtering.
const PAGE_SIZE: &str = "30";

/// Client for `GET /v2/everything`, authenticated with `X-Api-Key`.
pub struct NewsApiClient {
    http: Client,
    base_url: Url,
    api_key: ApiKey,
}

impl NewsApiClient {
    pub fn new(http: Client, base_url: Url, api_key: ApiKey) -> Self {
        Self {
            http,
            base_url,
            api_key,
        }
    }
}

#[derive(Debug, Deserialize)]
struct EverythingResponse {
    status: Option<String>,
    message: Option<String>,
    articles: Option<Vec<Article>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Article {
    title: Option<String>,
    url_to_image: Option<String>,
    description: Option<String>,
    url: Option<String>,
}

impl From<Article> for NewsItem {
    fn from(article: Article) -> Self {
        NewsItem {
            title: text(article.title.as_deref()),
            image_url: url(article.url_to_image.as_deref()),
            description: text_or(article.description.as_deref(), ""),
            article_url: text_or(article.url.as_deref(), "#"),
        }
    }
}

impl EverythingResponse {
    fn into_headlines(self, country: &str) -> Result<Vec<NewsItem>, ProviderError> {
        if self.status.as_deref() == Some("error") {
            return Err(ProviderError::new(
                PROVIDER,
                ProviderErrorKind::Rejected(
                    self.message.unwrap_or_else(|| "unknown error".to_string()),
                ),
            ));
        }

        let articles = self.articles.unwrap_or_default();
        Ok(select_headlines(articles, country, |a| a.title.as_deref())
            .into_iter()
            .map(NewsItem::from)
            .collect())
    }
}

#[async_trait]
impl NewsSource for NewsApiClient {
    async fn headlines(&self, country: &str) -> Result<Vec<NewsItem>, ProviderError> {
        let url = endpoint(PROVIDER, &self.base_url, &["v2", "everything"])?;
        debug!(provider = %PROVIDER, country, "Searching news");

        let query = format!("\"{}\"", country);
        let request = self
            .http
            .get(url)
            .header("X-Api-Key", self.api_key.expose())
            .query(&[
                ("q", query.as_str()),
                ("searchIn", "title"),
                ("language", "en"),
                ("pageSize", PAGE_SIZE),
                ("sortBy", "publishedAt"),
            ]);

        get_json::<EverythingResponse>(PROVIDER, request)
            .await?
            .into_headlines(country)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::news::MAX_HEADLINES;
    use serde_json::json;

    fn decode(value: serde_json::Value) -> EverythingResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_headlines_are_filtered_on_raw_title() {
        let headlines = decode(json!({
            "status": "ok",
            "totalResults": 3,
            "articles": [
                { "title": "Brazil election results", "url": "https://n/1", "urlToImage": "https://n/1.jpg", "description": "d1" },
                { "title": null, "url": "https://n/2" },
                { "title": "Football roundup", "url": "https://n/3" },
                { "title": "Rains hit southern BRAZIL" }
            ]
        }))
        .into_headlines("Brazil")
        .unwrap();

        assert_eq!(headlines.len(), 2);
        assert_eq!(headlines[0].title, "Brazil election results");
        assert_eq!(headlines[0].image_url, "https://n/1.jpg");
        assert_eq!(headlines[1].article_url, "#");
        assert_eq!(headlines[1].image_url, "");
        assert_eq!(headlines[1].description, "");
    }

    #[test]
    fn test_headlines_are_truncated() {
        let articles: Vec<_> = (0..12)
            .map(|i| json!({ "title": format!("Chile story {}", i) }))
            .collect();

        let headlines = decode(json!({ "status": "ok", "articles": articles }))
            .into_headlines("Chile")
            .unwrap();

        assert_eq!(headlines.len(), MAX_HEADLINES);
        assert_eq!(headlines[0].title, "Chile story 0");
        assert_eq!(headlines[4].title, "Chile story 4");
    }

    #[test]
    fn test_error_status_is_rejected() {
        let err = decode(json!({ "status": "error", "code": "apiKeyInvalid", "message": "Your API key is invalid" }))
            .into_headlines("Chile")
            .unwrap_err();

        assert_eq!(err.provider, Provider::News);
        assert!(err.to_string().contains("Your API key is invalid"));
    }
}
