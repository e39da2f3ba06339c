//! Request plumbing shared by the provider clients.

use std::time::Duration;

use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{Provider, ProviderError, ProviderErrorKind};

/// Builds the HTTP client shared by all providers.
///
/// `timeout` bounds each whole request; expiry surfaces as a transport error.
pub fn build_http_client(timeout: Duration) -> reqwest::Result<Client> {
    Client::builder()
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .timeout(timeout)
        .build()
}

/// Appends percent-encoded path segments to a base URL.
pub(crate) fn endpoint(
    provider: Provider,
    base: &Url,
    segments: &[&str],
) -> Result<Url, ProviderError> {
    let mut url = base.clone();
    url.path_segments_mut()
        .map_err(|_| {
            ProviderError::new(
                provider,
                ProviderErrorKind::Request(format!("base URL {} cannot carry a path", base)),
            )
        })?
        .pop_if_empty()
        .extend(segments);
    Ok(url)
}

/// Sends the request and decodes a 2xx JSON body.
pub(crate) async fn get_json<T: DeserializeOwned>(
    provider: Provider,
    request: RequestBuilder,
) -> Result<T, ProviderError> {
    let response = request
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| ProviderError::from_reqwest(provider, e))?;

    response
        .json::<T>()
        .await
        .map_err(|e| ProviderError::from_reqwest(provider, e))
}

/// Returns true for a 404, which country APIs use for "no such country".
pub(crate) fn is_not_found(err: &ProviderError) -> bool {
    matches!(err.kind, ProviderErrorKind::Status(404))
}
