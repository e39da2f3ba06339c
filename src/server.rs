//! HTTP server initialization and runtime setup.
//!
//! Wires the provider clients into the profile service and runs the Axum
//! server until Ctrl-C.

use crate::application::services::{CountryResolver, ProfileService};
use crate::config::Config;
use crate::infrastructure::providers::{
    CountryLayerClient, ExchangeRateClient, NewsApiClient, RandomUserClient, RestCountriesClient,
    build_http_client,
};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds the profile service with one shared HTTP client for all providers.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be constructed (TLS backend).
pub fn build_profile_service(config: &Config) -> Result<ProfileService> {
    let http = build_http_client(config.provider_timeout()).context("Failed to build HTTP client")?;
    let endpoints = &config.endpoints;
    let credentials = &config.credentials;

    let person_source = Arc::new(RandomUserClient::new(
        http.clone(),
        endpoints.random_user.clone(),
    ));
    let country_resolver = CountryResolver::new(
        Arc::new(CountryLayerClient::new(
            http.clone(),
            endpoints.countrylayer.clone(),
            credentials.countrylayer_key.clone(),
        )),
        Arc::new(RestCountriesClient::new(
            http.clone(),
            endpoints.rest_countries.clone(),
        )),
    );
    let rate_source = Arc::new(ExchangeRateClient::new(
        http.clone(),
        endpoints.exchange_rate.clone(),
        credentials.exchangerate_key.clone(),
    ));
    let news_source = Arc::new(NewsApiClient::new(
        http,
        endpoints.news_api.clone(),
        credentials.newsapi_key.clone(),
    ));

    Ok(ProfileService::new(
        person_source,
        country_resolver,
        rate_source,
        news_source,
    ))
}

/// Runs the HTTP server with the given configuration.
///
/// # Errors
///
/// Returns an error if:
/// - The HTTP client cannot be built
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let profile_service = build_profile_service(&config)?;
    let state = AppState::new(Arc::new(profile_service));

    let app = app_router(state, &config.static_dir);

    let addr: SocketAddr = config
        .listen_addr
        .parse()
        .with_context(|| format!("Invalid listen address {}", config.listen_addr))?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
