mod common;

use axum::{Router, http::StatusCode, routing::get};
use axum_test::TestServer;
use httpmock::prelude::*;
use profile_aggregator::api::handlers::profile_handler;
use serde_json::json;

fn test_app(upstream: &MockServer) -> TestServer {
    let state = common::create_test_state(upstream);
    let app = Router::new()
        .route("/api/profile", get(profile_handler))
        .with_state(state);

    TestServer::new(app).unwrap()
}

async fn mock_person(upstream: &MockServer, country: &str) {
    let body = common::random_user_body(country);
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/");
            then.status(200).json_body(body);
        })
        .await;
}

#[tokio::test]
async fn test_profile_merges_all_providers() {
    let upstream = MockServer::start_async().await;
    mock_person(&upstream, "Kazakhstan").await;

    let countrylayer = upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/name/Kazakhstan")
                .query_param("access_key", common::COUNTRYLAYER_KEY);
            then.status(200).json_body(common::countrylayer_partial_body());
        })
        .await;
    let restcountries = upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v3.1/name/Kazakhstan");
            then.status(200).json_body(common::rest_countries_body());
        })
        .await;
    let rates = upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/v6/{}/latest/KZT", common::EXCHANGERATE_KEY));
            then.status(200).json_body(common::rates_body("KZT"));
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path("/v2/everything")
                .header("X-Api-Key", common::NEWSAPI_KEY);
            then.status(200)
                .json_body(common::news_body("Kazakhstan", 7));
        })
        .await;

    let server = test_app(&upstream);
    let response = server.get("/api/profile").await;

    response.assert_status_ok();
    countrylayer.assert_async().await;
    restcountries.assert_async().await;
    rates.assert_async().await;

    let json = response.json::<serde_json::Value>();

    assert_eq!(json["user"]["firstName"], "Aliya");
    assert_eq!(json["user"]["country"], "Kazakhstan");
    assert_eq!(json["user"]["age"], 34);

    assert_eq!(json["countryInfo"]["capital"], "Astana");
    assert_eq!(json["countryInfo"]["languages"], json!(["Kazakh", "Russian"]));
    assert_eq!(json["countryInfo"]["currency"]["code"], "KZT");
    assert_eq!(json["countryInfo"]["flag"], "https://flagcdn.com/w320/kz.png");

    assert_eq!(json["rates"]["base"], "KZT");
    assert_eq!(json["rates"]["USD"], 0.00196);
    assert_eq!(json["rates"]["KZT"], 1.0);

    let news = json["news"].as_array().unwrap();
    assert_eq!(news.len(), 5);
    assert!(news.iter().all(|n| {
        n["title"]
            .as_str()
            .unwrap()
            .to_lowercase()
            .contains("kazakhstan")
    }));
}

#[tokio::test]
async fn test_rate_failure_returns_error_envelope() {
    let upstream = MockServer::start_async().await;
    mock_person(&upstream, "Kazakhstan").await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v2/name/Kazakhstan");
            then.status(200).json_body(common::countrylayer_partial_body());
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v3.1/name/Kazakhstan");
            then.status(200).json_body(common::rest_countries_body());
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path_contains("/latest/");
            then.status(500).body("upstream exploded");
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(200).json_body(common::news_body("Kazakhstan", 2));
        })
        .await;

    let server = test_app(&upstream);
    let response = server.get("/api/profile").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"], "Server error");
    assert!(!json["details"].as_str().unwrap().is_empty());
    assert!(json.get("user").is_none());
    assert!(json.get("countryInfo").is_none());
    assert!(json.get("news").is_none());
}

#[tokio::test]
async fn test_person_failure_returns_error_envelope() {
    let upstream = MockServer::start_async().await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/api/");
            then.status(502);
        })
        .await;

    let server = test_app(&upstream);
    let response = server.get("/api/profile").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);

    let json = response.json::<serde_json::Value>();
    assert!(
        json["details"]
            .as_str()
            .unwrap()
            .contains("randomuser")
    );
}

#[tokio::test]
async fn test_news_failure_still_succeeds() {
    let upstream = MockServer::start_async().await;
    mock_person(&upstream, "Kazakhstan").await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v3.1/name/Kazakhstan");
            then.status(200).json_body(common::rest_countries_body());
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path_contains("/latest/KZT");
            then.status(200).json_body(common::rates_body("KZT"));
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(429).json_body(json!({
                "status": "error",
                "code": "rateLimited",
                "message": "You have made too many requests recently."
            }));
        })
        .await;

    let server = test_app(&upstream);
    let response = server.get("/api/profile").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["news"], json!([]));
    assert_eq!(json["countryInfo"]["currency"]["code"], "KZT");
}

#[tokio::test]
async fn test_only_person_and_rates_available() {
    let upstream = MockServer::start_async().await;
    mock_person(&upstream, "Kazakhstan").await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v2/name/Kazakhstan");
            then.status(500);
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v3.1/name/Kazakhstan");
            then.status(503);
        })
        .await;
    let rates = upstream
        .mock_async(|when, then| {
            when.method(GET)
                .path(format!("/v6/{}/latest/USD", common::EXCHANGERATE_KEY));
            then.status(200).json_body(common::rates_body("USD"));
        })
        .await;
    upstream
        .mock_async(|when, then| {
            when.method(GET).path("/v2/everything");
            then.status(500);
        })
        .await;

    let server = test_app(&upstream);
    let response = server.get("/api/profile").await;

    response.assert_status_ok();
    rates.assert_async().await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["countryInfo"],
        json!({
            "name": "Kazakhstan",
            "capital": "N/A",
            "languages": ["N/A"],
            "currency": { "code": "N/A", "name": "N/A", "symbol": "N/A" },
            "flag": ""
        })
    );
    assert_eq!(json["rates"]["base"], "USD");
    assert_eq!(json["news"], json!([]));
}
