#![allow(dead_code)]

use httpmock::prelude::*;
use profile_aggregator::config::{Credentials, ProviderEndpoints};
use profile_aggregator::prelude::{ApiKey, AppState, Config, ProfileService};
use profile_aggregator::server::build_profile_service;
use serde_json::{Value, json};
use std::sync::Arc;
use url::Url;

pub const COUNTRYLAYER_KEY: &str = "test-countrylayer-key";
pub const EXCHANGERATE_KEY: &str = "test-exchangerate-key";
pub const NEWSAPI_KEY: &str = "test-newsapi-key";

/// Configuration with every upstream pointed at `server`.
pub fn test_config(server: &MockServer) -> Config {
    let base = Url::parse(&server.base_url()).unwrap();

    Config {
        listen_addr: "127.0.0.1:0".to_string(),
        static_dir: "public".to_string(),
        log_level: "debug".to_string(),
        log_format: "text".to_string(),
        provider_timeout_seconds: 5,
        credentials: Credentials {
            countrylayer_key: ApiKey::new("COUNTRYLAYER_KEY", COUNTRYLAYER_KEY).unwrap(),
            exchangerate_key: ApiKey::new("EXCHANGERATE_KEY", EXCHANGERATE_KEY).unwrap(),
            newsapi_key: ApiKey::new("NEWSAPI_KEY", NEWSAPI_KEY).unwrap(),
        },
        endpoints: ProviderEndpoints {
            random_user: base.clone(),
            countrylayer: base.clone(),
            rest_countries: base.clone(),
            exchange_rate: base.clone(),
            news_api: base,
        },
    }
}

pub fn create_test_service(server: &MockServer) -> ProfileService {
    build_profile_service(&test_config(server)).unwrap()
}

pub fn create_test_state(server: &MockServer) -> AppState {
    AppState::new(Arc::new(create_test_service(server)))
}

pub fn random_user_body(country: &str) -> Value {
    json!({
        "results": [{
            "gender": "female",
            "name": { "title": "Ms", "first": "Aliya", "last": "Bekova" },
            "location": {
                "street": { "number": 17, "name": "Abay Avenue" },
                "city": "Almaty",
                "state": "Almaty Region",
                "country": country
            },
            "dob": { "date": "1992-06-14T03:21:00.000Z", "age": 34 },
            "picture": { "large": "https://randomuser.me/api/portraits/women/44.jpg" }
        }],
        "info": { "seed": "abc", "results": 1, "page": 1, "version": "1.4" }
    })
}

pub fn countrylayer_partial_body() -> Value {
    json!([{
        "name": "Kazakhstan",
        "capital": "Astana",
        "languages": [],
        "currencies": [],
        "flag": ""
    }])
}

pub fn rest_countries_body() -> Value {
    json!([{
        "name": { "common": "Kazakhstan" },
        "capital": ["Nur-Sultan"],
        "flags": { "png": "https://flagcdn.com/w320/kz.png", "svg": "https://flagcdn.com/kz.svg" },
        "languages": { "kaz": "Kazakh", "rus": "Russian" },
        "currencies": { "KZT": { "name": "Kazakhstani tenge", "symbol": "₸" } }
    }])
}

pub fn rates_body(base: &str) -> Value {
    json!({
        "result": "success",
        "time_last_update_utc": "Sun, 18 Oct 2026 00:00:01 +0000",
        "base_code": base,
        "conversion_rates": { "USD": 0.00196, "KZT": 1, "EUR": 0.00181 }
    })
}

pub fn news_body(country: &str, count: usize) -> Value {
    let mut articles: Vec<Value> = (0..count)
        .map(|i| {
            json!({
                "source": { "id": null, "name": "Wire" },
                "title": format!("{} headline {}", country, i),
                "description": format!("Story {}", i),
                "url": format!("https://news.example.com/{}", i),
                "urlToImage": null,
                "publishedAt": "2026-10-17T12:00:00Z"
            })
        })
        .collect();
    articles.insert(1, json!({ "title": "Unrelated markets update", "url": "https://news.example.com/x" }));

    json!({ "status": "ok", "totalResults": articles.len(), "articles": articles })
}
