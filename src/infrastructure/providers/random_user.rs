//! Person source backed by randomuser.me.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use super::http::{endpoint, get_json};
use crate::domain::entities::PersonRecord;
use crate::domain::providers::PersonSource;
use crate::error::{Provider, ProviderError, ProviderErrorKind};
use crate::utils::normalize::{non_blank, text, url};

/// Client for the randomuser.me API (`GET /api/`).
pub struct RandomUserClient {
    http: Client,
    base_url: Url,
}

impl RandomUserClient {
    pub fn new(http: Client, base_url: Url) -> Self {
        Self { http, base_url }
    }
}

#[derive(Debug, Deserialize)]
struct RandomUserResponse {
    results: Option<Vec<RandomUser>>,
}

#[derive(Debug, Deserialize)]
struct RandomUser {
    gender: Option<String>,
    name: Option<Name>,
    location: Option<Location>,
    dob: Option<Dob>,
    picture: Option<Picture>,
}

#[derive(Debug, Deserialize)]
struct Name {
    first: Option<String>,
    last: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Location {
    street: Option<Street>,
    city: Option<String>,
    country: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Street {
    number: Option<Value>,
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Dob {
    date: Option<String>,
    age: Option<Value>,
}

impl Dob {
    /// Whole, non-negative ages only; anything else is unknown.
    fn age(&self) -> Option<u32> {
        self.age
            .as_ref()
            .and_then(Value::as_u64)
            .and_then(|age| u32::try_from(age).ok())
    }
}

#[derive(Debug, Deserialize)]
struct Picture {
    large: Option<String>,
}

impl Street {
    /// "<name> <number>" from whichever parts are present.
    fn address(&self) -> Option<String> {
        let number = match &self.number {
            Some(Value::Number(n)) => Some(n.to_string()),
            Some(Value::String(s)) => non_blank(Some(s.as_str())),
            _ => None,
        };
        let parts: Vec<String> = non_blank(self.name.as_deref())
            .into_iter()
            .chain(number)
            .collect();

        (!parts.is_empty()).then(|| parts.join(" "))
    }
}

impl From<RandomUser> for PersonRecord {
    fn from(user: RandomUser) -> Self {
        let name = user.name.as_ref();
        let location = user.location.as_ref();
        let dob = user.dob.as_ref();

        PersonRecord {
            first_name: text(name.and_then(|n| n.first.as_deref())),
            last_name: text(name.and_then(|n| n.last.as_deref())),
            gender: text(user.gender.as_deref()),
            picture_url: url(user.picture.as_ref().and_then(|p| p.large.as_deref())),
            age: dob.and_then(Dob::age),
            date_of_birth: text(dob.and_then(|d| d.date.as_deref())),
            city: text(location.and_then(|l| l.city.as_deref())),
            country_name: text(location.and_then(|l| l.country.as_deref())),
            full_address: text(
                location
                    .and_then(|l| l.street.as_ref())
                    .and_then(Street::address)
                    .as_deref(),
            ),
        }
    }
}

#[async_trait]
impl PersonSource for RandomUserClient {
    async fn random_person(&self) -> Result<PersonRecord, ProviderError> {
        let url = endpoint(Provider::Person, &self.base_url, &["api", ""])?;
        debug!(provider = %Provider::Person, "Fetching random person");

        let response: RandomUserResponse =
            get_json(Provider::Person, self.http.get(url)).await?;

        response
            .results
            .and_then(|r| r.into_iter().next())
            .map(PersonRecord::from)
            .ok_or_else(|| ProviderError::new(Provider::Person, ProviderErrorKind::Empty))
    }
}
