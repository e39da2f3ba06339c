//! Error types shared across layers.
//!
//! - [`ProviderError`] - a single upstream call failed
//! - [`AppError`] - a request-level failure rendered as the JSON error envelope

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use std::fmt;

use crate::application::services::ProfileError;

/// The upstream APIs the service talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Provider {
    Person,
    CountryPrimary,
    CountryFallback,
    Rates,
    News,
}

impl Provider {
    /// Stable name used in logs and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Person => "randomuser",
            Self::CountryPrimary => "countrylayer",
            Self::CountryFallback => "restcountries",
            Self::Rates => "exchangerate",
            Self::News => "newsapi",
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Why an upstream call failed.
#[derive(Debug, thiserror::Error)]
pub enum ProviderErrorKind {
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("unexpected status {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),

    #[error("invalid request: {0}")]
    Request(String),

    #[error("rejected by provider: {0}")]
    Rejected(String),

    #[error("no record returned")]
    Empty,
}

/// A failed call to one upstream provider.
#[derive(Debug, thiserror::Error)]
#[error("{provider} request failed: {kind}")]
pub struct ProviderError {
    pub provider: Provider,
    #[source]
    pub kind: ProviderErrorKind,
}

impl ProviderError {
    pub fn new(provider: Provider, kind: ProviderErrorKind) -> Self {
        Self { provider, kind }
    }

    /// Classifies a `reqwest` failure: status errors keep their code,
    /// body decoding errors become [`ProviderErrorKind::Decode`].
    pub fn from_reqwest(provider: Provider, err: reqwest::Error) -> Self {
        let kind = if let Some(status) = err.status() {
            ProviderErrorKind::Status(status.as_u16())
        } else if err.is_decode() {
            ProviderErrorKind::Decode(err.to_string())
        } else {
            ProviderErrorKind::Transport(err)
        };
        Self::new(provider, kind)
    }
}

/// Body returned in place of the profile document on failure.
#[derive(Debug, Serialize)]
pub struct ErrorEnvelope {
    pub error: String,
    pub details: String,
}

/// Request-level failure of the profile endpoint.
///
/// Always rendered as `500 Internal Server Error` with an [`ErrorEnvelope`].
#[derive(Debug)]
pub struct AppError {
    pub message: String,
    pub details: String,
}

impl AppError {
    pub fn internal(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            details: details.into(),
        }
    }
}

impl From<ProfileError> for AppError {
    fn from(err: ProfileError) -> Self {
        AppError::internal("Server error", err.to_string())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = ErrorEnvelope {
            error: self.message,
            details: self.details,
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
