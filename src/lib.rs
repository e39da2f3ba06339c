//! # Profile Aggregator
//!
//! Assembles a single profile document from several independent, unreliable
//! third-party APIs: a random person, metadata about the person's country,
//! exchange rates for the country's currency, and news mentioning the country.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, merge rules and provider traits
//! - **Application Layer** ([`application`]) - Country resolution and profile aggregation
//! - **Infrastructure Layer** ([`infrastructure`]) - `reqwest` clients for each upstream
//! - **API Layer** ([`api`]) - The `GET /api/profile` handler and response DTOs
//!
//! ## Failure Containment
//!
//! Person and exchange-rate data are essential: their failure turns the
//! request into a `500` with `{error, details}`. Country metadata and news are
//! best-effort and degrade to `"N/A"` placeholders and an empty list.
//!
//! ## Quick Start
//!
//! ```bash
//! export COUNTRYLAYER_KEY=...
//! export EXCHANGERATE_KEY=...
//! export NEWSAPI_KEY=...
//!
//! cargo run
//! curl http://localhost:3009/api/profile
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod logging;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{CountryResolver, ProfileError, ProfileService};
    pub use crate::config::{ApiKey, Config, ConfigError};
    pub use crate::domain::entities::{
        CountryRecord, CurrencyInfo, NewsItem, PersonRecord, ProfileDocument, RateRecord,
    };
    pub use crate::error::{AppError, Provider, ProviderError};
    pub use crate::state::AppState;
}
