//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. Provider clients receive their credentials from the resulting
//! [`Config`]; nothing reads the environment at request time.
//!
//! ## Required Variables
//!
//! - `COUNTRYLAYER_KEY` - countrylayer.com access key (primary country source)
//! - `EXCHANGERATE_KEY` - exchangerate-api.com key
//! - `NEWSAPI_KEY` - newsapi.org key
//!
//! restcountries.com (fallback country source) needs no credential.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3009`)
//! - `STATIC_DIR` - Directory served for non-API paths (default: `public`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `PROVIDER_TIMEOUT_SECONDS` - Per-request upstream timeout (default: 10)
//! - `RANDOMUSER_URL`, `COUNTRYLAYER_URL`, `RESTCOUNTRIES_URL`,
//!   `EXCHANGERATE_URL`, `NEWSAPI_URL` - Upstream base URLs

use std::env;
use std::fmt;
use std::time::Duration;

use url::Url;

/// Configuration failures detected before any request is served.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{var} missing in environment")]
    MissingCredential { var: &'static str },

    #[error("{var} is invalid: {reason}")]
    Invalid { var: &'static str, reason: String },
}

/// A provider credential.
///
/// `Debug` output is masked so configs can be logged safely.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wraps a credential read from `var`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] for a blank value.
    pub fn new(var: &'static str, value: impl Into<String>) -> Result<Self, ConfigError> {
        let value = value.into().trim().to_string();
        if value.is_empty() {
            return Err(ConfigError::MissingCredential { var });
        }
        Ok(Self(value))
    }

    /// Returns the raw credential for use in an outbound request.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ApiKey({})", mask_secret(&self.0))
    }
}

/// Credentials for the providers that require one.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub countrylayer_key: ApiKey,
    pub exchangerate_key: ApiKey,
    pub newsapi_key: ApiKey,
}

/// Base URLs of the upstream APIs.
#[derive(Debug, Clone)]
pub struct ProviderEndpoints {
    pub random_user: Url,
    pub countrylayer: Url,
    pub rest_countries: Url,
    pub exchange_rate: Url,
    pub news_api: Url,
}

impl Default for ProviderEndpoints {
    fn default() -> Self {
        Self {
            random_user: Url::parse("https://randomuser.me").expect("valid default URL"),
            countrylayer: Url::parse("https://api.countrylayer.com").expect("valid default URL"),
            rest_countries: Url::parse("https://restcountries.com").expect("valid default URL"),
            exchange_rate: Url::parse("https://v6.exchangerate-api.com")
                .expect("valid default URL"),
            news_api: Url::parse("https://newsapi.org").expect("valid default URL"),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub static_dir: String,
    pub log_level: String,
    pub log_format: String,
    /// Upper bound for each outbound call, in seconds.
    pub provider_timeout_seconds: u64,
    pub credentials: Credentials,
    pub endpoints: ProviderEndpoints,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingCredential`] if a required key is unset
    /// or blank, and [`ConfigError::Invalid`] for unparsable values.
    pub fn from_env() -> Result<Self, ConfigError> {
        let credentials = Credentials {
            countrylayer_key: load_credential("COUNTRYLAYER_KEY")?,
            exchangerate_key: load_credential("EXCHANGERATE_KEY")?,
            newsapi_key: load_credential("NEWSAPI_KEY")?,
        };

        let defaults = ProviderEndpoints::default();
        let endpoints = ProviderEndpoints {
            random_user: load_url("RANDOMUSER_URL", defaults.random_user)?,
            countrylayer: load_url("COUNTRYLAYER_URL", defaults.countrylayer)?,
            rest_countries: load_url("RESTCOUNTRIES_URL", defaults.rest_countries)?,
            exchange_rate: load_url("EXCHANGERATE_URL", defaults.exchange_rate)?,
            news_api: load_url("NEWSAPI_URL", defaults.news_api)?,
        };

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3009".to_string());
        let static_dir = env::var("STATIC_DIR").unwrap_or_else(|_| "public".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let provider_timeout_seconds = match env::var("PROVIDER_TIMEOUT_SECONDS") {
            Ok(v) => v.parse().map_err(|e| ConfigError::Invalid {
                var: "PROVIDER_TIMEOUT_SECONDS",
                reason: format!("{e}"),
            })?,
            Err(_) => 10,
        };

        Ok(Self {
            listen_addr,
            static_dir,
            log_level,
            log_format,
            provider_timeout_seconds,
            credentials,
            endpoints,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `provider_timeout_seconds` is outside `1..=120`
    /// - an upstream URL is not `http(s)`
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.log_format != "text" && self.log_format != "json" {
            return Err(ConfigError::Invalid {
                var: "LOG_FORMAT",
                reason: format!("must be 'text' or 'json', got '{}'", self.log_format),
            });
        }

        if !self.listen_addr.contains(':') {
            return Err(ConfigError::Invalid {
                var: "LISTEN",
                reason: format!("must be in format 'host:port', got '{}'", self.listen_addr),
            });
        }

        if !(1..=120).contains(&self.provider_timeout_seconds) {
            return Err(ConfigError::Invalid {
                var: "PROVIDER_TIMEOUT_SECONDS",
                reason: format!(
                    "must be between 1 and 120, got {}",
                    self.provider_timeout_seconds
                ),
            });
        }

        let urls = [
            ("RANDOMUSER_URL", &self.endpoints.random_user),
            ("COUNTRYLAYER_URL", &self.endpoints.countrylayer),
            ("RESTCOUNTRIES_URL", &self.endpoints.rest_countries),
            ("EXCHANGERATE_URL", &self.endpoints.exchange_rate),
            ("NEWSAPI_URL", &self.endpoints.news_api),
        ];
        for (var, url) in urls {
            if url.scheme() != "http" && url.scheme() != "https" {
                return Err(ConfigError::Invalid {
                    var,
                    reason: format!("must start with 'http://' or 'https://', got '{}'", url),
                });
            }
        }

        Ok(())
    }

    /// Timeout applied to every outbound provider call.
    pub fn provider_timeout(&self) -> Duration {
        Duration::from_secs(self.provider_timeout_seconds)
    }

    /// Prints configuration summary (credentials masked).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Static dir: {}", self.static_dir);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Provider timeout: {}s", self.provider_timeout_seconds);
        tracing::info!(
            "  randomuser: {}",
            self.endpoints.random_user
        );
        tracing::info!(
            "  countrylayer: {} (key {})",
            self.endpoints.countrylayer,
            mask_secret(self.credentials.countrylayer_key.expose())
        );
        tracing::info!("  restcountries: {}", self.endpoints.rest_countries);
        tracing::info!(
            "  exchangerate: {} (key {})",
            self.endpoints.exchange_rate,
            mask_secret(self.credentials.exchangerate_key.expose())
        );
        tracing::info!(
            "  newsapi: {} (key {})",
            self.endpoints.news_api,
            mask_secret(self.credentials.newsapi_key.expose())
        );
    }
}

fn load_credential(var: &'static str) -> Result<ApiKey, ConfigError> {
    let value = env::var(var).map_err(|_| ConfigError::MissingCredential { var })?;
    ApiKey::new(var, value)
}

fn load_url(var: &'static str, default: Url) -> Result<Url, ConfigError> {
    match env::var(var) {
        Ok(raw) => Url::parse(&raw).map_err(|e| ConfigError::Invalid {
            var,
            reason: e.to_string(),
        }),
        Err(_) => Ok(default),
    }
}

/// Masks a secret for logging, keeping at most the last four characters.
///
/// - `abcdef123456` → `***3456`
/// - `abc` → `***`
fn mask_secret(secret: &str) -> String {
    let chars: Vec<char> = secret.chars().collect();
    if chars.len() <= 8 {
        return "***".to_string();
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("***{}", tail)
}

/// Loads and validates configuration from environment variables.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config, ConfigError> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}
