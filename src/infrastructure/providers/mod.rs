//! HTTP clients for the upstream APIs.
//!
//! Each client owns its wire types and converts them into domain records,
//! applying the placeholder normalization from [`crate::utils::normalize`].
//! Clients never retry; the first failure is returned to the caller.

mod countrylayer;
mod exchange_rate;
mod http;
mod news_api;
mod random_user;
mod rest_countries;

pub use countrylayer::CountryLayerClient;
pub use exchange_rate::ExchangeRateClient;
pub use http::build_http_client;
pub use news_api::NewsApiClient;
pub use random_user::RandomUserClient;
pub use rest_countries::RestCountriesClient;
