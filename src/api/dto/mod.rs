//! Data Transfer Objects for API responses.

pub mod profile;

pub use profile::{
    CountryInfoResponse, CurrencyResponse, NewsItemResponse, ProfileResponse, RatesResponse,
    UserResponse,
};
