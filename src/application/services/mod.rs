//! Business logic services for the application layer.

pub mod country_resolver;
pub mod profile_service;

pub use country_resolver::CountryResolver;
pub use profile_service::{ProfileError, ProfileService};
