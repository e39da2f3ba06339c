//! Application layer services implementing the aggregation pipeline.
//!
//! Services consume provider traits and provide a clean API for HTTP handlers
//! and the operator CLI.
//!
//! # Available Services
//!
//! - [`services::country_resolver::CountryResolver`] - Two-source country metadata merge
//! - [`services::profile_service::ProfileService`] - Profile aggregation and failure containment

pub mod services;
