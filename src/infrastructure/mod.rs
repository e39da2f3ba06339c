//! Infrastructure layer for external integrations.
//!
//! This layer implements the provider traits defined by the domain layer on
//! top of `reqwest`.
//!
//! # Modules
//!
//! - [`providers`] - HTTP clients for every upstream API

pub mod providers;
