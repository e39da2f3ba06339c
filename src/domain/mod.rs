//! Domain layer containing profile entities and provider contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Request-scoped records and the country merge rules
//! - [`providers`] - Upstream API trait definitions
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on HTTP clients or the web layer
//! - Provider traits define contracts implemented by the infrastructure layer
//! - Orchestration lives in services (see [`crate::application::services`])

pub mod entities;
pub mod providers;
