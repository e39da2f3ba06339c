//! HTTP request handlers for API endpoints.

pub mod profile;

pub use profile::profile_handler;
