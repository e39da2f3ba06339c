//! REST API layer for HTTP request/response handling.
//!
//! # Modules
//!
//! - [`dto`] - Response bodies with the wire field names
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Request processing middleware

pub mod dto;
pub mod handlers;
pub mod middleware;
