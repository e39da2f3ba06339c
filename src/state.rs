//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::ProfileService;

/// State shared by all requests.
///
/// Holds only immutable, request-independent collaborators; every profile
/// request builds its own records.
#[derive(Clone)]
pub struct AppState {
    pub profile_service: Arc<ProfileService>,
}

impl AppState {
    pub fn new(profile_service: Arc<ProfileService>) -> Self {
        Self { profile_service }
    }
}
