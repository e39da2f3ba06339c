//! Handler for the profile endpoint.

use axum::{Json, extract::State};

use crate::api::dto::ProfileResponse;
use crate::error::AppError;
use crate::state::AppState;

/// Builds and returns one aggregated profile.
///
/// # Endpoint
///
/// `GET /api/profile`
///
/// # Response Codes
///
/// - **200 OK**: Profile assembled; country fields may hold `"N/A"` and
///   `news` may be empty when best-effort providers failed
/// - **500 Internal Server Error**: Person or rate source failed
///
/// # Error Response
///
/// ```json
/// { "error": "Server error", "details": "exchangerate request failed: unexpected status 403" }
/// ```
pub async fn profile_handler(
    State(state): State<AppState>,
) -> Result<Json<ProfileResponse>, AppError> {
    let profile = state.profile_service.build_profile().await?;
    Ok(Json(profile.into()))
}
