use crate::extract::{AppJson, AppPath};
use crate::response::ApiResponse;
use crate::routes::common::service_error_response;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use services::user_service::{UpdateUser, UserService};
use util::state::AppState;

/// PUT /api/users/{user_id}
///
/// Replaces name, email, roles and the enabled flag. Tickets assigned to the user get the
/// new name in the same transaction.
///
/// ### Request Body
/// ```json
/// {
///   "full_name": "Tess Technician",
///   "email": "tess@example.com",
///   "roles": ["technician", "admin"],
///   "enabled": true
/// }
/// ```
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` with a field → message map in `data`
/// - `500 Internal Server Error` → `"Failed to update user"` (includes unknown ids)
pub async fn update_user(
    State(app_state): State<AppState>,
    AppPath(user_id): AppPath<String>,
    AppJson(req): AppJson<UpdateUser>,
) -> impl IntoResponse {
    match UserService::update(app_state.db(), &user_id, req).await {
        Ok(user) => (
            StatusCode::OK,
            Json(ApiResponse::success(user, "User updated successfully")),
        )
            .into_response(),
        Err(e) => service_error_response(e, "Failed to update user"),
    }
}

/// PUT /api/users/{user_id}/toggle
///
/// Flips `enabled`. Roles and ticket assignments are untouched.
///
/// ### Responses
/// - `200 OK`
/// - `500 Internal Server Error` → `"Failed to toggle user"`
pub async fn toggle_user(
    State(app_state): State<AppState>,
    AppPath(user_id): AppPath<String>,
) -> impl IntoResponse {
    match UserService::toggle_enabled(app_state.db(), &user_id).await {
        Ok(user) => {
            let message = if user.user.enabled {
                "User enabled successfully"
            } else {
                "User disabled successfully"
            };
            (StatusCode::OK, Json(ApiResponse::success(user, message))).into_response()
        }
        Err(e) => service_error_response(e, "Failed to toggle user"),
    }
}
