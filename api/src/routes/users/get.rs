use super::common::ListUsersQuery;
use crate::extract::{AppPath, AppQuery};
use crate::response::ApiResponse;
use crate::routes::common::{not_found, service_error_response};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use services::user_service::UserService;
use util::state::AppState;

/// GET /api/users
///
/// Users sorted by full name.
///
/// ### Query Parameters
/// - `role` (optional): `admin` or `technician`; only enabled users are returned
///
/// ### Examples
/// ```http
/// GET /api/users
/// GET /api/users?role=technician
/// ```
///
/// ### Responses
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "data": [
///     {
///       "id": "6f0c...",
///       "full_name": "Tess Tech",
///       "email": "tess@example.com",
///       "enabled": true,
///       "roles": ["technician"],
///       "created_at": "2025-10-17T08:00:00Z",
///       "updated_at": "2025-10-17T08:00:00Z"
///     }
///   ],
///   "message": "Users retrieved successfully"
/// }
/// ```
/// - `400 Bad Request` - Unknown role
/// - `500 Internal Server Error` → `"Failed to retrieve users"`
pub async fn list_users(
    State(app_state): State<AppState>,
    AppQuery(query): AppQuery<ListUsersQuery>,
) -> impl IntoResponse {
    match UserService::list(app_state.db(), query.role).await {
        Ok(users) => (
            StatusCode::OK,
            Json(ApiResponse::success(users, "Users retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error_response(e, "Failed to retrieve users"),
    }
}

/// GET /api/users/{user_id}
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` → `"User not found"`
/// - `500 Internal Server Error` → `"Failed to retrieve user"`
pub async fn get_user(
    State(app_state): State<AppState>,
    AppPath(user_id): AppPath<String>,
) -> impl IntoResponse {
    match UserService::find(app_state.db(), &user_id).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(user, "User retrieved successfully")),
        )
            .into_response(),
        Ok(None) => not_found("User not found"),
        Err(e) => service_error_response(e, "Failed to retrieve user"),
    }
}
