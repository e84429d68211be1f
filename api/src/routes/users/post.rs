use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::routes::common::service_error_response;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use services::user_service::{CreateUser, UserService};
use util::state::AppState;

/// POST /api/users
///
/// Creates an enabled account.
///
/// ### Request Body
/// ```json
/// {
///   "full_name": "Tess Tech",
///   "email": "tess@example.com",
///   "roles": ["technician"]
/// }
/// ```
///
/// ### Responses
/// - `201 Created`
/// - `400 Bad Request` with a field → message map in `data`
/// - `500 Internal Server Error` → `"Failed to create user"`
pub async fn create_user(
    State(app_state): State<AppState>,
    AppJson(req): AppJson<CreateUser>,
) -> impl IntoResponse {
    match UserService::create(app_state.db(), req).await {
        Ok(user) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(user, "User created successfully")),
        )
            .into_response(),
        Err(e) => service_error_response(e, "Failed to create user"),
    }
}
