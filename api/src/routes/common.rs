use crate::response::ApiResponse;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{field_error_map, format_validation_errors};
use services::ServiceError;
use validator::ValidationErrors;

/// `400` with one message per offending field in `data`.
pub fn validation_response(errors: &ValidationErrors) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(ApiResponse::failure(
            field_error_map(errors),
            format_validation_errors(errors),
        )),
    )
        .into_response()
}

/// Maps a service failure onto the envelope. Store faults become a `500` carrying only
/// `failure`; the underlying error has already been logged by the service.
pub fn service_error_response(err: ServiceError, failure: &str) -> Response {
    match err {
        ServiceError::Validation(errors) => validation_response(&errors),
        ServiceError::Database(_) => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ApiResponse::<()>::error(failure)),
        )
            .into_response(),
    }
}

pub fn not_found(message: &str) -> Response {
    (StatusCode::NOT_FOUND, Json(ApiResponse::<()>::error(message))).into_response()
}
