use super::common::UpdateStatusRequest;
use crate::extract::{AppJson, AppPath};
use crate::response::ApiResponse;
use crate::routes::common::{service_error_response, validation_response};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use services::ticket_service::{TicketService, UpdateAssignee};
use services::workflow::StatusChange;
use util::state::AppState;

/// PUT /api/tickets/{ticket_id}/status
///
/// Moves a ticket to any status. `On Hold` needs `hold_reason`; `Solved` needs `cause`
/// and `solution`. Other fields in the body are ignored.
///
/// ### Request Body
/// ```json
/// { "status": "Solved", "cause": "toner empty", "solution": "replaced toner" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated ticket
/// - `400 Bad Request` with a field → message map in `data`
/// - `500 Internal Server Error` → `"Failed to update ticket status"`
pub async fn update_status(
    State(app_state): State<AppState>,
    AppPath(ticket_id): AppPath<i64>,
    AppJson(req): AppJson<UpdateStatusRequest>,
) -> impl IntoResponse {
    let change = match StatusChange::from_parts(req.status, req.cause, req.solution, req.hold_reason)
    {
        Ok(change) => change,
        Err(errors) => return validation_response(&errors),
    };

    match TicketService::update_status(app_state.db(), ticket_id, change).await {
        Ok(ticket) => (
            StatusCode::OK,
            Json(ApiResponse::success(ticket, "Ticket status updated successfully")),
        )
            .into_response(),
        Err(e) => service_error_response(e, "Failed to update ticket status"),
    }
}

/// PUT /api/tickets/{ticket_id}/assignee
///
/// ### Request Body
/// ```json
/// { "assigned_to_id": "3f1c...", "assigned_to_name": "Tess Tech" }
/// ```
///
/// ### Responses
/// - `200 OK` with the updated ticket
/// - `400 Bad Request` with a field → message map in `data`
/// - `500 Internal Server Error` → `"Failed to update ticket assignee"`
pub async fn update_assignee(
    State(app_state): State<AppState>,
    AppPath(ticket_id): AppPath<i64>,
    AppJson(req): AppJson<UpdateAssignee>,
) -> impl IntoResponse {
    match TicketService::update_assignee(app_state.db(), ticket_id, req).await {
        Ok(ticket) => (
            StatusCode::OK,
            Json(ApiResponse::success(ticket, "Ticket assignee updated successfully")),
        )
            .into_response(),
        Err(e) => service_error_response(e, "Failed to update ticket assignee"),
    }
}
