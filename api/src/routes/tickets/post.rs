use crate::extract::AppJson;
use crate::response::ApiResponse;
use crate::routes::common::service_error_response;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use services::ticket_service::{CreateTicket, TicketService};
use util::state::AppState;

/// POST /api/tickets
///
/// Creates a ticket in `Not Started` with the next ticket number.
///
/// ### Request Body
/// ```json
/// {
///   "name": "Printer down",
///   "priority": "High",
///   "creator": "tech-1",
///   "description": "No output",
///   "assigned_to_id": "optional user id",
///   "assigned_to_name": "optional, required with assigned_to_id"
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the stored ticket
/// - `400 Bad Request` with a field → message map in `data`
/// - `500 Internal Server Error` → `"Failed to create ticket"`
pub async fn create_ticket(
    State(app_state): State<AppState>,
    AppJson(req): AppJson<CreateTicket>,
) -> impl IntoResponse {
    match TicketService::create(app_state.db(), req).await {
        Ok(ticket) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(ticket, "Ticket created successfully")),
        )
            .into_response(),
        Err(e) => service_error_response(e, "Failed to create ticket"),
    }
}
