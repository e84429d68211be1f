use super::common::TicketDetailResponse;
use crate::extract::AppPath;
use crate::response::ApiResponse;
use crate::routes::common::{not_found, service_error_response};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
};
use services::ticket_service::TicketService;
use util::state::AppState;

/// GET /api/tickets
///
/// Every ticket, most recently updated first.
///
/// ### Responses
/// - `200 OK` with an array of tickets
/// - `500 Internal Server Error` → `"Failed to retrieve tickets"`
pub async fn list_tickets(State(app_state): State<AppState>) -> impl IntoResponse {
    match TicketService::list(app_state.db()).await {
        Ok(tickets) => (
            StatusCode::OK,
            Json(ApiResponse::success(tickets, "Tickets retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error_response(e, "Failed to retrieve tickets"),
    }
}

/// GET /api/tickets/board
///
/// Kanban read model: four columns in workflow order.
///
/// ```json
/// {
///   "success": true,
///   "data": [
///     { "status": "Not Started", "tickets": [ ... ] },
///     { "status": "In Progress", "tickets": [] },
///     { "status": "On Hold", "tickets": [] },
///     { "status": "Solved", "tickets": [] }
///   ],
///   "message": "Board retrieved successfully"
/// }
/// ```
pub async fn get_board(State(app_state): State<AppState>) -> impl IntoResponse {
    match TicketService::board(app_state.db()).await {
        Ok(columns) => (
            StatusCode::OK,
            Json(ApiResponse::success(columns, "Board retrieved successfully")),
        )
            .into_response(),
        Err(e) => service_error_response(e, "Failed to retrieve board"),
    }
}

/// GET /api/tickets/{ticket_id}
///
/// One ticket with its assignee row joined in (`null` when unassigned).
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` → `"Ticket not found"`
/// - `500 Internal Server Error` → `"Failed to retrieve ticket"`
pub async fn get_ticket(
    State(app_state): State<AppState>,
    AppPath(ticket_id): AppPath<i64>,
) -> impl IntoResponse {
    match TicketService::find_with_assignee(app_state.db(), ticket_id).await {
        Ok(Some((ticket, assignee))) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                TicketDetailResponse { ticket, assignee },
                "Ticket retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => not_found("Ticket not found"),
        Err(e) => service_error_response(e, "Failed to retrieve ticket"),
    }
}
