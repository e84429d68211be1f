//! # Tickets Routes Module
//!
//! Wires up the `/api/tickets` endpoint group.
//!
//! - `get.rs`: listing, kanban board, single ticket
//! - `post.rs`: ticket creation
//! - `put.rs`: status transitions and assignee changes

use axum::{
    Router,
    routing::{get, put},
};
use get::{get_board, get_ticket, list_tickets};
use post::create_ticket;
use put::{update_assignee, update_status};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

/// - `GET /tickets` → `list_tickets`
/// - `POST /tickets` → `create_ticket`
/// - `GET /tickets/board` → `get_board`
/// - `GET /tickets/{ticket_id}` → `get_ticket`
/// - `PUT /tickets/{ticket_id}/status` → `update_status`
/// - `PUT /tickets/{ticket_id}/assignee` → `update_assignee`
pub fn tickets_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_tickets).post(create_ticket))
        .route("/board", get(get_board))
        .route("/{ticket_id}", get(get_ticket))
        .route("/{ticket_id}/status", put(update_status))
        .route("/{ticket_id}/assignee", put(update_assignee))
}
