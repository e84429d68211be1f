//! HTTP route entry point for `/api/...`.
//!
//! Route groups:
//! - `/health` → liveness check
//! - `/tickets` → ticket creation, status workflow, assignment and the kanban board
//! - `/users` → account management and technician pickers

use crate::routes::{health::health_routes, tickets::tickets_routes, users::users_routes};
use axum::Router;
use util::state::AppState;

pub mod common;
pub mod health;
pub mod tickets;
pub mod users;

/// Builds the router for every `/api` endpoint with `app_state` applied.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/tickets", tickets_routes())
        .nest("/users", users_routes())
        .with_state(app_state)
        .nest("/health", health_routes())
}
