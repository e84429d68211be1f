//! # Users Routes Module
//!
//! Wires up the `/api/users` endpoint group.
//!
//! - `get.rs`: listing (optionally by role) and single user
//! - `post.rs`: account creation
//! - `put.rs`: wholesale update and enable/disable toggle

use axum::{
    Router,
    routing::{get, put},
};
use get::{get_user, list_users};
use post::create_user;
use put::{toggle_user, update_user};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;
pub mod put;

/// - `GET /users` → `list_users`
/// - `POST /users` → `create_user`
/// - `GET /users/{user_id}` → `get_user`
/// - `PUT /users/{user_id}` → `update_user`
/// - `PUT /users/{user_id}/toggle` → `toggle_user`
pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/{user_id}", get(get_user).put(update_user))
        .route("/{user_id}/toggle", put(toggle_user))
}
