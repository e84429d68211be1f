//! Application state container shared across Axum route handlers.
//!
//! Handlers receive it through Axum's `State<AppState>` extractor; cloning is cheap
//! because `DatabaseConnection` is a pooled handle.

use sea_orm::DatabaseConnection;

#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
}

impl AppState {
    /// Creates a new `AppState` around an already-connected database.
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Returns a shared reference to the internal `DatabaseConnection`.
    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
