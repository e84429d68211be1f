pub mod extract;
pub mod middleware;
pub mod response;
pub mod routes;

use axum::{
    Router,
    http::header::CONTENT_TYPE,
    middleware::from_fn,
};
use tower_http::cors::CorsLayer;
use util::state::AppState;

/// Full application: `/api` routes, request logging and a permissive CORS layer.
pub fn app(app_state: AppState) -> Router {
    let cors = CorsLayer::very_permissive().expose_headers([CONTENT_TYPE]);

    Router::new()
        .nest("/api", routes::routes(app_state))
        .layer(from_fn(middleware::log_request))
        .layer(cors)
}
