use axum::{
    body::Body,
    extract::FromRequestParts,
    http::{Method, Request},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::TypedHeader;
use headers::{Origin, UserAgent};
use std::time::Instant;
use tracing::info;

/// Logs method, path, origin, user-agent, response status and latency for each incoming
/// HTTP request. CORS preflight `OPTIONS` requests are passed through silently.
///
/// ```ignore
/// use axum::{Router, middleware::from_fn};
/// use api::middleware::log_request;
///
/// let app = Router::new().layer(from_fn(log_request));
/// ```
pub async fn log_request(req: Request<Body>, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if parts.method == Method::OPTIONS {
        return next.run(Request::from_parts(parts, body)).await;
    }

    let origin = TypedHeader::<Origin>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(o)| o.to_string());

    let user_agent = TypedHeader::<UserAgent>::from_request_parts(&mut parts, &())
        .await
        .ok()
        .map(|TypedHeader(ua)| ua.to_string());

    let method = parts.method.clone();
    let path = parts.uri.path().to_owned();
    let started = Instant::now();

    let response = next.run(Request::from_parts(parts, body)).await;

    info!(
        method = ?method,
        path = %path,
        origin = origin.unwrap_or_else(|| "unknown".into()),
        user_agent = user_agent.unwrap_or_else(|| "unknown".into()),
        status = response.status().as_u16(),
        latency_ms = started.elapsed().as_millis() as u64,
        "Incoming request"
    );

    response
}
