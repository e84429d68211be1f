#[cfg(test)]
mod tests {
    use crate::helpers::{empty_request, get_json_body, make_test_app};
    use axum::http::StatusCode;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_check() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(empty_request("GET", "/api/health")).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"], "OK");
    }

    #[tokio::test]
    async fn test_unknown_route_is_404() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(empty_request("GET", "/api/nope")).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
