#[cfg(test)]
mod tests {
    use crate::helpers::{get_json_body, json_request, make_test_app};
    use axum::http::StatusCode;
    use serde_json::json;
    use tower::ServiceExt;

    // --- POST /api/users (create_user) ---

    #[tokio::test]
    async fn test_create_user_success() {
        let (app, _) = make_test_app().await;
        let payload = json!({
            "full_name": "Tess Tech",
            "email": "tess@example.com",
            "roles": ["technician", "admin", "technician"]
        });

        let response = app
            .oneshot(json_request("POST", "/api/users", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "User created successfully");
        let user = &json["data"];
        assert!(user["id"].as_str().is_some_and(|id| !id.is_empty()));
        assert_eq!(user["full_name"], "Tess Tech");
        assert_eq!(user["enabled"], true);
        assert_eq!(user["roles"], json!(["admin", "technician"]));
    }

    #[tokio::test]
    async fn test_create_user_requires_a_role() {
        let (app, _) = make_test_app().await;
        let payload = json!({
            "full_name": "Tess Tech",
            "email": "tess@example.com",
            "roles": []
        });

        let response = app
            .oneshot(json_request("POST", "/api/users", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["roles"], "At least one role must be selected");
    }

    #[tokio::test]
    async fn test_create_user_invalid_fields() {
        let (app, _) = make_test_app().await;
        let payload = json!({
            "full_name": " Tess",
            "email": "tess..example",
            "roles": ["admin"]
        });

        let response = app
            .oneshot(json_request("POST", "/api/users", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["full_name"], "Cannot start with a space");
        assert_eq!(
            json["data"]["email"],
            "Cannot contain multiple continuous special characters"
        );
    }
}
