#[cfg(test)]
mod tests {
    use crate::helpers::{empty_request, expect_json_error, get_json_body, json_request, make_test_app};
    use axum::http::StatusCode;
    use db::models::user_role::Role;
    use serde_json::json;
    use services::user_service::{CreateUser, UserService};
    use tower::ServiceExt;

    // --- POST /api/tickets (create_ticket) ---

    #[tokio::test]
    async fn test_create_ticket_success() {
        let (app, _) = make_test_app().await;
        let payload = json!({
            "name": "Printer down",
            "priority": "High",
            "creator": "tech-1",
            "description": "No output"
        });

        let response = app
            .oneshot(json_request("POST", "/api/tickets", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "Ticket created successfully");
        let ticket = &json["data"];
        assert_eq!(ticket["ticket_number"], 1001);
        assert_eq!(ticket["status"], "Not Started");
        assert_eq!(ticket["priority"], "High");
        assert_eq!(ticket["assigned_to_id"], serde_json::Value::Null);
        assert!(ticket["created_at"].as_str().is_some());
    }

    #[tokio::test]
    async fn test_create_ticket_numbers_are_sequential() {
        let (app, _) = make_test_app().await;
        let payload = json!({
            "name": "Printer down",
            "priority": "Low",
            "creator": "tech-1",
            "description": "No output"
        });

        for expected in [1001, 1002, 1003] {
            let response = app
                .clone()
                .oneshot(json_request("POST", "/api/tickets", &payload))
                .await
                .unwrap();
            let json = get_json_body(response).await;
            assert_eq!(json["data"]["ticket_number"], expected);
        }
    }

    #[tokio::test]
    async fn test_create_ticket_with_initial_assignee() {
        let (app, app_state) = make_test_app().await;
        let tech = UserService::create(
            app_state.db(),
            CreateUser {
                full_name: "Tess Tech".into(),
                email: "tess@example.com".into(),
                roles: vec![Role::Technician],
            },
        )
        .await
        .unwrap();
        let payload = json!({
            "name": "VPN drops",
            "priority": "Medium",
            "creator": "Front desk",
            "description": "Every hour",
            "assigned_to_id": tech.user.id,
            "assigned_to_name": "Tess Tech"
        });

        let response = app
            .oneshot(json_request("POST", "/api/tickets", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["assigned_to_id"], tech.user.id.as_str());
        assert_eq!(json["data"]["assigned_to_name"], "Tess Tech");
    }

    #[tokio::test]
    async fn test_create_ticket_validation_errors_per_field() {
        let (app, _) = make_test_app().await;
        let payload = json!({
            "name": "Printer!! down",
            "creator": "tech  one",
            "description": ""
        });

        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/tickets", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        let errors = &json["data"];
        assert_eq!(
            errors["name"],
            "Cannot contain multiple continuous special characters"
        );
        assert_eq!(errors["creator"], "Cannot contain multiple continuous spaces");
        assert_eq!(errors["description"], "This field is required");
        assert_eq!(errors["priority"], "Priority is required");

        let response = app
            .oneshot(empty_request("GET", "/api/tickets"))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn test_create_ticket_assignee_requires_both_fields() {
        let (app, _) = make_test_app().await;
        let payload = json!({
            "name": "VPN drops",
            "priority": "Medium",
            "creator": "Front desk",
            "description": "Every hour",
            "assigned_to_id": "user-1"
        });

        let response = app
            .oneshot(json_request("POST", "/api/tickets", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(
            json["data"]["assigned_to_name"],
            "Assignee id and name must be provided together"
        );
    }

    #[tokio::test]
    async fn test_create_ticket_unknown_priority_is_enveloped() {
        let (app, _) = make_test_app().await;
        let payload = json!({
            "name": "Printer down",
            "priority": "Urgent",
            "creator": "tech-1",
            "description": "No output"
        });

        let response = app
            .oneshot(json_request("POST", "/api/tickets", &payload))
            .await
            .unwrap();
        let json = expect_json_error(response, StatusCode::UNPROCESSABLE_ENTITY).await;
        assert!(json["message"].as_str().unwrap().contains("Urgent"));
    }

    #[tokio::test]
    async fn test_create_ticket_without_json_content_type_is_enveloped() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(empty_request("POST", "/api/tickets"))
            .await
            .unwrap();
        expect_json_error(response, StatusCode::UNSUPPORTED_MEDIA_TYPE).await;
    }
}
