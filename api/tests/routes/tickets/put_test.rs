#[cfg(test)]
mod tests {
    use crate::helpers::{empty_request, expect_json_error, get_json_body, json_request, make_test_app};
    use axum::http::StatusCode;
    use db::models::user_role::Role;
    use serde_json::{Value, json};
    use services::user_service::{CreateUser, UserService};
    use tower::ServiceExt;

    async fn post_ticket(app: &axum::Router) -> Value {
        let payload = json!({
            "name": "Printer down",
            "priority": "High",
            "creator": "tech-1",
            "description": "No output"
        });
        let response = app
            .clone()
            .oneshot(json_request("POST", "/api/tickets", &payload))
            .await
            .unwrap();
        get_json_body(response).await["data"].clone()
    }

    // --- PUT /api/tickets/{ticket_id}/status ---

    #[tokio::test]
    async fn test_solve_ticket_end_to_end() {
        let (app, _) = make_test_app().await;
        let ticket = post_ticket(&app).await;
        let uri = format!("/api/tickets/{}/status", ticket["id"]);

        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, &json!({ "status": "In Progress" })))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &uri,
                &json!({ "status": "Solved", "cause": "toner empty", "solution": "replaced toner" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Ticket status updated successfully");

        let response = app
            .oneshot(empty_request("GET", &format!("/api/tickets/{}", ticket["id"])))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        let solved = &json["data"];
        assert_eq!(solved["status"], "Solved");
        assert_eq!(solved["cause"], "toner empty");
        assert_eq!(solved["solution"], "replaced toner");
        assert_eq!(solved["ticket_number"], ticket["ticket_number"]);
    }

    #[tokio::test]
    async fn test_solved_requires_cause_and_solution() {
        let (app, _) = make_test_app().await;
        let ticket = post_ticket(&app).await;
        let uri = format!("/api/tickets/{}/status", ticket["id"]);

        let response = app
            .clone()
            .oneshot(json_request(
                "PUT",
                &uri,
                &json!({ "status": "Solved", "cause": "toner empty" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["solution"], "This field is required");
        assert!(json["data"].get("cause").is_none());

        let response = app
            .oneshot(empty_request("GET", &format!("/api/tickets/{}", ticket["id"])))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["status"], "Not Started");
    }

    #[tokio::test]
    async fn test_on_hold_requires_reason() {
        let (app, _) = make_test_app().await;
        let ticket = post_ticket(&app).await;
        let uri = format!("/api/tickets/{}/status", ticket["id"]);

        let response = app
            .oneshot(json_request(
                "PUT",
                &uri,
                &json!({ "status": "On Hold", "hold_reason": " later" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["hold_reason"], "Cannot start with a space");
    }

    #[tokio::test]
    async fn test_status_update_unknown_ticket_is_generic_failure() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(json_request(
                "PUT",
                "/api/tickets/9999/status",
                &json!({ "status": "In Progress" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = get_json_body(response).await;
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "Failed to update ticket status");
    }

    // --- PUT /api/tickets/{ticket_id}/assignee ---

    #[tokio::test]
    async fn test_update_assignee_success() {
        let (app, app_state) = make_test_app().await;
        let tech = UserService::create(
            app_state.db(),
            CreateUser {
                full_name: "Sam Support".into(),
                email: "sam@example.com".into(),
                roles: vec![Role::Technician],
            },
        )
        .await
        .unwrap();
        let ticket = post_ticket(&app).await;
        let uri = format!("/api/tickets/{}/assignee", ticket["id"]);

        let response = app
            .oneshot(json_request(
                "PUT",
                &uri,
                &json!({ "assigned_to_id": tech.user.id, "assigned_to_name": "Sam Support" }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["assigned_to_id"], tech.user.id.as_str());
        assert_eq!(json["data"]["assigned_to_name"], "Sam Support");
    }

    #[tokio::test]
    async fn test_update_assignee_rejects_blank_name() {
        let (app, _) = make_test_app().await;
        let ticket = post_ticket(&app).await;
        let uri = format!("/api/tickets/{}/assignee", ticket["id"]);

        let response = app
            .oneshot(json_request(
                "PUT",
                &uri,
                &json!({ "assigned_to_id": "user-7", "assigned_to_name": "   " }),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["assigned_to_name"], "This field is required");
    }

    #[tokio::test]
    async fn test_unknown_status_value_is_enveloped() {
        let (app, _) = make_test_app().await;
        let ticket = post_ticket(&app).await;
        let uri = format!("/api/tickets/{}/status", ticket["id"]);

        let response = app
            .oneshot(json_request("PUT", &uri, &json!({ "status": "Closed" })))
            .await
            .unwrap();
        let json = expect_json_error(response, StatusCode::UNPROCESSABLE_ENTITY).await;
        assert!(json["message"].as_str().unwrap().contains("Closed"));
    }
}
