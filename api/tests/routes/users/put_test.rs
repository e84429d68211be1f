#[cfg(test)]
mod tests {
    use crate::helpers::{empty_request, expect_json_error, get_json_body, json_request, make_test_app};
    use axum::http::StatusCode;
    use db::models::{
        ticket::{Model as TicketModel, TicketPriority},
        user_role::Role,
    };
    use serde_json::json;
    use services::{
        ticket_service::{CreateTicket, TicketService},
        user_service::{CreateUser, UserAccount, UserService},
    };
    use sea_orm::DatabaseConnection;
    use tower::ServiceExt;

    async fn create_tech(db: &DatabaseConnection) -> UserAccount {
        UserService::create(
            db,
            CreateUser {
                full_name: "Tess Tech".into(),
                email: "tess@example.com".into(),
                roles: vec![Role::Technician],
            },
        )
        .await
        .unwrap()
    }

    async fn assigned_ticket(db: &DatabaseConnection, tech: &UserAccount) -> TicketModel {
        TicketService::create(
            db,
            CreateTicket {
                name: "Printer down".into(),
                priority: Some(TicketPriority::High),
                creator: "Front desk".into(),
                description: "No output".into(),
                assigned_to_id: Some(tech.user.id.clone()),
                assigned_to_name: Some(tech.user.full_name.clone()),
            },
        )
        .await
        .unwrap()
    }

    // --- PUT /api/users/{user_id} (update_user) ---

    #[tokio::test]
    async fn test_update_user_renames_assigned_tickets() {
        let (app, app_state) = make_test_app().await;
        let tech = create_tech(app_state.db()).await;
        let t1 = assigned_ticket(app_state.db(), &tech).await;
        let t2 = assigned_ticket(app_state.db(), &tech).await;

        let payload = json!({
            "full_name": "Tess Technician",
            "email": "tess.t@example.com",
            "roles": ["technician"],
            "enabled": true
        });
        let uri = format!("/api/users/{}", tech.user.id);
        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "User updated successfully");
        assert_eq!(json["data"]["full_name"], "Tess Technician");
        assert_eq!(json["data"]["email"], "tess.t@example.com");

        for id in [t1.id, t2.id] {
            let response = app
                .clone()
                .oneshot(empty_request("GET", &format!("/api/tickets/{id}")))
                .await
                .unwrap();
            let json = get_json_body(response).await;
            assert_eq!(json["data"]["assigned_to_name"], "Tess Technician");
        }
    }

    #[tokio::test]
    async fn test_update_user_validation_error() {
        let (app, app_state) = make_test_app().await;
        let tech = create_tech(app_state.db()).await;

        let payload = json!({
            "full_name": "",
            "email": "tess@example.com",
            "roles": [],
            "enabled": true
        });
        let uri = format!("/api/users/{}", tech.user.id);
        let response = app
            .oneshot(json_request("PUT", &uri, &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = get_json_body(response).await;
        assert_eq!(json["data"]["full_name"], "This field is required");
        assert_eq!(json["data"]["roles"], "At least one role must be selected");
    }

    #[tokio::test]
    async fn test_update_unknown_user_is_generic_failure() {
        let (app, _) = make_test_app().await;

        let payload = json!({
            "full_name": "Nobody",
            "email": "nobody@example.com",
            "roles": ["admin"],
            "enabled": true
        });
        let response = app
            .oneshot(json_request("PUT", "/api/users/missing", &payload))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = get_json_body(response).await;
        assert_eq!(json["message"], "Failed to update user");
    }

    // --- PUT /api/users/{user_id}/toggle ---

    #[tokio::test]
    async fn test_toggle_user_twice() {
        let (app, app_state) = make_test_app().await;
        let tech = create_tech(app_state.db()).await;
        let uri = format!("/api/users/{}/toggle", tech.user.id);

        let response = app
            .clone()
            .oneshot(empty_request("PUT", &uri))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["enabled"], false);
        assert_eq!(json["message"], "User disabled successfully");

        let response = app.oneshot(empty_request("PUT", &uri)).await.unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["enabled"], true);
        assert_eq!(json["data"]["roles"], json!(["technician"]));
    }

    #[tokio::test]
    async fn test_update_user_partial_body_is_enveloped() {
        let (app, app_state) = make_test_app().await;
        let tech = create_tech(app_state.db()).await;

        let uri = format!("/api/users/{}", tech.user.id);
        let response = app
            .clone()
            .oneshot(json_request("PUT", &uri, &json!({ "full_name": "Tess" })))
            .await
            .unwrap();
        let json = expect_json_error(response, StatusCode::UNPROCESSABLE_ENTITY).await;
        assert!(json["message"].as_str().unwrap().contains("email"));

        let response = app
            .oneshot(empty_request("GET", &format!("/api/users/{}", tech.user.id)))
            .await
            .unwrap();
        let json = get_json_body(response).await;
        assert_eq!(json["data"]["full_name"], "Tess Tech");
    }
}
