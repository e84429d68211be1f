use db::models::{
    ticket::{Model as TicketModel, TicketStatus},
    user::Model as UserModel,
};
use serde::{Deserialize, Serialize};

/// Body of `PUT /tickets/{ticket_id}/status`. Which of the optional fields are required
/// depends on `status`.
#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: TicketStatus,
    pub cause: Option<String>,
    pub solution: Option<String>,
    pub hold_reason: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct TicketDetailResponse {
    #[serde(flatten)]
    pub ticket: TicketModel,
    pub assignee: Option<UserModel>,
}
