use crate::error::{ServiceError, into_result, store_fault};
use crate::workflow::StatusChange;
use common::validate_text;
use db::models::{
    ticket::{Model as TicketModel, NewTicket, TicketPriority, TicketStatus},
    ticket_counter::Model as TicketCounter,
    user::Model as UserModel,
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::{Validate, ValidationError, ValidationErrors};

/// Missing text fields deserialize as empty and are then reported as required.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateTicket {
    #[validate(custom(function = "validate_text"))]
    pub name: String,

    #[validate(required(message = "Priority is required"))]
    pub priority: Option<TicketPriority>,

    #[validate(custom(function = "validate_text"))]
    pub creator: String,

    #[validate(custom(function = "validate_text"))]
    pub description: String,

    /// Optional initial assignee; id and name must be given together.
    #[validate(custom(function = "validate_text"))]
    pub assigned_to_id: Option<String>,

    #[validate(custom(function = "validate_text"))]
    pub assigned_to_name: Option<String>,
}

impl CreateTicket {
    fn check(&self) -> Result<(), ServiceError> {
        let mut errors = self.validate().err().unwrap_or_else(ValidationErrors::new);

        match (&self.assigned_to_id, &self.assigned_to_name) {
            (Some(_), None) => errors.add("assigned_to_name", assignee_pair_error()),
            (None, Some(_)) => errors.add("assigned_to_id", assignee_pair_error()),
            _ => {}
        }

        into_result(errors)
    }
}

fn assignee_pair_error() -> ValidationError {
    let mut err = ValidationError::new("assignee_pair");
    err.message = Some("Assignee id and name must be provided together".into());
    err
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateAssignee {
    #[validate(custom(function = "validate_text"))]
    pub assigned_to_id: String,

    #[validate(custom(function = "validate_text"))]
    pub assigned_to_name: String,
}

/// One kanban column.
#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub status: TicketStatus,
    pub tickets: Vec<TicketModel>,
}

pub struct TicketService;

impl TicketService {
    /// Validates, allocates the next ticket number and inserts the ticket in one
    /// transaction. The new ticket always starts in `Not Started`.
    pub async fn create(
        db: &DatabaseConnection,
        params: CreateTicket,
    ) -> Result<TicketModel, ServiceError> {
        params.check()?;

        let fault = store_fault("create ticket");
        let CreateTicket {
            name,
            priority,
            creator,
            description,
            assigned_to_id,
            assigned_to_name,
        } = params;
        let priority = priority.unwrap_or(TicketPriority::Medium);

        let txn = db.begin().await.map_err(&fault)?;
        let ticket_number = TicketCounter::next_ticket_number(&txn).await.map_err(&fault)?;
        let ticket = TicketModel::create(
            &txn,
            NewTicket {
                ticket_number,
                name,
                description,
                priority,
                creator,
                assignee: assigned_to_id.zip(assigned_to_name),
            },
        )
        .await
        .map_err(&fault)?;
        txn.commit().await.map_err(&fault)?;

        info!(ticket_id = ticket.id, ticket_number, "ticket created");
        Ok(ticket)
    }

    pub async fn update_status(
        db: &DatabaseConnection,
        ticket_id: i64,
        change: StatusChange,
    ) -> Result<TicketModel, ServiceError> {
        let status = change.status();
        let ticket = TicketModel::set_status(db, ticket_id, status, change.into_fields())
            .await
            .map_err(store_fault("update ticket status"))?;

        info!(ticket_id, status = %status, "ticket status updated");
        Ok(ticket)
    }

    pub async fn update_assignee(
        db: &DatabaseConnection,
        ticket_id: i64,
        params: UpdateAssignee,
    ) -> Result<TicketModel, ServiceError> {
        params.validate()?;

        let ticket = TicketModel::set_assignee(
            db,
            ticket_id,
            &params.assigned_to_id,
            &params.assigned_to_name,
        )
        .await
        .map_err(store_fault("update ticket assignee"))?;

        info!(ticket_id, assignee = %params.assigned_to_id, "ticket assignee updated");
        Ok(ticket)
    }

    /// All tickets, newest-updated first.
    pub async fn list(db: &DatabaseConnection) -> Result<Vec<TicketModel>, ServiceError> {
        TicketModel::list_recent(db)
            .await
            .map_err(store_fault("list tickets"))
    }

    /// Tickets grouped into the four status columns, in workflow order.
    pub async fn board(db: &DatabaseConnection) -> Result<Vec<BoardColumn>, ServiceError> {
        let mut tickets = Self::list(db).await?;

        Ok(TicketStatus::ALL
            .into_iter()
            .map(|status| {
                let (column, rest): (Vec<_>, Vec<_>) =
                    tickets.drain(..).partition(|t| t.status == status);
                tickets = rest;
                BoardColumn {
                    status,
                    tickets: column,
                }
            })
            .collect())
    }

    pub async fn find_with_assignee(
        db: &DatabaseConnection,
        ticket_id: i64,
    ) -> Result<Option<(TicketModel, Option<UserModel>)>, ServiceError> {
        TicketModel::find_with_assignee(db, ticket_id)
            .await
            .map_err(store_fault("fetch ticket"))
    }
}
