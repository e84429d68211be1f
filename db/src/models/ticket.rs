use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ConnectionTrait, QueryOrder, Set};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::user;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "tickets")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,

    /// Human-facing sequential number, distinct from `id`.
    pub ticket_number: i64,

    pub name: String,
    pub description: String,
    pub priority: TicketPriority,
    pub creator: String,

    /// Assignee reference plus its cached display name. Both are written together, and the
    /// name is rewritten whenever the referenced user is renamed.
    pub assigned_to_id: Option<String>,
    pub assigned_to_name: Option<String>,

    pub status: TicketStatus,

    /// Filled on transition to Solved and kept afterwards.
    pub cause: Option<String>,
    pub solution: Option<String>,
    /// Filled on transition to On Hold and kept afterwards.
    pub hold_reason: Option<String>,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "ticket_status")]
#[strum(ascii_case_insensitive)]
pub enum TicketStatus {
    #[sea_orm(string_value = "Not Started")]
    #[serde(rename = "Not Started")]
    #[strum(serialize = "Not Started")]
    NotStarted,

    #[sea_orm(string_value = "In Progress")]
    #[serde(rename = "In Progress")]
    #[strum(serialize = "In Progress")]
    InProgress,

    #[sea_orm(string_value = "On Hold")]
    #[serde(rename = "On Hold")]
    #[strum(serialize = "On Hold")]
    OnHold,

    #[sea_orm(string_value = "Solved")]
    #[serde(rename = "Solved")]
    #[strum(serialize = "Solved")]
    Solved,
}

impl TicketStatus {
    /// Board column order.
    pub const ALL: [TicketStatus; 4] = [
        TicketStatus::NotStarted,
        TicketStatus::InProgress,
        TicketStatus::OnHold,
        TicketStatus::Solved,
    ];
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "ticket_priority")]
#[strum(ascii_case_insensitive)]
pub enum TicketPriority {
    #[sea_orm(string_value = "High")]
    High,

    #[sea_orm(string_value = "Medium")]
    Medium,

    #[sea_orm(string_value = "Low")]
    Low,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::AssignedToId",
        to = "super::user::Column::Id",
        on_delete = "SetNull"
    )]
    AssignedTo,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignedTo.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        let now = Utc::now();
        if insert && self.created_at.is_not_set() {
            self.created_at = Set(now);
        }
        self.updated_at = Set(now);
        Ok(self)
    }
}

/// Column values for a ticket that has not been stored yet.
#[derive(Debug, Clone)]
pub struct NewTicket {
    pub ticket_number: i64,
    pub name: String,
    pub description: String,
    pub priority: TicketPriority,
    pub creator: String,
    pub assignee: Option<(String, String)>,
}

/// Optional payload columns written alongside a status change. `None` leaves the stored
/// value untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StatusFields {
    pub cause: Option<String>,
    pub solution: Option<String>,
    pub hold_reason: Option<String>,
}

impl Model {
    /// Inserts a ticket in `Not Started`.
    pub async fn create<C: ConnectionTrait>(db: &C, new: NewTicket) -> Result<Model, DbErr> {
        let (assigned_to_id, assigned_to_name) = match new.assignee {
            Some((id, name)) => (Some(id), Some(name)),
            None => (None, None),
        };

        ActiveModel {
            ticket_number: Set(new.ticket_number),
            name: Set(new.name),
            description: Set(new.description),
            priority: Set(new.priority),
            creator: Set(new.creator),
            assigned_to_id: Set(assigned_to_id),
            assigned_to_name: Set(assigned_to_name),
            status: Set(TicketStatus::NotStarted),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: i64) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id).one(db).await
    }

    /// The ticket together with its assignee row, when it has one.
    pub async fn find_with_assignee<C: ConnectionTrait>(
        db: &C,
        id: i64,
    ) -> Result<Option<(Model, Option<user::Model>)>, DbErr> {
        Entity::find_by_id(id)
            .find_also_related(user::Entity)
            .one(db)
            .await
    }

    /// Every ticket, most recently updated first.
    pub async fn list_recent<C: ConnectionTrait>(db: &C) -> Result<Vec<Model>, DbErr> {
        Entity::find()
            .order_by_desc(Column::UpdatedAt)
            .order_by_desc(Column::Id)
            .all(db)
            .await
    }

    /// Highest `ticket_number` currently stored.
    pub async fn highest_ticket_number<C: ConnectionTrait>(db: &C) -> Result<Option<i64>, DbErr> {
        let top = Entity::find()
            .order_by_desc(Column::TicketNumber)
            .one(db)
            .await?;
        Ok(top.map(|t| t.ticket_number))
    }

    pub async fn set_status<C: ConnectionTrait>(
        db: &C,
        ticket_id: i64,
        status: TicketStatus,
        fields: StatusFields,
    ) -> Result<Model, DbErr> {
        let model = Self::find_by_id(db, ticket_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Ticket not found for ID {ticket_id}")))?;

        let mut active: ActiveModel = model.into();
        active.status = Set(status);
        if let Some(cause) = fields.cause {
            active.cause = Set(Some(cause));
        }
        if let Some(solution) = fields.solution {
            active.solution = Set(Some(solution));
        }
        if let Some(hold_reason) = fields.hold_reason {
            active.hold_reason = Set(Some(hold_reason));
        }
        active.update(db).await
    }

    pub async fn set_assignee<C: ConnectionTrait>(
        db: &C,
        ticket_id: i64,
        user_id: &str,
        user_name: &str,
    ) -> Result<Model, DbErr> {
        let model = Self::find_by_id(db, ticket_id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("Ticket not found for ID {ticket_id}")))?;

        let mut active: ActiveModel = model.into();
        active.assigned_to_id = Set(Some(user_id.to_owned()));
        active.assigned_to_name = Set(Some(user_name.to_owned()));
        active.update(db).await
    }

    /// Rewrites the cached assignee name on every ticket assigned to `user_id`.
    /// Returns the number of tickets touched.
    pub async fn rename_assignee<C: ConnectionTrait>(
        db: &C,
        user_id: &str,
        user_name: &str,
    ) -> Result<u64, DbErr> {
        let result = Entity::update_many()
            .col_expr(Column::AssignedToName, Expr::value(user_name.to_owned()))
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::AssignedToId.eq(user_id))
            .exec(db)
            .await?;
        Ok(result.rows_affected)
    }
}
