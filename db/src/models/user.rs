use chrono::{DateTime, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::sea_query::Expr;
use sea_orm::{ConnectionTrait, QueryOrder, Set};
use serde::Serialize;
use uuid::Uuid;

use super::user_role::{self, Role};

/// Represents a user in the `users` table.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Opaque UUID assigned at creation.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub full_name: String,
    pub email: String,
    /// Disabled users are hidden from role-filtered listings (assignment pickers).
    pub enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::user_role::Entity")]
    Roles,

    #[sea_orm(has_many = "super::ticket::Entity")]
    AssignedTickets,
}

impl Related<super::user_role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Roles.def()
    }
}

impl Related<super::ticket::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AssignedTickets.def()
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

impl Model {
    /// Inserts an enabled user with a fresh UUID. Roles are stored separately, see
    /// [`user_role::Model::replace_for_user`].
    pub async fn create<C: ConnectionTrait>(
        db: &C,
        full_name: &str,
        email: &str,
    ) -> Result<Model, DbErr> {
        ActiveModel {
            id: Set(Uuid::new_v4().to_string()),
            full_name: Set(full_name.to_owned()),
            email: Set(email.to_owned()),
            enabled: Set(true),
            ..Default::default()
        }
        .insert(db)
        .await
    }

    pub async fn find_by_id<C: ConnectionTrait>(db: &C, id: &str) -> Result<Option<Model>, DbErr> {
        Entity::find_by_id(id.to_owned()).one(db).await
    }

    /// All users sorted by name. With a role, only enabled users holding it.
    pub async fn list<C: ConnectionTrait>(db: &C, role: Option<Role>) -> Result<Vec<Model>, DbErr> {
        let mut query = Entity::find();

        if let Some(role) = role {
            let ids = user_role::Model::user_ids_with_role(db, role).await?;
            query = query
                .filter(Column::Id.is_in(ids))
                .filter(Column::Enabled.eq(true));
        }

        query
            .order_by_asc(Column::FullName)
            .order_by_asc(Column::Id)
            .all(db)
            .await
    }

    /// Overwrites name, email and enabled flag of an existing user.
    pub async fn overwrite<C: ConnectionTrait>(
        db: &C,
        id: &str,
        full_name: &str,
        email: &str,
        enabled: bool,
    ) -> Result<Model, DbErr> {
        let model = Self::find_by_id(db, id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User not found for ID {id}")))?;

        let mut active: ActiveModel = model.into();
        active.full_name = Set(full_name.to_owned());
        active.email = Set(email.to_owned());
        active.enabled = Set(enabled);
        active.update(db).await
    }

    /// Flips `enabled` in a single store-side update and returns the new row.
    pub async fn toggle_enabled<C: ConnectionTrait>(db: &C, id: &str) -> Result<Model, DbErr> {
        let result = Entity::update_many()
            .col_expr(Column::Enabled, Expr::col(Column::Enabled).not())
            .col_expr(Column::UpdatedAt, Expr::value(Utc::now()))
            .filter(Column::Id.eq(id))
            .exec(db)
            .await?;

        if result.rows_affected == 0 {
            return Err(DbErr::RecordNotFound(format!("User not found for ID {id}")));
        }

        Self::find_by_id(db, id)
            .await?
            .ok_or_else(|| DbErr::RecordNotFound(format!("User not found for ID {id}")))
    }
}
