use sea_orm::entity::prelude::*;
use sea_orm::{ConnectionTrait, Set};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use strum::{Display, EnumString};

/// One role held by one user. A user's role set is the rows sharing its `user_id`.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "user_roles")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub user_id: String,

    #[sea_orm(primary_key, auto_increment = false)]
    pub role: Role,
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    EnumIter,
    DeriveActiveEnum,
    Display,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[sea_orm(rs_type = "String", db_type = "Enum", enum_name = "user_role_type")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[sea_orm(string_value = "admin")]
    Admin,

    #[sea_orm(string_value = "technician")]
    Technician,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Roles held by `user_id`, sorted.
    pub async fn roles_for<C: ConnectionTrait>(db: &C, user_id: &str) -> Result<Vec<Role>, DbErr> {
        let rows = Entity::find()
            .filter(Column::UserId.eq(user_id))
            .all(db)
            .await?;

        let mut roles: Vec<Role> = rows.into_iter().map(|r| r.role).collect();
        roles.sort();
        Ok(roles)
    }

    /// Roles for many users in one query, keyed by user id. Users without roles are absent.
    pub async fn roles_for_users<C: ConnectionTrait>(
        db: &C,
        user_ids: &[String],
    ) -> Result<HashMap<String, Vec<Role>>, DbErr> {
        if user_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = Entity::find()
            .filter(Column::UserId.is_in(user_ids.iter().cloned()))
            .all(db)
            .await?;

        let mut grouped: HashMap<String, Vec<Role>> = HashMap::new();
        for row in rows {
            grouped.entry(row.user_id).or_default().push(row.role);
        }
        for roles in grouped.values_mut() {
            roles.sort();
        }
        Ok(grouped)
    }

    /// Ids of every user holding `role`.
    pub async fn user_ids_with_role<C: ConnectionTrait>(
        db: &C,
        role: Role,
    ) -> Result<Vec<String>, DbErr> {
        let rows = Entity::find()
            .filter(Column::Role.eq(role))
            .all(db)
            .await?;
        Ok(rows.into_iter().map(|r| r.user_id).collect())
    }

    /// Replaces the whole role set of `user_id`. Duplicates in `roles` are collapsed.
    ///
    /// Not atomic on its own; run it on a transaction when paired with other writes.
    pub async fn replace_for_user<C: ConnectionTrait>(
        db: &C,
        user_id: &str,
        roles: &[Role],
    ) -> Result<Vec<Role>, DbErr> {
        Entity::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(db)
            .await?;

        let mut roles = roles.to_vec();
        roles.sort();
        roles.dedup();

        if !roles.is_empty() {
            let rows = roles.iter().map(|role| ActiveModel {
                user_id: Set(user_id.to_owned()),
                role: Set(*role),
            });
            Entity::insert_many(rows).exec_without_returning(db).await?;
        }

        Ok(roles)
    }
}
