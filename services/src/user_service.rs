use crate::error::{ServiceError, store_fault};
use common::{validate_email_address, validate_text};
use db::models::{
    ticket::Model as TicketModel,
    user::Model as UserModel,
    user_role::{Model as UserRoleModel, Role},
};
use sea_orm::{DatabaseConnection, TransactionTrait};
use serde::{Deserialize, Serialize};
use tracing::info;
use validator::Validate;

#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(default)]
pub struct CreateUser {
    #[validate(custom(function = "validate_text"))]
    pub full_name: String,

    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    #[validate(length(min = 1, message = "At least one role must be selected"))]
    pub roles: Vec<Role>,
}

/// Wholesale replacement of a user's editable fields.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(custom(function = "validate_text"))]
    pub full_name: String,

    #[validate(custom(function = "validate_email_address"))]
    pub email: String,

    #[validate(length(min = 1, message = "At least one role must be selected"))]
    pub roles: Vec<Role>,

    pub enabled: bool,
}

/// A user row together with its role set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserAccount {
    #[serde(flatten)]
    pub user: UserModel,
    pub roles: Vec<Role>,
}

pub struct UserService;

impl UserService {
    pub async fn create(
        db: &DatabaseConnection,
        params: CreateUser,
    ) -> Result<UserAccount, ServiceError> {
        params.validate()?;

        let fault = store_fault("create user");
        let txn = db.begin().await.map_err(&fault)?;
        let user = UserModel::create(&txn, &params.full_name, &params.email)
            .await
            .map_err(&fault)?;
        let roles = UserRoleModel::replace_for_user(&txn, &user.id, &params.roles)
            .await
            .map_err(&fault)?;
        txn.commit().await.map_err(&fault)?;

        info!(user_id = %user.id, "user created");
        Ok(UserAccount { user, roles })
    }

    /// Overwrites the user, replaces its roles and rewrites the cached assignee name on
    /// every ticket assigned to it. All three writes commit together or not at all.
    pub async fn update(
        db: &DatabaseConnection,
        user_id: &str,
        params: UpdateUser,
    ) -> Result<UserAccount, ServiceError> {
        params.validate()?;

        let fault = store_fault("update user");
        let txn = db.begin().await.map_err(&fault)?;
        let user = UserModel::overwrite(
            &txn,
            user_id,
            &params.full_name,
            &params.email,
            params.enabled,
        )
        .await
        .map_err(&fault)?;
        let roles = UserRoleModel::replace_for_user(&txn, user_id, &params.roles)
            .await
            .map_err(&fault)?;
        let renamed = TicketModel::rename_assignee(&txn, user_id, &user.full_name)
            .await
            .map_err(&fault)?;
        txn.commit().await.map_err(&fault)?;

        info!(user_id, tickets = renamed, "user updated");
        Ok(UserAccount { user, roles })
    }

    /// Flips `enabled` only. Roles and ticket assignments stay as they are.
    pub async fn toggle_enabled(
        db: &DatabaseConnection,
        user_id: &str,
    ) -> Result<UserAccount, ServiceError> {
        let fault = store_fault("toggle user");
        let user = UserModel::toggle_enabled(db, user_id)
            .await
            .map_err(&fault)?;
        let roles = UserRoleModel::roles_for(db, user_id)
            .await
            .map_err(&fault)?;

        info!(user_id, enabled = user.enabled, "user toggled");
        Ok(UserAccount { user, roles })
    }

    /// Users sorted by name. A role filter also hides disabled users.
    pub async fn list(
        db: &DatabaseConnection,
        role: Option<Role>,
    ) -> Result<Vec<UserAccount>, ServiceError> {
        let fault = store_fault("list users");
        let users = UserModel::list(db, role).await.map_err(&fault)?;
        let ids: Vec<String> = users.iter().map(|u| u.id.clone()).collect();
        let mut roles = UserRoleModel::roles_for_users(db, &ids)
            .await
            .map_err(&fault)?;

        Ok(users
            .into_iter()
            .map(|user| {
                let roles = roles.remove(&user.id).unwrap_or_default();
                UserAccount { user, roles }
            })
            .collect())
    }

    pub async fn find(
        db: &DatabaseConnection,
        user_id: &str,
    ) -> Result<Option<UserAccount>, ServiceError> {
        let fault = store_fault("fetch user");
        let Some(user) = UserModel::find_by_id(db, user_id).await.map_err(&fault)? else {
            return Ok(None);
        };
        let roles = UserRoleModel::roles_for(db, user_id)
            .await
            .map_err(&fault)?;
        Ok(Some(UserAccount { user, roles }))
    }
}
