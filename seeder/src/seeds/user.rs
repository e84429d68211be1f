use crate::seed::Seeder;
use db::models::user_role::Role;
use fake::{
    Fake,
    faker::{
        internet::en::SafeEmail,
        name::en::{FirstName, LastName},
    },
};
use sea_orm::DatabaseConnection;
use services::{
    ServiceError,
    user_service::{CreateUser, UserService},
};

pub struct UserSeeder;

#[async_trait::async_trait]
impl Seeder for UserSeeder {
    async fn seed(&self, db: &DatabaseConnection) -> Result<(), ServiceError> {
        // Fixed accounts
        let fixed = [
            ("Ada Admin", "admin@example.com", vec![Role::Admin]),
            ("Tess Tech", "tess@example.com", vec![Role::Technician]),
            ("Sam Support", "sam@example.com", vec![Role::Admin, Role::Technician]),
        ];
        for (full_name, email, roles) in fixed {
            UserService::create(
                db,
                CreateUser {
                    full_name: full_name.into(),
                    email: email.into(),
                    roles,
                },
            )
            .await?;
        }

        // Random technicians
        for _ in 0..8 {
            let first: String = FirstName().fake();
            let last: String = LastName().fake();
            let email: String = SafeEmail().fake();
            let _ = UserService::create(
                db,
                CreateUser {
                    full_name: format!("{first} {last}"),
                    email,
                    roles: vec![Role::Technician],
                },
            )
            .await;
        }

        Ok(())
    }
}
