pub mod models;
pub mod test_utils;

use sea_orm::{Database, DatabaseConnection, DbErr};

/// Opens the database behind `url`, a full `sqlite:` DSN such as the one built by
/// `util::config::AppConfig::database_url`.
pub async fn connect(url: &str) -> Result<DatabaseConnection, DbErr> {
    tracing::debug!(%url, "connecting to database");
    Database::connect(url).await
}
