use crate::seed::{Seeder, run_seeder};
use crate::seeds::{ticket::TicketSeeder, user::UserSeeder};
use colored::*;
use migration::Migrator;
use sea_orm_migration::MigratorTrait;
use services::user_service::UserService;
use std::process::ExitCode;
use util::config::AppConfig;

mod seed;
mod seeds;

#[tokio::main]
async fn main() -> ExitCode {
    let config = AppConfig::global().clone();
    if let Err(err) = config.ensure_database_dir() {
        eprintln!("{} {err}", "Failed to create database directory:".yellow());
    }

    let db = match db::connect(&config.database_url()).await {
        Ok(db) => db,
        Err(err) => {
            eprintln!("{} {err}", "Failed to connect to database:".red());
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = Migrator::up(&db, None).await {
        eprintln!("{} {err}", "Failed to run migrations:".red());
        return ExitCode::FAILURE;
    }

    match UserService::list(&db, None).await {
        Ok(users) if !users.is_empty() => {
            println!("{}", "Database already has users, skipping seed".yellow());
            return ExitCode::SUCCESS;
        }
        Ok(_) => {}
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }

    for (seeder, name) in [
        (Box::new(UserSeeder) as Box<dyn Seeder + Send + Sync>, "User"),
        (Box::new(TicketSeeder), "Ticket"),
    ] {
        if let Err(err) = run_seeder(&*seeder, name, &db).await {
            eprintln!("{err}");
            return ExitCode::FAILURE;
        }
    }

    ExitCode::SUCCESS
}
