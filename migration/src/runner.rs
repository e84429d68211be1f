use colored::*;
use sea_orm_migration::prelude::*;
use std::io::{self, Write};
use std::time::Instant;

const STATUS_COLUMN: usize = 80;

pub async fn run_all_migrations(url: &str) -> Result<(), DbErr> {
    let db = sea_orm::Database::connect(url).await?;

    println!("Running migrations...");
    let schema_manager = SchemaManager::new(&db);

    for migration in <migration::Migrator as MigratorTrait>::migrations() {
        run_migration(&schema_manager, migration).await?;
    }

    Ok(())
}

async fn run_migration(
    schema_manager: &SchemaManager<'_>,
    migration: Box<dyn MigrationTrait>,
) -> Result<(), DbErr> {
    let name_str = format!("Applying {}", migration.name().bold());
    let dots = ".".repeat(STATUS_COLUMN.saturating_sub(name_str.len()));
    print!("{}{} ", name_str, dots);
    io::stdout().flush().ok();

    let start = Instant::now();
    match migration.up(schema_manager).await {
        Ok(()) => {
            let time_str = format!("({:.2?})", start.elapsed()).dimmed();
            println!("{} {}", "done".green(), time_str);
            Ok(())
        }
        Err(err) => {
            println!("{}", "failed".red());
            Err(err)
        }
    }
}
